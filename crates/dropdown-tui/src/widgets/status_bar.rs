//! Status bar — bottom lines with the last event and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{C_ACCENT, C_MUTED, C_SECONDARY, C_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    /// Every dropdown is closed; keys move focus or open the focused one.
    Browse,
    /// The focused dropdown's panel is open and takes the keys.
    Choose,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Browse => "BROWSE",
            Self::Choose => "CHOOSE",
        }
    }

    fn keys(self) -> &'static str {
        match self {
            Self::Browse => {
                " ←→/Tab focus  Enter/Space open  r reset values  q quit"
            }
            Self::Choose => {
                " ↑↓ move  a-z jump  Enter/Space choose  Esc cancel  Tab leave"
            }
        }
    }
}

/// Draw the log bar: last event message.
pub fn draw_log_bar(frame: &mut Frame, area: Rect, last_log: Option<&str>) {
    let line = Line::from(vec![
        Span::styled("●", Style::default().fg(C_ACCENT)),
        Span::raw(" "),
        Span::styled(last_log.unwrap_or(""), Style::default().fg(C_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a horizontal separator line.
pub fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(C_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, mode: InputMode) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default().fg(C_SECONDARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(mode.keys(), Style::default().fg(C_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
