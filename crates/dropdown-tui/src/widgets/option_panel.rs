//! OptionPanel — the floating list of options under an open dropdown.

use dropdown_core::{RenderModel, Viewport};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::{
    style_active, style_default, style_focused_border, style_highlighted, style_muted, C_PANEL_BG,
};
use crate::widgets::label::{label_spans, pad, truncate};

/// Where to float a panel of `rows` options for the control at `anchor`.
///
/// Prefers opening downward; flips above the control when there is more room
/// there. The result always lies inside `bounds`.
pub fn panel_rect(anchor: Rect, rows: usize, width: u16, bounds: Rect) -> Rect {
    let wanted = rows.min(u16::MAX as usize - 2) as u16 + 2;
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(bounds.y);

    let (y, height) = if below >= wanted || below >= above {
        (anchor.bottom(), wanted.min(below))
    } else {
        let height = wanted.min(above);
        (anchor.y - height, height)
    };

    let width = width.min(bounds.width);
    let x = anchor.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    Rect::new(x, y, width, height)
}

/// Inner area the option rows occupy.
pub fn rows_area(area: Rect) -> Rect {
    panel_block().inner(area)
}

fn panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(style_focused_border())
        .style(Style::default().bg(C_PANEL_BG))
}

pub fn draw_panel<T>(frame: &mut Frame, area: Rect, model: &RenderModel<'_, T>, viewport: &Viewport) {
    frame.render_widget(Clear, area);

    let mut block = panel_block();
    let visible = viewport.visible();
    if visible.start > 0 {
        block = block.title_top(Line::from(Span::styled("▲ ", style_muted())).right_aligned());
    }
    if visible.start + viewport.height() < viewport.len() {
        block = block.title_bottom(Line::from(Span::styled("▼ ", style_muted())).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.options.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(" no options", style_muted())),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    for index in visible {
        let (Some(view), Some(row)) = (model.options.get(index), viewport.row_of(index)) else {
            continue;
        };
        let row_style = if view.highlighted {
            style_highlighted()
        } else {
            style_default()
        };
        let text_style = if view.active {
            row_style.patch(style_active())
        } else {
            row_style
        };
        // Focus cursor, then the committed-value tick.
        let cursor = if viewport.focused() == Some(index) { "›" } else { " " };
        let tick = if view.active { "✓ " } else { "  " };
        let mut spans = vec![
            Span::styled(cursor, row_style),
            Span::styled(tick, text_style),
        ];
        spans.extend(label_spans(&view.option.label, text_style));
        let line = Line::from(pad(truncate(spans, width), width, row_style));
        let rect = Rect {
            y: inner.y + row as u16,
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropdown_core::focus;
    use dropdown_core::{Dropdown, DropdownOption, DropdownProps, Key, OptionSet};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn planets() -> Dropdown<String> {
        let set: OptionSet<String> = ["Mercury", "Venus", "Earth", "Mars", "Jupiter"]
            .iter()
            .map(|n| DropdownOption::new(*n, n.to_lowercase()))
            .collect();
        Dropdown::new(DropdownProps::new(set, "venus".to_string(), |_| {}))
    }

    #[test]
    fn opens_downward_when_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(4, 2, 20, 3);
        assert_eq!(panel_rect(anchor, 5, 20, bounds), Rect::new(4, 5, 20, 7));
    }

    #[test]
    fn flips_upward_near_bottom() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(4, 20, 20, 3);
        assert_eq!(panel_rect(anchor, 5, 20, bounds), Rect::new(4, 13, 20, 7));
    }

    #[test]
    fn clamps_to_bounds() {
        let bounds = Rect::new(0, 0, 30, 10);
        let anchor = Rect::new(20, 0, 10, 3);
        let rect = panel_rect(anchor, 20, 24, bounds);
        assert_eq!(rect, Rect::new(6, 3, 24, 7));
    }

    #[test]
    fn draws_highlight_active_and_scroll_hint() {
        let mut dd = planets();
        dd.on_toggle_click();
        dd.on_key_down(Key::ArrowDown);

        let mut viewport = Viewport::new(dd.options().len(), 3);
        focus::settle(&dd.render(), &mut viewport);
        assert_eq!(viewport.visible(), 0..3);

        let mut terminal = Terminal::new(TestBackend::new(16, 5)).unwrap();
        terminal
            .draw(|frame| draw_panel(frame, frame.area(), &dd.render(), &viewport))
            .unwrap();
        let buf = terminal.backend().buffer().clone();

        assert_eq!(row_text(&buf, 1), "│   Mercury    │");
        assert_eq!(row_text(&buf, 2), "│ ✓ Venus      │");
        assert_eq!(row_text(&buf, 3), "│›  Earth      │");
        assert!(row_text(&buf, 4).contains('▼'));
        assert_eq!(buf.cell((5, 3)).map(|c| c.bg), Some(crate::theme::C_SELECTION_BG));
    }
}
