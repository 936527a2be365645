//! DropdownButton — the closed control: prefix, shown value, suffix.
//!
//! Buttons in a group share edges: `Start` and `Middle` drop their right
//! border so the next button's left border doubles as the divider.

use dropdown_core::{Decor, GroupPosition, Label};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{style_default, style_focused_border, style_secondary, style_unfocused_border};
use crate::widgets::label::{label_spans, truncate};

const JOINED: border::Set = border::Set {
    top_left: "┬",
    bottom_left: "┴",
    ..border::PLAIN
};

const JOINED_END: border::Set = border::Set {
    top_left: "┬",
    bottom_left: "┴",
    ..border::ROUNDED
};

pub fn button_block(position: Option<GroupPosition>, focused: bool) -> Block<'static> {
    let (borders, set) = match position {
        None => (Borders::ALL, border::ROUNDED),
        Some(GroupPosition::Start) => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, border::ROUNDED),
        Some(GroupPosition::Middle) => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, JOINED),
        Some(GroupPosition::End) => (Borders::ALL, JOINED_END),
    };
    let border_style = if focused {
        style_focused_border()
    } else {
        style_unfocused_border()
    };
    Block::default()
        .borders(borders)
        .border_set(set)
        .border_style(border_style)
}

/// Draw the closed control. `label` is `None` for an empty option list.
pub fn draw_button(
    frame: &mut Frame,
    area: Rect,
    decor: &Decor,
    label: Option<&Label>,
    focused: bool,
    open: bool,
) {
    let block = button_block(decor.group_position, focused || open);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value_style = if focused {
        style_default().add_modifier(Modifier::BOLD)
    } else {
        style_default()
    };

    let mut spans = vec![ratatui::text::Span::raw(" ")];
    if let Some(prefix) = &decor.prefix {
        spans.extend(label_spans(prefix, style_secondary()));
    }
    if let Some(label) = label {
        spans.extend(label_spans(label, value_style));
    }
    if let Some(suffix) = &decor.suffix {
        spans.extend(label_spans(suffix, style_secondary()));
    }

    let line = Line::from(truncate(spans, inner.width as usize));
    let row = Rect {
        height: 1,
        y: inner.y + inner.height.saturating_sub(1) / 2,
        ..inner
    };
    frame.render_widget(Paragraph::new(line).style(Style::default()), row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn render(decor: &Decor, label: Option<&Label>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(16, 3)).unwrap();
        terminal
            .draw(|frame| draw_button(frame, frame.area(), decor, label, false, false))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn shows_prefix_label_and_suffix() {
        let decor = Decor {
            prefix: Some(Label::from("by ")),
            suffix: Some(Label::from(" ▾")),
            ..Decor::default()
        };
        let buf = render(&decor, Some(&Label::from("Name")));
        assert_eq!(row_text(&buf, 1), "│ by Name ▾    │");
        assert_eq!(row_text(&buf, 0), "╭──────────────╮");
    }

    #[test]
    fn long_labels_are_truncated() {
        let buf = render(&Decor::default(), Some(&Label::from("Date modified recently")));
        assert_eq!(row_text(&buf, 1), "│ Date modifie…│");
    }

    #[test]
    fn group_start_has_no_right_border() {
        let decor = Decor {
            group_position: Some(GroupPosition::Start),
            ..Decor::default()
        };
        let buf = render(&decor, Some(&Label::from("A")));
        assert_eq!(row_text(&buf, 0), "╭───────────────");
        assert_eq!(row_text(&buf, 1), "│ A             ");
    }

    #[test]
    fn group_end_joins_on_the_left() {
        let decor = Decor {
            group_position: Some(GroupPosition::End),
            ..Decor::default()
        };
        let buf = render(&decor, None);
        assert_eq!(row_text(&buf, 0), "┬──────────────╮");
        assert_eq!(row_text(&buf, 2), "┴──────────────╯");
    }
}
