//! Label → styled spans, with width-aware truncation.

use dropdown_core::Label;
use ratatui::{style::Style, text::Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::segment_style;

pub fn label_spans(label: &Label, base: Style) -> Vec<Span<'static>> {
    match label {
        Label::Text(text) => vec![Span::styled(text.clone(), base)],
        Label::Rich(segments) => segments
            .iter()
            .map(|s| Span::styled(s.text.clone(), base.patch(segment_style(s.style))))
            .collect(),
    }
}

/// Display width of a label's text.
pub fn label_width(label: &Label) -> usize {
    label.plain().width()
}

pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Cut `spans` to `max_width` columns, ending in `…` when anything was dropped.
pub fn truncate(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Span<'static>> {
    if spans_width(&spans) <= max_width {
        return spans;
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = Vec::with_capacity(spans.len());
    let mut last_style = Style::default();
    for span in spans {
        last_style = span.style;
        let mut kept = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            kept.push(c);
        }
        let full = kept.len() == span.content.len();
        if !kept.is_empty() {
            out.push(Span::styled(kept, span.style));
        }
        if !full {
            break;
        }
    }
    if max_width > 0 {
        out.push(Span::styled("…", last_style));
    }
    out
}

/// Pad with spaces up to `width` columns.
pub fn pad(mut spans: Vec<Span<'static>>, width: usize, style: Style) -> Vec<Span<'static>> {
    let used = spans_width(&spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
    spans
}
