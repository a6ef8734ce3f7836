use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::BookEntry;

/// Marker drawn in front of every list row.
const ROW_MARKER: &str = "->";

/// Text of a single list row: `->   Title - Genre`.
pub(crate) fn entry_row(entry: &BookEntry) -> String {
    format!("{ROW_MARKER}   {entry}")
}

/// Build a footer line out of `(key, description)` pairs.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, description)) in hints.iter().enumerate() {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        if idx + 1 == hints.len() {
            spans.push(Span::raw(format!(" {description}")));
        } else {
            spans.push(Span::raw(format!(" {description}   ")));
        }
    }
    Line::from(spans)
}

/// Clamp a selection after the list it points into changed length.
pub(crate) fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}

/// Move a selection by `offset`, staying inside `0..len`.
pub(crate) fn offset_selection(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len as isize - 1;
    (selected as isize + offset).clamp(0, max) as usize
}
