use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::FormField;

/// Inputs that can hold keyboard focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum Focus {
    #[default]
    Title,
    Genre,
    Filter,
}

impl Focus {
    /// Cycle forward. The filter input only takes part while it is visible.
    pub(crate) fn next(self, filter_visible: bool) -> Self {
        match self {
            Focus::Title => Focus::Genre,
            Focus::Genre if filter_visible => Focus::Filter,
            Focus::Genre | Focus::Filter => Focus::Title,
        }
    }

    pub(crate) fn previous(self, filter_visible: bool) -> Self {
        match self {
            Focus::Title if filter_visible => Focus::Filter,
            Focus::Title | Focus::Filter => Focus::Genre,
            Focus::Genre => Focus::Title,
        }
    }

    /// The pending-entry field behind this input, if any.
    pub(crate) fn form_field(self) -> Option<FormField> {
        match self {
            Focus::Title => Some(FormField::Title),
            Focus::Genre => Some(FormField::Genre),
            Focus::Filter => None,
        }
    }

    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            Focus::Title => "Enter Book Name",
            Focus::Genre => "Enter Book Genre",
            Focus::Filter => "Filter Books by Genres",
        }
    }
}

/// Render the text of one input. Empty inputs show their placeholder dimmed.
pub(crate) fn input_line(value: &str, focus: Focus, active: bool) -> Line<'static> {
    if value.is_empty() {
        return Line::from(Span::styled(
            focus.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let style = if active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(value.to_string(), style))
}

/// Border colour for an input block.
pub(crate) fn input_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
