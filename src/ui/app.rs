use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::models::SortDirection;
use crate::store::BookStore;

use super::forms::{input_border, input_line, Focus};
use super::helpers::{clamp_selection, entry_row, key_hints, offset_selection};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of a bordered single-line input.
const INPUT_HEIGHT: u16 = 3;
/// Height of the "Add Book" button.
const BUTTON_HEIGHT: u16 = 3;
/// Row holding the sort indicator and the reset hint.
const CONTROLS_HEIGHT: u16 = 1;
/// Rows skipped by PageUp/PageDown in the list.
const PAGE_STEP: isize = 5;
/// Accent colour used by the add button and the controls row.
const ACCENT: Color = Color::Rgb(0xFF, 0xD6, 0x00);

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Areas computed for one frame.
struct ScreenAreas {
    title: Rect,
    genre: Rect,
    button: Rect,
    controls: Option<Rect>,
    filter: Option<Rect>,
    list: Rect,
    footer: Rect,
}

/// Application state for the single book screen. The store holds the data;
/// everything here is view state (focus, list selection, status line).
pub struct App {
    store: BookStore,
    focus: Focus,
    selected: usize,
    status: Option<StatusMessage>,
    view_revision: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(BookStore::new())
    }
}

impl App {
    pub fn new(store: BookStore) -> Self {
        Self {
            store,
            focus: Focus::Title,
            selected: 0,
            status: None,
            view_revision: 0,
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Changes whenever the next frame would differ from the last one drawn:
    /// the store revision paired with a counter for focus, selection and
    /// status updates.
    pub(crate) fn frame_key(&self) -> (u64, u64) {
        (self.store.revision(), self.view_revision)
    }

    fn touch_view(&mut self) {
        self.view_revision = self.view_revision.wrapping_add(1);
    }

    /// Handle a key press without modifiers. Returns `true` when the user
    /// asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let before = (self.focus, self.selected);
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.focus = self.focus.next(self.store.has_entries());
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous(self.store.has_entries());
            }
            KeyCode::Enter => self.add_pending(),
            KeyCode::Backspace => {
                match self.focus.form_field() {
                    Some(field) => {
                        self.store.backspace(field);
                    }
                    None => {
                        self.store.backspace_filter();
                        self.after_list_change();
                    }
                }
            }
            KeyCode::Char(ch) => {
                match self.focus.form_field() {
                    Some(field) => {
                        self.store.push_char(field, ch);
                    }
                    None => {
                        self.store.push_filter_char(ch);
                        self.after_list_change();
                    }
                }
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => {
                self.selected = self.store.displayed().len().saturating_sub(1);
            }
            _ => {}
        }
        if (self.focus, self.selected) != before {
            self.touch_view();
        }
        false
    }

    /// Ctrl+S: toggle the sort direction of the displayed list.
    pub(crate) fn handle_ctrl_s(&mut self) {
        if !self.store.has_entries() {
            self.set_status("Add a book before sorting.", StatusKind::Error);
            return;
        }
        let direction = self.store.toggle_sort();
        self.selected = 0;
        let message = match direction {
            SortDirection::Ascending => "Sorted A to Z.",
            SortDirection::Descending => "Sorted Z to A.",
        };
        self.set_status(message, StatusKind::Info);
    }

    /// Ctrl+R: drop every entry and start over.
    pub(crate) fn handle_ctrl_r(&mut self) {
        if !self.store.has_entries() && self.store.pending().is_empty() {
            self.clear_status();
            return;
        }
        self.store.reset();
        self.focus = Focus::Title;
        self.selected = 0;
        self.set_status("List cleared.", StatusKind::Info);
    }

    fn add_pending(&mut self) {
        match self.store.add() {
            Ok(entry) => {
                let message = format!("Added {}.", entry.title);
                self.selected = self.store.displayed().len().saturating_sub(1);
                self.focus = Focus::Title;
                self.set_status(message, StatusKind::Info);
            }
            Err(err) => {
                debug!(%err, "add rejected");
                self.set_status(err.to_string(), StatusKind::Error);
            }
        }
    }

    fn after_list_change(&mut self) {
        self.selected = clamp_selection(self.selected, self.store.displayed().len());
    }

    fn move_selection(&mut self, offset: isize) {
        self.selected = offset_selection(self.selected, offset, self.store.displayed().len());
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
        self.touch_view();
    }

    fn clear_status(&mut self) {
        if self.status.take().is_some() {
            self.touch_view();
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let areas = self.layout(frame.area());

        self.draw_input(frame, areas.title, Focus::Title);
        self.draw_input(frame, areas.genre, Focus::Genre);
        self.draw_add_button(frame, areas.button);
        if let Some(controls) = areas.controls {
            self.draw_controls(frame, controls);
        }
        if let Some(filter) = areas.filter {
            self.draw_input(frame, filter, Focus::Filter);
        }
        self.draw_list(frame, areas.list);
        self.draw_footer(frame, areas.footer);
    }

    fn layout(&self, area: Rect) -> ScreenAreas {
        let show_controls = self.store.has_entries();
        let mut constraints = vec![
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ];
        if show_controls {
            constraints.push(Constraint::Length(CONTROLS_HEIGHT));
            constraints.push(Constraint::Length(INPUT_HEIGHT));
        }
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(FOOTER_HEIGHT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        if show_controls {
            ScreenAreas {
                title: chunks[0],
                genre: chunks[1],
                button: chunks[2],
                controls: Some(chunks[3]),
                filter: Some(chunks[4]),
                list: chunks[5],
                footer: chunks[6],
            }
        } else {
            ScreenAreas {
                title: chunks[0],
                genre: chunks[1],
                button: chunks[2],
                controls: None,
                filter: None,
                list: chunks[3],
                footer: chunks[4],
            }
        }
    }

    fn input_value(&self, focus: Focus) -> &str {
        match focus.form_field() {
            Some(field) => self.store.pending().value(field),
            None => self.store.filter_value(),
        }
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect, focus: Focus) {
        let active = self.focus == focus;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(input_border(active));
        let inner = block.inner(area);
        let value = self.input_value(focus);

        let paragraph = Paragraph::new(input_line(value, focus, active)).block(block);
        frame.render_widget(paragraph, area);

        if active && inner.width > 0 && inner.height > 0 {
            let typed = value.chars().count() as u16;
            let cursor_x = inner.x + typed.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_add_button(&self, frame: &mut Frame, area: Rect) {
        let style = if self.store.is_submittable() {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let button = Paragraph::new("Add Book")
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        frame.render_widget(button, area);
    }

    fn draw_controls(&self, frame: &mut Frame, area: Rect) {
        let accent = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled(format!("[{}]", self.store.direction().indicator()), accent),
            Span::raw(" ^S   "),
            Span::styled("[Reset]", accent),
            Span::raw(" ^R"),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let displayed = self.store.displayed();
        let block = Block::default().borders(Borders::TOP).title(format!(
            "Books ({}/{})",
            displayed.len(),
            self.store.kept().len()
        ));

        if displayed.is_empty() {
            let message = if self.store.has_entries() {
                "No books match the filter."
            } else {
                "No books yet. Fill in a title and genre, then press Enter."
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = displayed
            .iter()
            .map(|entry| ListItem::new(entry_row(entry)))
            .collect();
        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::White));

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, displayed.len())));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        if self.store.has_entries() {
            key_hints(&[
                ("Tab", "Next Field"),
                ("Enter", "Add"),
                ("^S", "Sort"),
                ("^R", "Reset"),
                ("↑↓", "Scroll"),
                ("Esc", "Quit"),
            ])
        } else {
            key_hints(&[("Tab", "Next Field"), ("Enter", "Add"), ("Esc", "Quit")])
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn add_book(app: &mut App, title: &str, genre: &str) {
        app.focus = Focus::Title;
        type_text(app, title);
        app.handle_key(KeyCode::Tab);
        type_text(app, genre);
        app.handle_key(KeyCode::Enter);
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn titles(app: &App) -> Vec<String> {
        app.store()
            .displayed()
            .iter()
            .map(|entry| entry.title.clone())
            .collect()
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut app = App::default();
        type_text(&mut app, "Dune");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "Sci-Fi");
        app.handle_key(KeyCode::Backspace);

        assert_eq!(app.store().pending().title(), "Dune");
        assert_eq!(app.store().pending().genre(), "Sci-F");
    }

    #[test]
    fn enter_with_incomplete_form_reports_error() {
        let mut app = App::default();
        type_text(&mut app, "Dune");
        app.handle_key(KeyCode::Enter);

        assert!(!app.store().has_entries());
        let status = app.status.as_ref().unwrap();
        assert!(matches!(status.kind, StatusKind::Error));
        assert_eq!(status.text, "Book genre is required.");
    }

    #[test]
    fn full_flow_filters_and_sorts() {
        let mut app = App::default();
        add_book(&mut app, "Dune", "Sci-Fi");
        add_book(&mut app, "Hobbit", "Fantasy");
        add_book(&mut app, "Foundation", "Sci-Fi");
        assert_eq!(titles(&app), ["Dune", "Hobbit", "Foundation"]);

        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Filter);
        type_text(&mut app, "sci-fi");
        assert_eq!(titles(&app), ["Dune", "Foundation"]);

        app.handle_ctrl_s();
        assert_eq!(titles(&app), ["Foundation", "Dune"]);
        assert_eq!(app.store().direction(), SortDirection::Descending);
    }

    #[test]
    fn reset_moves_focus_off_hidden_filter() {
        let mut app = App::default();
        add_book(&mut app, "Dune", "Sci-Fi");
        app.handle_key(KeyCode::BackTab);
        type_text(&mut app, "sci");
        app.handle_ctrl_r();

        assert_eq!(app.focus, Focus::Title);
        assert!(!app.store().has_entries());
        assert_eq!(app.store().filter_value(), "");
    }

    #[test]
    fn sort_without_entries_is_refused() {
        let mut app = App::default();
        app.handle_ctrl_s();
        assert_eq!(app.store().direction(), SortDirection::Ascending);
        assert!(matches!(
            app.status.as_ref().map(|s| &s.kind),
            Some(StatusKind::Error)
        ));
    }

    #[test]
    fn frame_key_moves_only_when_the_screen_changes() {
        let mut app = App::default();
        let idle = app.frame_key();
        assert_eq!(app.frame_key(), idle);

        app.handle_key(KeyCode::Left);
        assert_eq!(app.frame_key(), idle);

        app.handle_key(KeyCode::Tab);
        let focused = app.frame_key();
        assert_ne!(focused, idle);
        assert_eq!(focused.0, idle.0);

        type_text(&mut app, "D");
        let typed = app.frame_key();
        assert_ne!(typed.0, focused.0);

        app.handle_key(KeyCode::Enter);
        assert_ne!(app.frame_key(), typed);
        let errored = app.frame_key();
        app.handle_key(KeyCode::Down);
        assert_eq!(app.frame_key(), errored);
    }

    #[test]
    fn escape_quits() {
        let mut app = App::default();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn controls_hidden_until_first_book() {
        let mut app = App::default();
        let screen = render(&app);
        assert!(screen.contains("Enter Book Name"));
        assert!(screen.contains("Add Book"));
        assert!(!screen.contains("Filter Books by Genres"));
        assert!(!screen.contains("[Reset]"));

        add_book(&mut app, "Dune", "Sci-Fi");
        let screen = render(&app);
        assert!(screen.contains("Filter Books by Genres"));
        assert!(screen.contains("[Reset]"));
        assert!(screen.contains("[↑]"));
        assert!(screen.contains("->   Dune - Sci-Fi"));
    }

    #[test]
    fn empty_filter_result_shows_message() {
        let mut app = App::default();
        add_book(&mut app, "Dune", "Sci-Fi");
        app.handle_key(KeyCode::BackTab);
        type_text(&mut app, "horror");
        assert!(render(&app).contains("No books match the filter."));
    }
}
