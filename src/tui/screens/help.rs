//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static DRIVE_LIST_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "navigate"),
    ("Home / End", "first / last"),
    ("Enter / a", "apply to selected drive"),
    ("n", "new placement drive"),
    ("q / Esc", "quit"),
    ("F1", "help"),
];

static DRIVE_CREATE_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "create placement drive"),
    ("Ctrl+L", "clear form"),
    ("Esc", "back to drive list"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::DriveList`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::DriveList,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: Screen) -> Vec<Line<'static>> {
    match origin {
        Screen::DriveList => build_section("Placement Drives", DRIVE_LIST_KEYS),
        Screen::DriveCreate => build_section("New Placement Drive", DRIVE_CREATE_KEYS),
        Screen::Help => build_section("Help", HELP_KEYS),
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", state.origin().label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn starts_at_top_of_drive_list_help() {
            let state = HelpState::default();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::DriveList);
        }

        #[test]
        fn down_then_up_scrolls() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 2);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            assert_eq!(state.handle_key(press(KeyCode::Up)), Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn q_and_esc_return_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::DriveCreate);
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::DriveCreate)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::DriveCreate)
            );
        }

        #[test]
        fn reset_scrolls_to_top() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.reset();
            assert_eq!(state.scroll(), 0);
        }
    }

    mod content {
        use super::*;

        fn text(lines: &[Line<'_>]) -> String {
            lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn drive_list_section_mentions_apply() {
            let content = text(&help_content(Screen::DriveList));
            assert!(content.contains("Placement Drives"));
            assert!(content.contains("apply to selected drive"));
        }

        #[test]
        fn drive_create_section_mentions_clear() {
            let content = text(&help_content(Screen::DriveCreate));
            assert!(content.contains("Ctrl+L"));
            assert!(content.contains("clear form"));
        }

        #[test]
        fn each_key_gets_a_line() {
            // Blank line + title + one line per binding.
            assert_eq!(
                help_content(Screen::DriveCreate).len(),
                2 + DRIVE_CREATE_KEYS.len()
            );
        }
    }
}
