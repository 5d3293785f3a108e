//! Drive list screen: scrollable cards for every drive on the board.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Drive, activate};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{CARD_HEIGHT, draw_drive_card};

/// State for the drive list screen.
#[derive(Debug, Clone, Default)]
pub struct DriveListState {
    /// Index of the highlighted card (0-based).
    selected: usize,
    /// Error message from the last failed action.
    error: Option<String>,
}

impl DriveListState {
    /// Creates a new state with the cursor on the first card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, drives: &[Drive]) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if !drives.is_empty() {
                    self.selected = (self.selected + 1).min(drives.len() - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = drives.len().saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('a') => self.apply_selected(drives),
            KeyCode::Char('n') => Action::Navigate(Screen::DriveCreate),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Presses the selected card's apply button.
    fn apply_selected(&mut self, drives: &[Drive]) -> Action {
        self.error = None;
        let Some(drive) = drives.get(self.selected) else {
            return Action::None;
        };
        let mut action = Action::None;
        activate(drive, || action = Action::Apply(drive.id));
        action
    }

    /// Returns the selected card index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keeps the cursor inside a list of `len` drives.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Sets an error message shown under the cards.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Index of the first card to draw so the selected card stays visible.
fn first_visible(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}

/// Renders the drive list screen.
#[mutants::skip]
pub fn draw_drive_list(state: &DriveListState, drives: &[Drive], frame: &mut Frame, area: Rect) {
    let [title_area, cards_area, error_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(format!("Placement Drives ({})", drives.len())))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, title_area);

    if drives.is_empty() {
        let empty = Paragraph::new("No placement drives yet").alignment(Alignment::Center);
        frame.render_widget(empty, cards_area);
    } else {
        let visible = (cards_area.height / CARD_HEIGHT) as usize;
        let first = first_visible(state.selected(), visible);
        let shown = visible.max(1).min(drives.len() - first);
        let slots =
            Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); shown]).split(cards_area);
        for (slot, (i, drive)) in slots.iter().zip(drives.iter().enumerate().skip(first)) {
            draw_drive_card(drive, i == state.selected(), frame, *slot);
        }
    }

    if let Some(err) = state.error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new("↑↓: navigate  Enter/a: apply  n: new drive  F1: help  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::DriveBoard;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// Demo board: drive 1 open, drive 2 not eligible, drive 3 applied.
    fn drives() -> Vec<Drive> {
        DriveBoard::demo().drives().to_vec()
    }

    mod navigation {
        use super::*;

        #[test]
        fn down_and_up_move_cursor() {
            let drives = drives();
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::Down), &drives);
            assert_eq!(state.selected(), 1);
            state.handle_key(press(KeyCode::Up), &drives);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn cursor_stops_at_ends() {
            let drives = drives();
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::Up), &drives);
            assert_eq!(state.selected(), 0);
            for _ in 0..5 {
                state.handle_key(press(KeyCode::Down), &drives);
            }
            assert_eq!(state.selected(), 2);
        }

        #[test]
        fn home_and_end_jump() {
            let drives = drives();
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::End), &drives);
            assert_eq!(state.selected(), 2);
            state.handle_key(press(KeyCode::Home), &drives);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn down_on_empty_list_is_noop() {
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::Down), &[]);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn n_opens_create_form() {
            let mut state = DriveListState::new();
            let action = state.handle_key(press(KeyCode::Char('n')), &drives());
            assert_eq!(action, Action::Navigate(Screen::DriveCreate));
        }

        #[test]
        fn q_and_esc_quit() {
            let mut state = DriveListState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('q')), &[]), Action::Quit);
            assert_eq!(state.handle_key(press(KeyCode::Esc), &[]), Action::Quit);
        }

        #[test]
        fn clamp_pulls_cursor_back() {
            let mut state = DriveListState::new();
            state.selected = 7;
            state.clamp(3);
            assert_eq!(state.selected(), 2);
            state.clamp(0);
            assert_eq!(state.selected(), 0);
        }
    }

    mod apply {
        use super::*;

        #[test]
        fn enter_on_open_drive_applies() {
            let mut state = DriveListState::new();
            let action = state.handle_key(press(KeyCode::Enter), &drives());
            assert_eq!(action, Action::Apply(1));
        }

        #[test]
        fn a_is_an_alias_for_enter() {
            let mut state = DriveListState::new();
            let action = state.handle_key(press(KeyCode::Char('a')), &drives());
            assert_eq!(action, Action::Apply(1));
        }

        #[test]
        fn not_eligible_drive_is_inert() {
            let drives = drives();
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::Down), &drives);
            assert_eq!(state.handle_key(press(KeyCode::Enter), &drives), Action::None);
        }

        #[test]
        fn applied_drive_is_inert() {
            let drives = drives();
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::End), &drives);
            assert_eq!(state.handle_key(press(KeyCode::Enter), &drives), Action::None);
        }

        #[test]
        fn enter_on_empty_list_is_noop() {
            let mut state = DriveListState::new();
            assert_eq!(state.handle_key(press(KeyCode::Enter), &[]), Action::None);
        }

        #[test]
        fn apply_clears_previous_error() {
            let mut state = DriveListState::new();
            state.set_error("boom".into());
            state.handle_key(press(KeyCode::Enter), &drives());
            assert_eq!(state.error(), None);
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn first_visible_keeps_selection_on_screen() {
            assert_eq!(first_visible(0, 3), 0);
            assert_eq!(first_visible(2, 3), 0);
            assert_eq!(first_visible(3, 3), 1);
            assert_eq!(first_visible(9, 3), 7);
        }

        #[test]
        fn first_visible_with_no_room_shows_selected() {
            assert_eq!(first_visible(4, 0), 4);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &DriveListState, drives: &[Drive], height: u16) -> String {
            let mut terminal = Terminal::new(TestBackend::new(100, height)).unwrap();
            terminal
                .draw(|frame| draw_drive_list(state, drives, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_cards() {
            let output = render(&DriveListState::new(), &drives(), 30);
            assert!(output.contains("Placement Drives (3)"));
            assert!(output.contains("TechCorp Solutions"));
            assert!(output.contains("DataWave Analytics"));
            assert!(output.contains("Nimbus Cloud"));
        }

        #[test]
        fn scrolls_to_selected_card() {
            let mut state = DriveListState::new();
            state.handle_key(press(KeyCode::End), &drives());
            // Room for a single card.
            let output = render(&state, &drives(), 11);
            assert!(output.contains("Nimbus Cloud"));
            assert!(!output.contains("TechCorp Solutions"));
        }

        #[test]
        fn renders_empty_state() {
            let output = render(&DriveListState::new(), &[], 10);
            assert!(output.contains("No placement drives yet"));
        }

        #[test]
        fn renders_error() {
            let mut state = DriveListState::new();
            state.set_error("no drive with id 9".into());
            let output = render(&state, &drives(), 30);
            assert!(output.contains("no drive with id 9"));
        }
    }
}
