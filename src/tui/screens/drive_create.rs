//! Drive creation screen: form for submitting a new placement drive.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::clock::Clock;
use crate::model::{DriveField, DriveSubmission, FormTimings, SUCCESS_MESSAGE, SubmitOutcome};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormRow, draw_form};

/// State for the drive creation screen.
#[derive(Debug, Clone)]
pub struct DriveCreateState {
    submission: DriveSubmission,
    form: Form,
}

impl Default for DriveCreateState {
    fn default() -> Self {
        Self::new(FormTimings::default())
    }
}

impl DriveCreateState {
    /// Creates an empty drive form.
    pub fn new(timings: FormTimings) -> Self {
        Self {
            submission: DriveSubmission::new(timings),
            form: Form::new(DriveField::ALL.len()),
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key<C: Clock>(&mut self, key: KeyEvent, clock: &C) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('l') {
                self.clear();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                let field = self.focused_field();
                let mut value = self.submission.draft().get(field).to_string();
                value.push(ch);
                self.submission.update_field(field, value);
                Action::None
            }
            KeyCode::Backspace => {
                let field = self.focused_field();
                let mut value = self.submission.draft().get(field).to_string();
                value.pop();
                self.submission.update_field(field, value);
                Action::None
            }
            KeyCode::Enter => {
                self.submit(clock);
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::DriveList),
            _ => Action::None,
        }
    }

    /// Advances the submission timers; emits the request once it has been sent.
    pub fn tick<C: Clock>(&mut self, clock: &C) -> Action {
        match self.submission.poll(clock) {
            Some(request) => {
                self.form.reset();
                Action::SubmitDrive(request)
            }
            None => Action::None,
        }
    }

    fn submit<C: Clock>(&mut self, clock: &C) {
        if let SubmitOutcome::Rejected(_) = self.submission.submit(clock) {
            // Jump to the first field needing attention.
            let first = self.submission.errors().iter().next().map(|(f, _)| f);
            if let Some(field) = first {
                self.focus_field(field);
            }
        }
    }

    /// Empties the form (the "Clear Form" control).
    pub fn clear(&mut self) {
        self.submission.clear();
        self.form.reset();
    }

    /// Returns the field that has keyboard focus.
    pub fn focused_field(&self) -> DriveField {
        DriveField::ALL[self.form.focus()]
    }

    fn focus_field(&mut self, field: DriveField) {
        if let Some(index) = DriveField::ALL.iter().position(|f| *f == field) {
            self.form.set_focus(index);
        }
    }

    /// Returns the submission state for rendering and inspection.
    pub fn submission(&self) -> &DriveSubmission {
        &self.submission
    }

    /// Builds one form row per field from the current draft and errors.
    fn rows(&self) -> Vec<FormRow<'_>> {
        let draft = self.submission.draft();
        let errors = self.submission.errors();
        DriveField::ALL
            .into_iter()
            .map(|field| FormRow {
                label: field.label(),
                value: draft.get(field),
                placeholder: field.placeholder(),
                error: errors.message(field),
                required: field.is_required(),
            })
            .collect()
    }
}

/// Renders the drive creation screen.
#[mutants::skip]
pub fn draw_drive_create(state: &DriveCreateState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" New Placement Drive ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [notice_area, form_area, submit_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(state.form.height()),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let submission = state.submission();
    if submission.show_success() {
        let notice = Paragraph::new(Line::from(Span::styled(
            SUCCESS_MESSAGE,
            Style::default().fg(Color::Green),
        )));
        frame.render_widget(notice, notice_area);
    }

    draw_form(&state.rows(), state.form.focus(), frame, form_area);

    let submit_style = if submission.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let submit = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", submission.submit_label()),
        submit_style,
    )))
    .alignment(Alignment::Right);
    frame.render_widget(submit, submit_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: create  Ctrl+L: clear form  Esc: back  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
