use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::config::{AppConfig, BoardSource};
use crate::model::{DriveBoard, FormTimings};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    DriveCreateState, DriveListState, HelpState, draw_drive_create, draw_drive_list, draw_help,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// How long the event loop waits for input before advancing timers.
const TICK_RATE: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Browse drives and apply.
    DriveList,
    /// Submit a new drive.
    DriveCreate,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::DriveList => "Placement Drives",
            Self::DriveCreate => "New Placement Drive",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App<C: Clock = SystemClock> {
    screen: Screen,
    board: DriveBoard,
    drive_list: DriveListState,
    drive_create: DriveCreateState,
    help: HelpState,
    clock: C,
    should_quit: bool,
}

impl App<SystemClock> {
    /// Builds the app from configuration, loading the drive list.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let board = match &config.board_source {
            BoardSource::Demo => DriveBoard::demo(),
            BoardSource::File(path) => DriveBoard::load(path)?,
        };
        Ok(Self::new(board, config.timings, SystemClock))
    }
}

impl<C: Clock> App<C> {
    /// Creates a new `App` starting on the [`Screen::DriveList`] screen.
    pub fn new(board: DriveBoard, timings: FormTimings, clock: C) -> Self {
        Self {
            screen: Screen::DriveList,
            board,
            drive_list: DriveListState::new(),
            drive_create: DriveCreateState::new(timings),
            help: HelpState::new(),
            clock,
            should_quit: false,
        }
    }

    /// Main event loop: draw → wait briefly for an event → dispatch → tick → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.tick();
        }
        Ok(())
    }

    /// Renders the status bar and the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [status_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        draw_status_bar(&StatusBarContext::from_board(&self.board), frame, status_area);
        match self.screen {
            Screen::DriveList => draw_drive_list(&self.drive_list, self.board.drives(), frame, body),
            Screen::DriveCreate => draw_drive_create(&self.drive_create, frame, body),
            Screen::Help => draw_help(&self.help, frame, body),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::DriveList => self.drive_list.handle_key(key, self.board.drives()),
            Screen::DriveCreate => self.drive_create.handle_key(key, &self.clock),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Advances time-driven state; a finished submission reaches the board here.
    pub fn tick(&mut self) {
        let action = self.drive_create.tick(&self.clock);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Apply(id) => {
                if let Err(e) = self.board.apply(id) {
                    warn!(error = %e, "apply failed");
                    self.drive_list.set_error(e.to_string());
                }
                self.drive_list.clamp(self.board.drives().len());
            }
            Action::SubmitDrive(request) => self.board.accept(request),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the drive board.
    pub fn board(&self) -> &DriveBoard {
        &self.board
    }

    /// Returns the drive creation screen state.
    pub fn drive_create(&self) -> &DriveCreateState {
        &self.drive_create
    }
}
