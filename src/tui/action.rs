//! Actions returned by screen event handlers.

use crate::model::DriveRequest;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the board and navigate between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Apply to the drive with the given id.
    Apply(u32),
    /// Hand a validated drive request to the board for approval.
    SubmitDrive(DriveRequest),
    /// Quit the application.
    Quit,
}
