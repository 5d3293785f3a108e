use crate::model::BoardError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The drive list could not be loaded.
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}
