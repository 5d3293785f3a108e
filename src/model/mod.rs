mod board;
mod draft;
mod drive;
mod status;
mod submission;
mod validation;

pub use board::{BoardError, DriveBoard};
pub use draft::{DriveDraft, DriveField, DriveRequest};
pub use drive::{DATE_FORMAT, Drive, format_drive_date, parse_drive_date};
pub use status::{ButtonTone, DriveStatus, DriveView, activate, derive_view};
pub use submission::{DriveSubmission, FormTimings, SUCCESS_MESSAGE, SubmitOutcome};
pub use validation::{
    FieldErrors, ValidationError, validate, validate_drive_date, validate_email, validate_field,
};
