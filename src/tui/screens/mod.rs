//! TUI screen implementations.

pub mod drive_create;
pub mod drive_list;
pub mod help;

pub use drive_create::{DriveCreateState, draw_drive_create};
pub use drive_list::{DriveListState, draw_drive_list};
pub use help::{HelpState, draw_help};
