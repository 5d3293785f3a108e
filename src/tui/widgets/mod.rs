//! Reusable TUI widgets.

pub mod drive_card;
pub mod form;
pub mod status_bar;

pub use drive_card::{CARD_HEIGHT, draw_drive_card};
pub use form::{Form, FormRow, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
