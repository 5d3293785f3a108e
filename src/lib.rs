//! Campus placement drive board: drive cards and a validated drive submission form.
//!
//! [`model`] holds the framework-free core (card view-state, form validation and
//! the submission lifecycle); [`tui`] renders it in a terminal.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod clock;
pub mod config;
pub mod model;
pub mod telemetry;
pub mod tui;
