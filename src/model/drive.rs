use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO calendar date format used for drive dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scheduled campus recruitment drive as shown on the board.
///
/// `is_eligible` and `has_applied` are computed by whoever supplies the
/// record; nothing in this crate derives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    pub id: u32,
    pub company_name: String,
    pub role: String,
    /// Free-form compensation text, e.g. `₹12 LPA`.
    pub package: String,
    pub eligibility: String,
    /// ISO `YYYY-MM-DD` date string.
    pub drive_date: String,
    pub process: String,
    pub is_eligible: bool,
    pub has_applied: bool,
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_drive_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Formats a drive date in long form, e.g. `Monday, October 19, 2026`.
///
/// Strings that are not ISO dates are returned unchanged.
pub fn format_drive_date(s: &str) -> String {
    match parse_drive_date(s) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}
