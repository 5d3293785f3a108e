//! Drive card view-state: status badge, apply button and helper text.
//!
//! The state is a pure function of a drive's `has_applied` / `is_eligible`
//! pair, decided by [`STATUS_RULES`] in priority order (first match wins)
//! with [`DriveStatus::Eligible`] as the fallback.

use std::fmt;

use super::drive::Drive;

/// The application state of a drive from the viewing student's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveStatus {
    Applied,
    NotEligible,
    Eligible,
}

/// Visual emphasis of the apply button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonTone {
    Neutral,
    Negative,
    Affirmative,
}

/// One row of the status rule table.
struct StatusRule {
    matches: fn(&Drive) -> bool,
    status: DriveStatus,
}

fn has_applied(drive: &Drive) -> bool {
    drive.has_applied
}

fn is_ineligible(drive: &Drive) -> bool {
    !drive.is_eligible
}

/// Status rules in priority order. A drive matching none is [`DriveStatus::Eligible`].
static STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        matches: has_applied,
        status: DriveStatus::Applied,
    },
    StatusRule {
        matches: is_ineligible,
        status: DriveStatus::NotEligible,
    },
];

impl DriveStatus {
    /// Classifies a drive using the priority-ordered rule table.
    pub fn of(drive: &Drive) -> Self {
        STATUS_RULES
            .iter()
            .find(|rule| (rule.matches)(drive))
            .map_or(Self::Eligible, |rule| rule.status)
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::NotEligible => "Not Eligible",
            Self::Eligible => "Eligible",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::NotEligible => "Not Eligible",
            Self::Eligible => "Apply Now",
        }
    }

    /// Only an eligible, not-yet-applied drive can be applied to.
    pub fn button_enabled(self) -> bool {
        self == Self::Eligible
    }

    pub fn button_tone(self) -> ButtonTone {
        match self {
            Self::Applied => ButtonTone::Neutral,
            Self::NotEligible => ButtonTone::Negative,
            Self::Eligible => ButtonTone::Affirmative,
        }
    }

    /// Explanatory line shown next to the button.
    pub fn helper_text(self) -> &'static str {
        match self {
            Self::Applied => "Application submitted successfully",
            Self::NotEligible => "You don't meet the eligibility criteria",
            Self::Eligible => "You are eligible to apply",
        }
    }
}

impl fmt::Display for DriveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a renderer needs to draw a drive card's status and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveView {
    pub status: DriveStatus,
    pub status_label: &'static str,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub button_tone: ButtonTone,
    pub helper_text: &'static str,
    /// Whether the card should be drawn with emphasis (open for application).
    pub highlighted: bool,
}

/// Derives the card view-state for a drive.
pub fn derive_view(drive: &Drive) -> DriveView {
    let status = DriveStatus::of(drive);
    DriveView {
        status,
        status_label: status.label(),
        button_label: status.button_label(),
        button_enabled: status.button_enabled(),
        button_tone: status.button_tone(),
        helper_text: status.helper_text(),
        highlighted: status == DriveStatus::Eligible,
    }
}

/// Activates the apply button: calls `on_apply` only if the button is enabled.
///
/// Returns whether the callback ran. The drive itself is not modified; marking
/// it applied is up to the caller.
pub fn activate<F: FnOnce()>(drive: &Drive, on_apply: F) -> bool {
    if derive_view(drive).button_enabled {
        on_apply();
        true
    } else {
        false
    }
}
