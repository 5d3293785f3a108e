//! New-drive submission lifecycle: edit, validate, simulated send, acknowledge.
//!
//! A [`DriveSubmission`] owns one draft and its error mapping. Accepted drafts
//! are held for a fixed submit delay before [`DriveSubmission::poll`] hands the
//! request to the caller; a success acknowledgment is then visible for a fixed
//! window unless the user edits a field or submits again.

use std::time::Duration;

use tracing::{debug, info};

use super::draft::{DriveDraft, DriveField, DriveRequest};
use super::validation::{FieldErrors, validate};
use crate::clock::{Clock, Timer};

/// Shown while the success acknowledgment is visible.
pub const SUCCESS_MESSAGE: &str =
    "✓ Placement drive created successfully! It has been sent for admin approval.";

/// Fixed delays of the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// Simulated send latency between an accepted submit and hand-off.
    pub submit_delay: Duration,
    /// How long the success acknowledgment stays visible.
    pub success_window: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_secs(1),
            success_window: Duration::from_secs(5),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the request will be handed off after the submit delay.
    Started,
    /// Validation failed on this many fields; the draft is unchanged.
    Rejected(usize),
    /// A submission is already in flight; nothing changed.
    Busy,
}

/// Form state for one new-drive form instance.
#[derive(Debug, Clone, Default)]
pub struct DriveSubmission {
    draft: DriveDraft,
    errors: FieldErrors,
    timings: FormTimings,
    in_flight: Option<DriveRequest>,
    submit_timer: Timer,
    success_timer: Timer,
}

impl DriveSubmission {
    /// Creates an empty form with the given timings.
    pub fn new(timings: FormTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &DriveDraft {
        &self.draft
    }

    /// Errors from the last validation pass, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn timings(&self) -> FormTimings {
        self.timings
    }

    /// Sets a field and clears that field's error without re-validating it.
    ///
    /// Any visible success acknowledgment is dismissed.
    pub fn update_field(&mut self, field: DriveField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
        self.success_timer.cancel();
    }

    /// Validates the whole draft and, if it passes, starts the simulated send.
    pub fn submit<C: Clock>(&mut self, clock: &C) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        self.success_timer.cancel();
        self.errors = validate(&self.draft, clock.today());
        if !self.errors.is_empty() {
            debug!(errors = ?self.errors.to_messages(), "drive submission rejected");
            return SubmitOutcome::Rejected(self.errors.len());
        }

        let request = DriveRequest::from(&self.draft);
        info!(company = %request.company_name, role = %request.role, "submitting drive");
        self.in_flight = Some(request);
        self.submit_timer.arm(clock.now(), self.timings.submit_delay);
        SubmitOutcome::Started
    }

    /// Advances timers. Returns the in-flight request once its delay has elapsed.
    ///
    /// On hand-off the draft is reset and the success acknowledgment shown.
    pub fn poll<C: Clock>(&mut self, clock: &C) -> Option<DriveRequest> {
        let now = clock.now();
        if self.success_timer.fire(now) {
            debug!("success acknowledgment expired");
        }
        if !self.submit_timer.fire(now) {
            return None;
        }

        let request = self.in_flight.take()?;
        self.draft.reset();
        self.success_timer.arm(now, self.timings.success_window);
        info!(company = %request.company_name, "drive submission handed off");
        Some(request)
    }

    /// Empties the draft and errors and dismisses the acknowledgment.
    ///
    /// An in-flight submission is unaffected.
    pub fn clear(&mut self) {
        self.draft.reset();
        self.errors.clear();
        self.success_timer.cancel();
    }

    /// Returns `true` between an accepted submit and its hand-off.
    pub fn is_submitting(&self) -> bool {
        self.submit_timer.is_armed()
    }

    /// Returns `true` while the success acknowledgment should be displayed.
    pub fn show_success(&self) -> bool {
        self.success_timer.is_armed()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Creating Drive..."
        } else {
            "Create Placement Drive"
        }
    }
}
