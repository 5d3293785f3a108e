use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::draft::{DriveDraft, DriveField};
use super::drive::parse_drive_date;

/// Reasons a draft field is rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Company name is required")]
    CompanyNameRequired,
    #[error("Job role is required")]
    RoleRequired,
    #[error("Package information is required")]
    PackageRequired,
    #[error("Eligibility criteria is required")]
    EligibilityRequired,
    #[error("Drive date is required")]
    DriveDateRequired,
    #[error("Please enter a valid date (YYYY-MM-DD)")]
    InvalidDriveDate,
    #[error("Drive date cannot be in the past")]
    DriveDateInPast,
    #[error("Selection process details are required")]
    ProcessRequired,
    #[error("Contact person name is required")]
    ContactPersonRequired,
    #[error("Contact email is required")]
    ContactEmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

/// Fails with `error` if `value` is blank after trimming whitespace.
fn require(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

/// Validates a drive date: present, ISO formatted, and not before `today`.
///
/// A date equal to `today` is accepted. A non-empty value that is not a
/// `YYYY-MM-DD` calendar date fails with [`ValidationError::InvalidDriveDate`],
/// a rule of free-text entry only: a date-picker form never sees such values.
pub fn validate_drive_date(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::DriveDateRequired);
    }
    match parse_drive_date(value) {
        None => Err(ValidationError::InvalidDriveDate),
        Some(date) if date < today => Err(ValidationError::DriveDateInPast),
        Some(_) => Ok(()),
    }
}

/// Validates a contact email: present, and shaped like `x@y.z`.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    require(value, ValidationError::ContactEmailRequired)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a single field of `draft`. Optional fields always pass.
pub fn validate_field(
    draft: &DriveDraft,
    field: DriveField,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    let value = draft.get(field);
    match field {
        DriveField::CompanyName => require(value, ValidationError::CompanyNameRequired),
        DriveField::Role => require(value, ValidationError::RoleRequired),
        DriveField::Package => require(value, ValidationError::PackageRequired),
        DriveField::EligibilityCriteria => require(value, ValidationError::EligibilityRequired),
        DriveField::DriveDate => validate_drive_date(value, today),
        DriveField::ProcessDetails => require(value, ValidationError::ProcessRequired),
        DriveField::ContactPerson => require(value, ValidationError::ContactPersonRequired),
        DriveField::ContactEmail => validate_email(value),
        DriveField::Location | DriveField::AdditionalInfo => Ok(()),
    }
}

/// Validates every field of `draft` independently, collecting all failures.
pub fn validate(draft: &DriveDraft, today: NaiveDate) -> FieldErrors {
    let errors = DriveField::ALL
        .into_iter()
        .filter_map(|field| validate_field(draft, field, today).err().map(|e| (field, e)))
        .collect();
    FieldErrors { errors }
}

/// Per-field validation failures, keyed by field in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<DriveField, ValidationError>,
}

impl FieldErrors {
    /// Returns `true` if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: DriveField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Returns the user-facing message for `field`, if it has an error.
    pub fn message(&self, field: DriveField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Removes the error for `field` only.
    pub fn clear_field(&mut self, field: DriveField) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterates `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DriveField, ValidationError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Returns the mapping as `field name → message`.
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter().map(|(f, e)| (f.name(), e.to_string())).collect()
    }
}
