use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the new-drive submission form.
///
/// Variants are declared in form order; [`DriveField::ALL`] follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DriveField {
    CompanyName,
    Role,
    Package,
    Location,
    DriveDate,
    EligibilityCriteria,
    ProcessDetails,
    ContactPerson,
    ContactEmail,
    AdditionalInfo,
}

impl DriveField {
    /// All fields in form order.
    pub const ALL: [DriveField; 10] = [
        Self::CompanyName,
        Self::Role,
        Self::Package,
        Self::Location,
        Self::DriveDate,
        Self::EligibilityCriteria,
        Self::ProcessDetails,
        Self::ContactPerson,
        Self::ContactEmail,
        Self::AdditionalInfo,
    ];

    /// The field's key in the flat form mapping (e.g. `companyName`).
    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Role => "role",
            Self::Package => "package",
            Self::Location => "location",
            Self::DriveDate => "driveDate",
            Self::EligibilityCriteria => "eligibilityCriteria",
            Self::ProcessDetails => "processDetails",
            Self::ContactPerson => "contactPerson",
            Self::ContactEmail => "contactEmail",
            Self::AdditionalInfo => "additionalInfo",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::Role => "Job Role",
            Self::Package => "Package",
            Self::Location => "Location",
            Self::DriveDate => "Drive Date (YYYY-MM-DD)",
            Self::EligibilityCriteria => "Eligibility Criteria",
            Self::ProcessDetails => "Selection Process",
            Self::ContactPerson => "Contact Person",
            Self::ContactEmail => "Contact Email",
            Self::AdditionalInfo => "Additional Information",
        }
    }

    /// Example input shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::CompanyName => "e.g., TechCorp Solutions",
            Self::Role => "e.g., Software Developer",
            Self::Package => "e.g., ₹12 LPA",
            Self::Location => "e.g., Bangalore, Hybrid",
            Self::DriveDate => "e.g., 2026-11-02",
            Self::EligibilityCriteria => "e.g., CGPA ≥ 7.0, CSE/IT",
            Self::ProcessDetails => "e.g., Online Test → Technical Interview → HR Round",
            Self::ContactPerson => "HR Manager Name",
            Self::ContactEmail => "hr@company.com",
            Self::AdditionalInfo => "Any additional details about the drive",
        }
    }

    /// `location` and `additionalInfo` are optional; everything else is required.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Location | Self::AdditionalInfo)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DriveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The in-progress state of a new-drive submission: one text value per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveDraft {
    values: [String; 10],
}

impl DriveDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: DriveField) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: DriveField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: DriveField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterates `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DriveField, &str)> {
        DriveField::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// A drive creation request handed to the acceptor once a draft passes validation.
///
/// Mirrors the draft, except `eligibility_criteria` becomes `eligibility` and
/// `process_details` becomes `process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveRequest {
    pub company_name: String,
    pub role: String,
    pub package: String,
    pub eligibility: String,
    pub drive_date: String,
    pub process: String,
    pub location: String,
    pub contact_person: String,
    pub contact_email: String,
    pub additional_info: String,
}

impl From<&DriveDraft> for DriveRequest {
    fn from(draft: &DriveDraft) -> Self {
        let take = |field: DriveField| draft.get(field).to_string();
        Self {
            company_name: take(DriveField::CompanyName),
            role: take(DriveField::Role),
            package: take(DriveField::Package),
            eligibility: take(DriveField::EligibilityCriteria),
            drive_date: take(DriveField::DriveDate),
            process: take(DriveField::ProcessDetails),
            location: take(DriveField::Location),
            contact_person: take(DriveField::ContactPerson),
            contact_email: take(DriveField::ContactEmail),
            additional_info: take(DriveField::AdditionalInfo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field {
        use super::*;

        #[test]
        fn all_follows_declaration_order() {
            for (i, field) in DriveField::ALL.into_iter().enumerate() {
                assert_eq!(field.index(), i, "{field:?} out of order");
            }
        }

        #[test]
        fn names_are_unique_camel_case_keys() {
            let names: std::collections::BTreeSet<&str> =
                DriveField::ALL.into_iter().map(DriveField::name).collect();
            assert_eq!(names.len(), DriveField::ALL.len());
            assert!(names.iter().all(|n| n.starts_with(|c: char| c.is_ascii_lowercase())));
        }

        #[test]
        fn only_location_and_additional_info_optional() {
            let optional: Vec<DriveField> = DriveField::ALL
                .into_iter()
                .filter(|f| !f.is_required())
                .collect();
            assert_eq!(
                optional,
                vec![DriveField::Location, DriveField::AdditionalInfo]
            );
        }

        #[test]
        fn display_is_mapping_key() {
            assert_eq!(
                DriveField::EligibilityCriteria.to_string(),
                "eligibilityCriteria"
            );
        }
    }

    mod draft {
        use super::*;

        #[test]
        fn new_is_empty() {
            let draft = DriveDraft::new();
            assert!(draft.is_empty());
            assert!(draft.iter().all(|(_, v)| v.is_empty()));
        }

        #[test]
        fn set_touches_one_field() {
            let mut draft = DriveDraft::new();
            draft.set(DriveField::Role, "SDE");
            assert_eq!(draft.get(DriveField::Role), "SDE");
            assert_eq!(draft.get(DriveField::CompanyName), "");
            assert!(!draft.is_empty());
        }

        #[test]
        fn reset_clears_everything() {
            let mut draft = DriveDraft::new()
                .with(DriveField::CompanyName, "Acme")
                .with(DriveField::AdditionalInfo, "bring resume");
            draft.reset();
            assert_eq!(draft, DriveDraft::new());
        }
    }

    mod request {
        use super::*;

        fn filled() -> DriveDraft {
            DriveField::ALL
                .into_iter()
                .fold(DriveDraft::new(), |d, f| d.with(f, format!("<{}>", f.name())))
        }

        #[test]
        fn renames_eligibility_and_process() {
            let request = DriveRequest::from(&filled());
            assert_eq!(request.eligibility, "<eligibilityCriteria>");
            assert_eq!(request.process, "<processDetails>");
        }

        #[test]
        fn copies_remaining_fields() {
            let request = DriveRequest::from(&filled());
            assert_eq!(request.company_name, "<companyName>");
            assert_eq!(request.role, "<role>");
            assert_eq!(request.package, "<package>");
            assert_eq!(request.drive_date, "<driveDate>");
            assert_eq!(request.location, "<location>");
            assert_eq!(request.contact_person, "<contactPerson>");
            assert_eq!(request.contact_email, "<contactEmail>");
            assert_eq!(request.additional_info, "<additionalInfo>");
        }

        #[test]
        fn serializes_with_renamed_keys() {
            let value = serde_json::to_value(DriveRequest::from(&filled())).unwrap();
            assert_eq!(value["eligibility"], "<eligibilityCriteria>");
            assert_eq!(value["process"], "<processDetails>");
            assert!(value.get("eligibilityCriteria").is_none());
        }
    }
}
