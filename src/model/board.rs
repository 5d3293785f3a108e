//! The host-side list of drives shown as cards, plus requests awaiting approval.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::draft::DriveRequest;
use super::drive::Drive;

/// Errors that can occur while loading or updating a [`DriveBoard`].
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The seed file could not be read.
    #[error("could not read drives from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of drive records.
    #[error("invalid drive list: {0}")]
    Json(#[from] serde_json::Error),

    /// No drive has the given id.
    #[error("no drive with id {0}")]
    UnknownDrive(u32),
}

/// Drives on offer and submitted drive requests, held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveBoard {
    drives: Vec<Drive>,
    awaiting_approval: Vec<DriveRequest>,
}

impl DriveBoard {
    pub fn new(drives: Vec<Drive>) -> Self {
        Self {
            drives,
            awaiting_approval: Vec::new(),
        }
    }

    /// Parses a JSON array of drive records.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Loads a JSON array of drive records from a file.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let json = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let board = Self::from_json(&json)?;
        info!(path = %path.display(), drives = board.drives.len(), "loaded drive list");
        Ok(board)
    }

    /// A small built-in board used when no seed file is given.
    pub fn demo() -> Self {
        Self::new(vec![
            sample_drive(
                1,
                "TechCorp Solutions",
                "Software Developer",
                "₹12 LPA",
                "CGPA ≥ 7.0, CSE/IT",
                "2026-11-02",
                "Online Test → Technical Interview → HR Round",
                true,
                false,
            ),
            sample_drive(
                2,
                "DataWave Analytics",
                "Data Analyst",
                "₹9 LPA",
                "CGPA ≥ 8.0, any branch",
                "2026-11-09",
                "Aptitude Test → Case Study → HR Round",
                false,
                false,
            ),
            sample_drive(
                3,
                "Nimbus Cloud",
                "Site Reliability Engineer",
                "₹15 LPA",
                "CGPA ≥ 7.5, CSE/IT/ECE",
                "2026-11-16",
                "Coding Round → System Design → Managerial Round",
                true,
                true,
            ),
        ])
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn get(&self, id: u32) -> Option<&Drive> {
        self.drives.iter().find(|d| d.id == id)
    }

    /// Marks a drive as applied to.
    ///
    /// Eligibility is not checked here; callers gate on the card's button state.
    pub fn apply(&mut self, id: u32) -> Result<(), BoardError> {
        let drive = self
            .drives
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(BoardError::UnknownDrive(id))?;
        drive.has_applied = true;
        info!(id, company = %drive.company_name, "applied to drive");
        Ok(())
    }

    /// Accepts a submitted drive request; it waits for admin approval.
    pub fn accept(&mut self, request: DriveRequest) {
        info!(company = %request.company_name, "drive request awaiting approval");
        self.awaiting_approval.push(request);
    }

    /// Submitted requests, oldest first.
    pub fn awaiting_approval(&self) -> &[DriveRequest] {
        &self.awaiting_approval
    }

    /// Number of drives already applied to.
    pub fn applied_count(&self) -> usize {
        self.drives.iter().filter(|d| d.has_applied).count()
    }

    /// Number of drives still open to the viewer.
    pub fn open_count(&self) -> usize {
        self.drives
            .iter()
            .filter(|d| d.is_eligible && !d.has_applied)
            .count()
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_drive(
    id: u32,
    company: &str,
    role: &str,
    package: &str,
    eligibility: &str,
    drive_date: &str,
    process: &str,
    is_eligible: bool,
    has_applied: bool,
) -> Drive {
    Drive {
        id,
        company_name: company.into(),
        role: role.into(),
        package: package.into(),
        eligibility: eligibility.into(),
        drive_date: drive_date.into(),
        process: process.into(),
        is_eligible,
        has_applied,
    }
}
