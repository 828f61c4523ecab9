//! Job entity and its lifecycle

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{InvalidPropertyTypeError, InvalidStatusError};

use super::part::Part;
use super::photo::Photo;
use super::time_log::TimeLog;
use super::voice_note::VoiceNote;

/// Kind of property the job is located at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = InvalidPropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "industrial" => Ok(Self::Industrial),
            _ => Err(InvalidPropertyTypeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Job lifecycle status.
///
/// Archiving is a status transition, never a deletion. The pre-archive
/// status is kept on the job so restore can return to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Completed,
    Archived,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(InvalidStatusError {
                input: s.to_string(),
            }),
        }
    }
}

/// Four independent pre-work safety flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyChecklist {
    pub ppe_worn: bool,
    pub voltage_tested: bool,
    pub lockout_tagout: bool,
    pub hazards_noted: bool,
}

impl SafetyChecklist {
    /// Number of completed checklist items
    pub fn completed_count(&self) -> usize {
        [
            self.ppe_worn,
            self.voltage_tested,
            self.lockout_tagout,
            self.hazards_noted,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_count() == 4
    }
}

/// One customer service engagement and all its captured data.
///
/// Jobs are mutated by whole-record replacement: a handler builds the
/// updated record and hands it back to the store, never patching in place
/// across call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub property_type: PropertyType,
    pub status: JobStatus,
    /// Status the job had before it was archived. Absent on legacy
    /// documents, in which case restore falls back to Active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<JobStatus>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub photos: Vec<Photo>,
    pub parts: Vec<Part>,
    pub time_logs: Vec<TimeLog>,
    pub tech_notes: String,
    pub customer_notes: String,
    pub voice_notes: Vec<VoiceNote>,
    pub safety_checklist: SafetyChecklist,
    /// Hourly rate snapshot, copied from settings at creation time and
    /// independent afterwards.
    pub hourly_rate: f64,
}

impl Job {
    /// Create a new active job with empty collections.
    ///
    /// The hourly rate is snapshotted from the caller (normally the
    /// settings default) and does not track later settings changes.
    pub fn new(
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        property_type: PropertyType,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            phone: phone.into(),
            address: address.into(),
            property_type,
            status: JobStatus::Active,
            previous_status: None,
            created_at: Utc::now(),
            photos: Vec::new(),
            parts: Vec::new(),
            time_logs: Vec::new(),
            tech_notes: String::new(),
            customer_notes: String::new(),
            voice_notes: Vec::new(),
            safety_checklist: SafetyChecklist::default(),
            hourly_rate,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.status == JobStatus::Archived
    }

    /// Archive the job, or restore it to its pre-archive status.
    ///
    /// Restore returns to the status the job had when it was archived; a
    /// Completed job comes back Completed, not Active.
    pub fn toggle_archive(&mut self) {
        if self.status == JobStatus::Archived {
            self.status = self.previous_status.take().unwrap_or(JobStatus::Active);
        } else {
            self.previous_status = Some(self.status);
            self.status = JobStatus::Archived;
        }
    }

    /// Toggle between Completed and Active (re-open)
    pub fn toggle_complete(&mut self) {
        self.status = match self.status {
            JobStatus::Completed => JobStatus::Active,
            _ => JobStatus::Completed,
        };
    }

    /// Case-insensitive search over customer name and address
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.customer_name.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}
