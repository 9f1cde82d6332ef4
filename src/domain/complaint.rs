// src/domain/complaint.rs

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a complaint.
/// Any status may follow any other; only the status update handler changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Rejected,
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Where the citizen was when filing, if they shared it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn validate(&self) -> Result<(), ServerError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ServerError::BadRequest(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ServerError::BadRequest(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Model-derived metadata, attached once at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub category: String,
    pub priority: Priority,
    pub summary: String,
    pub suggested_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image_base64: Option<String>,
    pub location: Option<Location>,
    pub status: ComplaintStatus,
    /// Epoch milliseconds; never changes after creation.
    pub created_at: i64,
    pub ai_analysis: AiAnalysis,
}

impl Complaint {
    /// Builds a fresh `Pending` record from a validated submission.
    pub fn from_submission(
        id: String,
        submission: NewComplaint,
        ai_analysis: AiAnalysis,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            user_id: submission.user_id,
            title: submission.title,
            description: submission.description,
            image_base64: submission.image_base64,
            location: submission.location,
            status: ComplaintStatus::Pending,
            created_at,
            ai_analysis,
        }
    }
}

/// Body of `POST /api/complaints`.
///
/// Text fields default to empty so that a missing field surfaces as a
/// validation error with a readable message instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub user_id: String,
}

impl NewComplaint {
    /// Trim text fields and reject anything the pipeline cannot accept.
    pub fn normalize(self) -> Result<Self, ServerError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ServerError::BadRequest("title is required".into()));
        }

        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(ServerError::BadRequest("description is required".into()));
        }

        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(ServerError::BadRequest("userId is required".into()));
        }

        if let Some(location) = &self.location {
            location.validate()?;
        }

        // An empty string from the form means "no photo".
        let image_base64 = self.image_base64.filter(|s| !s.trim().is_empty());

        Ok(Self {
            title,
            description,
            image_base64,
            location: self.location,
            user_id,
        })
    }
}

/// Body of `PATCH /api/complaints/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: ComplaintStatus,
}
