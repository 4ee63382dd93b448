//! Application models and the canonical status vocabulary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobId;

/// Application lifecycle status.
///
/// This is the single vocabulary used everywhere: badge rendering, the
/// employer's status dropdown, and the `PUT /applications/{id}/status`
/// payload. Labels carry a space on the wire ("In Review").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "In Review")]
    InReview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// All statuses, in dropdown order.
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::InReview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    /// Parse a wire label. Unknown labels return `None` so callers can
    /// fall back to a neutral rendering.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Applied" => Some(ApplicationStatus::Applied),
            "In Review" => Some(ApplicationStatus::InReview),
            "Rejected" => Some(ApplicationStatus::Rejected),
            "Accepted" => Some(ApplicationStatus::Accepted),
            _ => None,
        }
    }

    /// Check if this is a terminal state (employer made a decision).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Accepted)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job summary embedded in an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRef {
    #[serde(rename = "_id")]
    pub id: JobId,

    pub title: String,

    #[serde(default)]
    pub location: String,
}

/// Applicant summary embedded in an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

/// One application, as returned by `GET /applications/job/{id}`.
///
/// The server enforces one application per (user, job) pair; the status
/// is mutated only by the employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,

    pub job: JobRef,

    pub applicant: Applicant,

    #[serde(default)]
    pub status: ApplicationStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
