//! Job listing models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a job listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Company details embedded in a job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
}

/// A job listing as returned by the server.
///
/// `application_status` and `is_saved` are derived per viewing user and
/// only present when the request carried a `userId`. The status label is
/// kept opaque here; the badge layer maps unknown labels to a neutral
/// fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: JobId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub requirements: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "type", default)]
    pub job_type: String,

    #[serde(default)]
    pub salary_min: u32,

    #[serde(default)]
    pub salary_max: u32,

    pub company: Company,

    #[serde(default)]
    pub is_closed: bool,

    pub created_at: DateTime<Utc>,

    /// Number of applications received (employer listings)
    #[serde(default)]
    pub application_count: u32,

    /// Viewing user's application status label, if they applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_status: Option<String>,

    /// Whether the viewing user saved this job
    #[serde(default)]
    pub is_saved: bool,
}

/// A saved-job association entry from `GET /save-jobs/my`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
    #[serde(rename = "_id")]
    pub id: String,

    pub job: Job,
}

/// Employer payload for posting or editing a job.
///
/// Salaries are optional here so the form can report "both required"
/// before anything is sent; `validate` enforces presence and ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,

    #[serde(default)]
    pub location: String,

    pub category: String,

    #[serde(rename = "type")]
    pub job_type: String,

    pub description: String,

    pub requirements: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
}

impl JobDraft {
    /// Validate the draft, returning one error per offending field.
    pub fn validate(&self) -> Result<(), Vec<crate::validation::FieldError>> {
        use crate::validation::FieldError;

        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Job title is required"));
        }
        if self.category.is_empty() {
            errors.push(FieldError::new("category", "Please select a category"));
        }
        if self.job_type.is_empty() {
            errors.push(FieldError::new("jobType", "Please select a job type"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Job description is required"));
        }
        if self.requirements.trim().is_empty() {
            errors.push(FieldError::new("requirements", "Job requirements are required"));
        }
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) if min >= max => {
                errors.push(FieldError::new(
                    "salary",
                    "Maximum salary must be greater than minimum salary",
                ));
            }
            (Some(_), Some(_)) => {}
            _ => {
                errors.push(FieldError::new(
                    "salary",
                    "Both minimum and maximum salary are required",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> JobDraft {
        JobDraft {
            title: "Backend Engineer".into(),
            location: "Remote".into(),
            category: "Engineering".into(),
            job_type: "Full_Time".into(),
            description: "Build services".into(),
            requirements: "Rust".into(),
            salary_min: Some(90_000),
            salary_max: Some(120_000),
        }
    }

    #[test]
    fn test_job_id_generation() {
        assert_ne!(JobId::new(), JobId::new());
    }

    #[test]
    fn test_job_deserializes_server_shape() {
        let job: Job = serde_json::from_str(
            r#"{
                "_id": "j1",
                "title": "Backend Engineer",
                "description": "Build services",
                "requirements": "Rust",
                "location": "Remote",
                "category": "Engineering",
                "type": "Full_Time",
                "salaryMin": 90000,
                "salaryMax": 120000,
                "company": {"name": "Acme", "companyLogo": "https://cdn/logo.png"},
                "isClosed": false,
                "createdAt": "2024-06-01T12:00:00Z",
                "applicationCount": 4,
                "isSaved": true
            }"#,
        )
        .unwrap();
        assert_eq!(job.id.as_str(), "j1");
        assert_eq!(job.job_type, "Full_Time");
        assert_eq!(job.application_count, 4);
        assert!(job.is_saved);
        assert!(job.application_status.is_none());
    }

    #[test]
    fn test_draft_validates() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_draft_requires_both_salaries() {
        let mut draft = valid_draft();
        draft.salary_max = None;
        let errors = draft.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message == "Both minimum and maximum salary are required"));
    }

    #[test]
    fn test_draft_rejects_inverted_salary_range() {
        let mut draft = valid_draft();
        draft.salary_min = Some(120_000);
        draft.salary_max = Some(90_000);
        let errors = draft.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message == "Maximum salary must be greater than minimum salary"));
    }

    #[test]
    fn test_draft_serializes_type_key() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(json["type"], "Full_Time");
        assert_eq!(json["salaryMin"], 90_000);
    }
}
