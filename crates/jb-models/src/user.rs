//! User account models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role, as stored on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses, saves, and applies to listings
    Jobseeker,
    /// Posts and manages listings, reviews applicants
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Jobseeker => "jobseeker",
            Role::Employer => "employer",
        }
    }

    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user account as returned by the server.
///
/// Company fields are only populated for employer accounts, resume only
/// for jobseekers. The server is authoritative; this is an opaque DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub email: String,

    pub role: Role,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Resume URL (jobseeker)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,

    /// Company name (employer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Company logo URL (employer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    /// Company description (employer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
}

/// Partial profile update, merged into the session user after a save.
///
/// `None` fields are left untouched. Optional URL fields are cleared by
/// sending an empty string, mirroring the server's storage convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl User {
    /// Merge a partial update into this user.
    pub fn apply(&mut self, update: &UserUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = non_empty(avatar);
        }
        if let Some(resume) = &update.resume {
            self.resume = non_empty(resume);
        }
        if let Some(company_name) = &update.company_name {
            self.company_name = non_empty(company_name);
        }
        if let Some(company_logo) = &update.company_logo {
            self.company_logo = non_empty(company_logo);
        }
        if let Some(company_description) = &update.company_description {
            self.company_description = non_empty(company_description);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
