//! Shared data models for the job-board client.
//!
//! This crate provides Serde-serializable types for:
//! - User accounts and profile updates
//! - Job listings and employer drafts
//! - Applications and their status vocabulary
//! - Server-side search filters
//! - Dashboard analytics payloads
//! - Client-side form validation

pub mod analytics;
pub mod application;
pub mod catalog;
pub mod filters;
pub mod job;
pub mod user;
pub mod validation;

// Re-export common types
pub use analytics::{AnalyticsOverview, DashboardCounts, RecentActivity};
pub use application::{Applicant, Application, ApplicationStatus, JobRef};
pub use catalog::{CATEGORIES, JOB_TYPES};
pub use filters::JobFilters;
pub use job::{Company, Job, JobDraft, JobId, SavedJob};
pub use user::{Role, User, UserUpdate};
pub use validation::{validate_avatar, validate_email, validate_password, AvatarFile, FieldError};
