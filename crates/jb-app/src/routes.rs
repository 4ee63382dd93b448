//! Client-side navigation surface.
//!
//! The shell owns actual navigation; this module owns the route table,
//! path parsing, and the employer gate so every caller agrees on them.

use jb_models::{Role, User};

/// Every reachable route. Unknown paths parse to [`Route::Landing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignUp,
    Login,
    FindJobs,
    JobDetails { job_id: String },
    SavedJobs,
    Profile,
    EmployerDashboard,
    PostJob,
    ManageJobs,
    Applicants,
    CompanyProfile,
}

impl Route {
    /// Parse a path. Anything unrecognized redirects to the landing page.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if let Some(job_id) = trimmed.strip_prefix("/job/") {
            if !job_id.is_empty() && !job_id.contains('/') {
                return Route::JobDetails {
                    job_id: job_id.to_string(),
                };
            }
        }
        match trimmed {
            "" | "/" => Route::Landing,
            "/signup" => Route::SignUp,
            "/login" => Route::Login,
            "/find-jobs" => Route::FindJobs,
            "/saved-jobs" => Route::SavedJobs,
            "/profile" => Route::Profile,
            "/employer-dashboard" => Route::EmployerDashboard,
            "/post-job" => Route::PostJob,
            "/manage-jobs" => Route::ManageJobs,
            "/applicants" => Route::Applicants,
            "/company-profile" => Route::CompanyProfile,
            _ => Route::Landing,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Login => "/login".to_string(),
            Route::FindJobs => "/find-jobs".to_string(),
            Route::JobDetails { job_id } => format!("/job/{job_id}"),
            Route::SavedJobs => "/saved-jobs".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EmployerDashboard => "/employer-dashboard".to_string(),
            Route::PostJob => "/post-job".to_string(),
            Route::ManageJobs => "/manage-jobs".to_string(),
            Route::Applicants => "/applicants".to_string(),
            Route::CompanyProfile => "/company-profile".to_string(),
        }
    }

    /// Role a visitor must hold to enter, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::EmployerDashboard
            | Route::PostJob
            | Route::ManageJobs
            | Route::Applicants
            | Route::CompanyProfile => Some(Role::Employer),
            _ => None,
        }
    }

    /// Whether the visitor may enter. Ungated routes admit everyone,
    /// including anonymous visitors.
    pub fn allows(&self, user: Option<&User>) -> bool {
        match self.required_role() {
            None => true,
            Some(role) => user.map(|u| u.role == role).unwrap_or(false),
        }
    }
}
