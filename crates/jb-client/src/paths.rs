//! REST path table for the job-board backend.

use jb_models::JobId;

// Auth
pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";
pub const GET_PROFILE: &str = "/auth/profile";
pub const UPDATE_PROFILE: &str = "/user/profile";
pub const DELETE_RESUME: &str = "/user/resume";
pub const UPLOAD_IMAGE: &str = "/auth/upload-image";

// Dashboard
pub const OVERVIEW: &str = "/analytics/overview";

// Jobs
pub const JOBS: &str = "/jobs";
pub const JOBS_EMPLOYER: &str = "/jobs/get-jobs-employer";

pub fn job(id: &JobId) -> String {
    format!("/jobs/{}", id)
}

pub fn toggle_close(id: &JobId) -> String {
    format!("/jobs/{}/toggle-close", id)
}

// Saved jobs
pub const SAVED_JOBS: &str = "/save-jobs/my";

pub fn save_job(id: &JobId) -> String {
    format!("/save-jobs/{}", id)
}

// Applications
pub fn apply_to_job(id: &JobId) -> String {
    format!("/applications/{}", id)
}

pub fn applications_for_job(id: &JobId) -> String {
    format!("/applications/job/{}", id)
}

pub fn application_status(application_id: &str) -> String {
    format!("/applications/{}/status", application_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        let id = JobId::from("j1");
        assert_eq!(job(&id), "/jobs/j1");
        assert_eq!(toggle_close(&id), "/jobs/j1/toggle-close");
        assert_eq!(save_job(&id), "/save-jobs/j1");
        assert_eq!(apply_to_job(&id), "/applications/j1");
        assert_eq!(applications_for_job(&id), "/applications/job/j1");
        assert_eq!(application_status("a1"), "/applications/a1/status");
    }
}
