//! Application endpoints.

use serde::Serialize;

use jb_models::{Application, ApplicationStatus, JobId};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::paths;

#[derive(Debug, Serialize)]
struct StatusUpdateRequest {
    status: ApplicationStatus,
}

/// Application endpoint group.
#[derive(Clone)]
pub struct ApplicationsApi {
    client: ApiClient,
}

impl ApplicationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Apply to a job as the current user.
    ///
    /// The server enforces one application per (user, job) pair and
    /// rejects closed jobs; the client only reflects that state.
    pub async fn apply(&self, job_id: &JobId) -> ApiResult<()> {
        self.client
            .post_unit("apply_to_job", &paths::apply_to_job(job_id))
            .await
    }

    /// List applications for one of the employer's jobs.
    pub async fn for_job(&self, job_id: &JobId) -> ApiResult<Vec<Application>> {
        self.client
            .get_json("applications_for_job", &paths::applications_for_job(job_id))
            .await
    }

    /// Set an application's status (employer only).
    pub async fn update_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> ApiResult<()> {
        let request = StatusUpdateRequest { status };
        self.client
            .put_body_unit(
                "update_application_status",
                &paths::application_status(application_id),
                &request,
            )
            .await
    }
}
