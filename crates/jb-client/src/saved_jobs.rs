//! Saved-job endpoints.

use jb_models::{JobId, SavedJob};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::paths;

/// Saved-job endpoint group.
#[derive(Clone)]
pub struct SavedJobsApi {
    client: ApiClient,
}

impl SavedJobsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Save a job for the current user.
    pub async fn save(&self, id: &JobId) -> ApiResult<()> {
        self.client.post_unit("save_job", &paths::save_job(id)).await
    }

    /// Remove a job from the current user's saved list.
    pub async fn unsave(&self, id: &JobId) -> ApiResult<()> {
        self.client
            .delete_unit("unsave_job", &paths::save_job(id))
            .await
    }

    /// List the current user's saved jobs.
    pub async fn mine(&self) -> ApiResult<Vec<SavedJob>> {
        self.client.get_json("saved_jobs", paths::SAVED_JOBS).await
    }
}
