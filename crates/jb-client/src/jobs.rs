//! Job listing endpoints.

use serde::Deserialize;
use tracing::debug;

use jb_models::{Job, JobDraft, JobFilters, JobId};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::paths;

/// `GET /jobs` returns either a bare array or `{ "jobs": [...] }`
/// depending on the query shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JobListResponse {
    List(Vec<Job>),
    Wrapped { jobs: Vec<Job> },
}

impl JobListResponse {
    fn into_jobs(self) -> Vec<Job> {
        match self {
            JobListResponse::List(jobs) => jobs,
            JobListResponse::Wrapped { jobs } => jobs,
        }
    }
}

/// Job listing endpoint group.
#[derive(Clone)]
pub struct JobsApi {
    client: ApiClient,
}

impl JobsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List jobs, optionally filtered and scoped to a viewing user.
    ///
    /// Empty filters issue the bare unfiltered query; set fields are the
    /// only params sent. The viewer id makes the server derive
    /// `applicationStatus` and `isSaved` per job.
    pub async fn list(&self, filters: &JobFilters, viewer: Option<&str>) -> ApiResult<Vec<Job>> {
        let mut params = if filters.is_empty() {
            debug!("listing jobs without filters");
            Vec::new()
        } else {
            filters.query_params()
        };
        if let Some(user_id) = viewer {
            params.push(("userId", user_id.to_string()));
        }

        let response: JobListResponse = if params.is_empty() {
            self.client.get_json("list_jobs", paths::JOBS).await?
        } else {
            self.client
                .get_json_query("list_jobs", paths::JOBS, &params)
                .await?
        };
        Ok(response.into_jobs())
    }

    /// Fetch one job, with per-viewer fields when a viewer is given.
    pub async fn get(&self, id: &JobId, viewer: Option<&str>) -> ApiResult<Job> {
        let path = paths::job(id);
        match viewer {
            Some(user_id) => {
                let params = [("userId", user_id.to_string())];
                self.client.get_json_query("get_job", &path, &params).await
            }
            None => self.client.get_json("get_job", &path).await,
        }
    }

    /// Post a new listing.
    pub async fn post(&self, draft: &JobDraft) -> ApiResult<Job> {
        self.client.post_json("post_job", paths::JOBS, draft).await
    }

    /// Update an existing listing.
    pub async fn update(&self, id: &JobId, draft: &JobDraft) -> ApiResult<()> {
        self.client
            .put_body_unit("update_job", &paths::job(id), draft)
            .await
    }

    /// Delete a listing.
    pub async fn delete(&self, id: &JobId) -> ApiResult<()> {
        self.client.delete_unit("delete_job", &paths::job(id)).await
    }

    /// Flip a listing between active and closed.
    pub async fn toggle_close(&self, id: &JobId) -> ApiResult<()> {
        self.client
            .put_unit("toggle_close", &paths::toggle_close(id))
            .await
    }

    /// List the employer's own jobs, with application counts.
    pub async fn employer_jobs(&self) -> ApiResult<Vec<Job>> {
        let response: JobListResponse = self
            .client
            .get_json("employer_jobs", paths::JOBS_EMPLOYER)
            .await?;
        Ok(response.into_jobs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_accepts_both_shapes() {
        let bare: JobListResponse = serde_json::from_str("[]").unwrap();
        assert!(bare.into_jobs().is_empty());

        let wrapped: JobListResponse = serde_json::from_str(r#"{"jobs": []}"#).unwrap();
        assert!(wrapped.into_jobs().is_empty());
    }
}
