//! Dashboard analytics endpoint.

use jb_models::AnalyticsOverview;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::paths;

/// Dashboard analytics endpoint group.
#[derive(Clone)]
pub struct AnalyticsApi {
    client: ApiClient,
}

impl AnalyticsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the employer dashboard overview.
    pub async fn overview(&self) -> ApiResult<AnalyticsOverview> {
        self.client.get_json("overview", paths::OVERVIEW).await
    }
}
