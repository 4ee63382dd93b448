//! Employer dashboard analytics payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::Application;
use crate::job::Job;

/// Week-over-week trend percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTrends {
    #[serde(default)]
    pub active_jobs: f64,

    #[serde(default)]
    pub total_applicants: f64,

    #[serde(default)]
    pub total_hired: f64,
}

/// Headline counters on the employer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    #[serde(default)]
    pub total_active_jobs: u64,

    #[serde(default)]
    pub total_applications: u64,

    #[serde(default)]
    pub total_hired: u64,

    #[serde(default)]
    pub trends: CountTrends,
}

/// Recent activity feeds shown under the counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(default)]
    pub recent_jobs: Vec<Job>,

    #[serde(default)]
    pub recent_applications: Vec<Application>,
}

/// Response of `GET /analytics/overview`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    #[serde(default)]
    pub counts: DashboardCounts,

    #[serde(default)]
    pub data: RecentActivity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_deserializes_partial_payload() {
        let overview: AnalyticsOverview = serde_json::from_str(
            r#"{"counts": {"totalActiveJobs": 3, "totalApplications": 12, "totalHired": 1}}"#,
        )
        .unwrap();
        assert_eq!(overview.counts.total_active_jobs, 3);
        assert_eq!(overview.counts.trends.active_jobs, 0.0);
        assert!(overview.data.recent_jobs.is_empty());
    }
}
