//! Debounced job list query pipeline.
//!
//! Filter edits restart a debounce timer; only the last filter state in
//! any window reaches the server. Each issued request carries a
//! monotonic sequence number, and a response is discarded unless its
//! sequence is the latest issued, so a slow early response can never
//! overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use jb_client::JobsApi;
use jb_models::{Job, JobFilters};

/// Default debounce window for filter edits.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Current search output, replaced wholesale on every resolution.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    pub jobs: Vec<Job>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Debounced job search pipeline.
pub struct JobSearch {
    api: JobsApi,
    viewer: Option<String>,
    debounce: Duration,
    seq: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: Arc<watch::Sender<SearchSnapshot>>,
}

impl JobSearch {
    /// Create a pipeline for an optional viewing user.
    pub fn new(api: JobsApi, viewer: Option<String>) -> Self {
        let (tx, _) = watch::channel(SearchSnapshot::default());
        Self {
            api,
            viewer,
            debounce: DEBOUNCE,
            seq: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    /// Override the debounce window (tests).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Observe search output.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.tx.subscribe()
    }

    /// Apply a new filter state.
    ///
    /// Cancels any pending debounce timer and starts a new one. The
    /// timer is cancellable; a request already issued is not, it is
    /// discarded by sequence instead.
    pub fn set_filters(&self, filters: JobFilters) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let api = self.api.clone();
        let viewer = self.viewer.clone();
        let tx = Arc::clone(&self.tx);
        let latest = Arc::clone(&self.seq);
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            tx.send_modify(|snapshot| snapshot.loading = true);
            tokio::spawn(run_query(api, viewer, filters, seq, latest, tx));
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Issue a query immediately, skipping the debounce window.
    pub fn refresh(&self, filters: JobFilters) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_modify(|snapshot| snapshot.loading = true);
        tokio::spawn(run_query(
            self.api.clone(),
            self.viewer.clone(),
            filters,
            seq,
            Arc::clone(&self.seq),
            Arc::clone(&self.tx),
        ));
    }
}

async fn run_query(
    api: JobsApi,
    viewer: Option<String>,
    filters: JobFilters,
    seq: u64,
    latest: Arc<AtomicU64>,
    tx: Arc<watch::Sender<SearchSnapshot>>,
) {
    let result = api.list(&filters, viewer.as_deref()).await;

    if latest.load(Ordering::SeqCst) != seq {
        debug!(seq, "discarding stale search response");
        return;
    }

    match result {
        Ok(jobs) => tx.send_modify(|snapshot| {
            snapshot.jobs = jobs;
            snapshot.error = None;
            snapshot.loading = false;
        }),
        Err(e) => tx.send_modify(|snapshot| {
            snapshot.jobs = Vec::new();
            snapshot.error = Some(e.to_string());
            snapshot.loading = false;
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    use jb_client::{ApiClient, ClientConfig};

    struct NoQueryString;

    impl Match for NoQueryString {
        fn matches(&self, request: &Request) -> bool {
            request.url.query().is_none()
        }
    }

    fn search_for(server: &MockServer) -> JobSearch {
        let config = ClientConfig::new(server.uri());
        let client = ApiClient::new(&config, Arc::new(jb_client::NoSession)).unwrap();
        JobSearch::new(JobsApi::new(client), None).with_debounce(Duration::from_millis(50))
    }

    fn job_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "title": title,
            "company": {"name": "Acme"},
            "createdAt": "2024-06-01T12:00:00Z"
        })
    }

    fn keyword(value: &str) -> JobFilters {
        JobFilters {
            keyword: value.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_rapid_edits_issue_exactly_one_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("keyword", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_json("j1", "Rust Dev")])))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let rx = search.subscribe();

        for partial in ["r", "ru", "rus"] {
            search.set_filters(keyword(partial));
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        search.set_filters(keyword("rust"));

        tokio::time::sleep(Duration::from_millis(300)).await;
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.jobs.len(), 1);
        assert!(snapshot.error.is_none());
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn test_empty_filters_take_unfiltered_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(NoQueryString)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_for(&server);
        search.set_filters(JobFilters::default());
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    #[tokio::test]
    async fn test_slow_stale_response_is_discarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("keyword", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([job_json("j-old", "Old")]))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("keyword", "fast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_json("j-new", "New")])))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let rx = search.subscribe();

        search.set_filters(keyword("slow"));
        // Let the first request go out, then supersede it.
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.set_filters(keyword("fast"));

        tokio::time::sleep(Duration::from_millis(600)).await;
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.jobs.len(), 1);
        assert_eq!(snapshot.jobs[0].id.as_str(), "j-new");
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_empties_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(NoQueryString)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_json("j1", "Rust Dev")])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("keyword", "boom"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let rx = search.subscribe();

        search.set_filters(JobFilters::default());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.borrow().jobs.len(), 1);

        search.set_filters(keyword("boom"));
        tokio::time::sleep(Duration::from_millis(200)).await;

        let snapshot = rx.borrow().clone();
        assert!(snapshot.jobs.is_empty());
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Server error. Please try again later")
        );
    }

    #[tokio::test]
    async fn test_refresh_skips_debounce() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(NoQueryString)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_json("j1", "Rust Dev")])))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let rx = search.subscribe();

        search.refresh(JobFilters::default());
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(rx.borrow().jobs.len(), 1);
    }
}
