//! Client-side table pipeline for the employer "manage jobs" view.
//!
//! Derives the displayed page from an already-fetched in-memory array:
//! free-text filter over title or company, exact status selector, single
//! active sort field with direction toggle, and fixed-size pagination
//! with the current page clamped to the available range.

use std::cmp::Ordering;

use jb_client::{ApiResult, JobsApi};
use jb_models::{Job, JobId};

/// Rows per page.
pub const PAGE_SIZE: usize = 8;

// ============================================================================
// Sort Configuration
// ============================================================================

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Status,
    /// Compared numerically, never lexicographically
    Applicants,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// ============================================================================
// Rows
// ============================================================================

/// Listing state shown in the status column and filtered on exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRowStatus {
    Active,
    Closed,
}

impl JobRowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRowStatus::Active => "Active",
            JobRowStatus::Closed => "Closed",
        }
    }
}

/// Status selector above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Closed,
}

impl StatusFilter {
    pub fn matches(&self, status: JobRowStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == JobRowStatus::Active,
            StatusFilter::Closed => status == JobRowStatus::Closed,
        }
    }
}

/// One table row, flattened from a job listing.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub status: JobRowStatus,
    pub applicants: u32,
    pub date_posted: String,
    pub logo: Option<String>,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.name.clone(),
            status: if job.is_closed {
                JobRowStatus::Closed
            } else {
                JobRowStatus::Active
            },
            applicants: job.application_count,
            date_posted: job.created_at.format("%d-%m-%Y").to_string(),
            logo: job.company.company_logo.clone(),
        }
    }
}

// ============================================================================
// Table State
// ============================================================================

/// Filter/sort/page state over an in-memory row set.
#[derive(Debug, Clone, Default)]
pub struct JobTable {
    rows: Vec<JobRow>,
    search_term: String,
    status_filter: StatusFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
}

impl JobTable {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    /// Replace the backing rows (after a fetch).
    pub fn set_rows(&mut self, rows: Vec<JobRow>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[JobRow] {
        &self.rows
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Column header click: the active field flips direction, a new
    /// field resets to ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    fn matches_filters(&self, row: &JobRow) -> bool {
        let term = self.search_term.to_lowercase();
        let matches_search = term.is_empty()
            || row.title.to_lowercase().contains(&term)
            || row.company.to_lowercase().contains(&term);
        matches_search && self.status_filter.matches(row.status)
    }

    fn compare(&self, a: &JobRow, b: &JobRow) -> Ordering {
        let ordering = match self.sort_field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::Applicants => a.applicants.cmp(&b.applicants),
        };
        match self.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Rows matching both predicates, in sort order.
    pub fn filtered_and_sorted(&self) -> Vec<JobRow> {
        let mut filtered: Vec<JobRow> = self
            .rows
            .iter()
            .filter(|row| self.matches_filters(row))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.compare(a, b));
        filtered
    }

    /// Total pages over the filtered set, at least 1.
    pub fn total_pages(&self) -> usize {
        self.filtered_and_sorted().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Requested page clamped to the available range, so narrowing a
    /// filter never leaves an empty out-of-range page showing.
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    /// The visible page slice.
    pub fn paginated(&self) -> Vec<JobRow> {
        let filtered = self.filtered_and_sorted();
        let start = (self.page.clamp(1, self.total_pages()) - 1) * PAGE_SIZE;
        filtered.into_iter().skip(start).take(PAGE_SIZE).collect()
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Manage-jobs view controller.
///
/// Every mutation re-fetches the employer job list after the server
/// confirms it, keeping client and server state aligned for both status
/// toggles and deletes.
pub struct ManageJobs {
    api: JobsApi,
    pub table: JobTable,
}

impl ManageJobs {
    pub fn new(api: JobsApi) -> Self {
        Self {
            api,
            table: JobTable::new(),
        }
    }

    /// Fetch the employer's jobs and replace the table rows.
    pub async fn refresh(&mut self) -> ApiResult<()> {
        let jobs = self.api.employer_jobs().await?;
        self.table.set_rows(jobs.iter().map(JobRow::from).collect());
        Ok(())
    }

    /// Flip a listing between active and closed, then refetch.
    pub async fn toggle_close(&mut self, id: &JobId) -> ApiResult<()> {
        self.api.toggle_close(id).await?;
        self.refresh().await
    }

    /// Delete a listing, then refetch.
    pub async fn delete(&mut self, id: &JobId) -> ApiResult<()> {
        self.api.delete(id).await?;
        self.refresh().await
    }
}
