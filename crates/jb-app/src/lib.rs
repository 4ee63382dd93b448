//! UI state pipelines for the job-board client.
//!
//! Everything the views call into, with rendering left to the shell:
//! - Debounced server-side job search
//! - Client-side filter/sort/paginate for the manage-jobs table
//! - Status badge mapping
//! - Route table with role gating
//! - Auth, profile, apply, and save actions

pub mod actions;
pub mod badge;
pub mod routes;
pub mod search;
pub mod table;

pub use actions::{ActionError, ActionResult, AuthActions, AvatarUpload, JobActions, ProfileActions};
pub use badge::{badge_color, badge_color_for_label, BadgeColor};
pub use routes::Route;
pub use search::{JobSearch, SearchSnapshot};
pub use table::{
    JobRow, JobRowStatus, JobTable, ManageJobs, SortDirection, SortField, StatusFilter, PAGE_SIZE,
};
