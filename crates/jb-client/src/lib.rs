//! REST API client for the job-board backend.
//!
//! This crate provides:
//! - A tuned `reqwest` client with bearer-token injection
//! - A normalized error taxonomy (timeout, network, server message, 401)
//! - Typed endpoint groups for auth, jobs, saved jobs, applications,
//!   and dashboard analytics
//! - The REST path table consumed by every group

pub mod analytics;
pub mod applications;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod jobs;
pub mod paths;
pub mod saved_jobs;


pub use analytics::AnalyticsApi;
pub use applications::ApplicationsApi;
pub use auth::{AuthApi, AuthResponse, LoginRequest, RegisterRequest, UploadResponse};
pub use client::{ApiClient, NoSession, SessionHooks, TokenProvider};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use jobs::JobsApi;
pub use saved_jobs::SavedJobsApi;
