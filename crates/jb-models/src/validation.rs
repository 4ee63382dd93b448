//! Client-side form validation.
//!
//! Errors are detected before submission and surfaced inline per field,
//! with the exact messages the forms display.

use serde::{Deserialize, Serialize};

/// Maximum avatar upload size (5 MB).
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// One inline form error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A file selected for avatar upload, as seen by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Validate an email address. Returns the inline message on failure.
pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required");
    }
    if !has_email_shape(email) {
        return Some("Please enter a valid email address");
    }
    None
}

// local@domain.tld with no whitespace, one '@', and a dot in the domain.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a password against the signup policy.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    None
}

/// Validate an optional avatar file (JPG/PNG, at most 5 MB).
pub fn validate_avatar(file: Option<&AvatarFile>) -> Option<&'static str> {
    let file = file?;

    let extension = file
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !matches!(extension.as_str(), "jpg" | "jpeg" | "png") {
        return Some("Avatar must be a JPG or PNG file");
    }

    if file.size_bytes > MAX_AVATAR_BYTES {
        return Some("Avatar must be less than 5MB");
    }

    None
}
