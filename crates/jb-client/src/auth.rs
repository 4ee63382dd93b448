//! Auth and profile endpoints.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use jb_models::{Role, User, UserUpdate};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::paths;

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Uploaded avatar URL, empty when none was provided
    pub avatar: String,
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login/register response: the user document with the token alongside.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

/// Response of the image upload endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// Body for `POST /user/resume` (delete-resume semantics).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteResumeRequest {
    resume_url: String,
}

/// Auth and profile endpoint group.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.client
            .post_json("register", paths::REGISTER, request)
            .await
    }

    /// Exchange credentials for a user and token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post_json("login", paths::LOGIN, &request).await
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> ApiResult<User> {
        self.client.get_json("get_profile", paths::GET_PROFILE).await
    }

    /// Save profile changes, returning the server-confirmed user.
    pub async fn update_profile(&self, update: &UserUpdate) -> ApiResult<User> {
        self.client
            .put_json("update_profile", paths::UPDATE_PROFILE, update)
            .await
    }

    /// Remove the stored resume.
    pub async fn delete_resume(&self, resume_url: &str) -> ApiResult<()> {
        let request = DeleteResumeRequest {
            resume_url: resume_url.to_string(),
        };
        self.client
            .post_body_unit("delete_resume", paths::DELETE_RESUME, &request)
            .await
    }

    /// Upload an image as multipart form data under the `image` field.
    ///
    /// A local preview is shown optimistically by the caller; this is a
    /// single fire-and-forget request with no retry.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse> {
        let mime = mime_for(file_name);
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::invalid_response(format!("Invalid upload mime: {}", e)))?;
        let form = Form::new().part("image", part);

        let builder = self
            .client
            .request(Method::POST, paths::UPLOAD_IMAGE)
            .multipart(form);
        let response = self
            .client
            .execute("upload_image", paths::UPLOAD_IMAGE, builder)
            .await?;
        Ok(response.json().await?)
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        _ => "image/jpeg",
    }
}
