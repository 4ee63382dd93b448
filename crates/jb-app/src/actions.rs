//! User-initiated actions behind the views.
//!
//! Each action validates locally first, issues the API call, and keeps
//! the session in step with what the server confirmed. Auth gating
//! happens here so a signed-out visitor never issues a request the
//! server would reject anyway.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use jb_client::{ApiError, ApplicationsApi, AuthApi, RegisterRequest, SavedJobsApi};
use jb_models::{
    validate_avatar, validate_email, validate_password, AvatarFile, JobId, Role, SavedJob, User,
    UserUpdate,
};
use jb_session::{SessionError, SessionStore};

/// Why an action did not complete.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Gated action attempted while signed out; no request was issued.
    #[error("Please log in to continue")]
    SignInRequired,

    /// Local validation rejected the input before any request.
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// An image picked for upload, validated before any bytes leave the
/// machine.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    fn validate(&self) -> ActionResult<()> {
        let file = AvatarFile {
            file_name: self.file_name.clone(),
            size_bytes: self.bytes.len() as u64,
        };
        match validate_avatar(Some(&file)) {
            Some(message) => Err(ActionError::Validation(message)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Sign-up, sign-in, and sign-out.
pub struct AuthActions {
    api: AuthApi,
    session: Arc<SessionStore>,
}

impl AuthActions {
    pub fn new(api: AuthApi, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Validate credentials locally, exchange them for a token, and
    /// open the session.
    pub async fn login(&self, email: &str, password: &str) -> ActionResult<User> {
        if let Some(message) = validate_email(email) {
            return Err(ActionError::Validation(message));
        }
        if password.is_empty() {
            return Err(ActionError::Validation("Password is required"));
        }

        let response = self.api.login(email, password).await?;
        self.session.login(response.user.clone(), &response.token)?;
        Ok(response.user)
    }

    /// Register a new account, uploading the avatar first when one was
    /// picked, then open the session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        avatar: Option<AvatarUpload>,
    ) -> ActionResult<User> {
        if name.trim().is_empty() {
            return Err(ActionError::Validation("Full name is required"));
        }
        if let Some(message) = validate_email(email) {
            return Err(ActionError::Validation(message));
        }
        if let Some(message) = validate_password(password) {
            return Err(ActionError::Validation(message));
        }

        let avatar_url = match avatar {
            Some(upload) => {
                upload.validate()?;
                let uploaded = self
                    .api
                    .upload_image(&upload.file_name, upload.bytes)
                    .await?;
                uploaded.image_url
            }
            None => String::new(),
        };

        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            avatar: avatar_url,
        };
        let response = self.api.register(&request).await?;
        self.session.login(response.user.clone(), &response.token)?;
        Ok(response.user)
    }

    pub fn logout(&self) -> ActionResult<()> {
        self.session.logout()?;
        Ok(())
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile edits for the signed-in user.
pub struct ProfileActions {
    api: AuthApi,
    session: Arc<SessionStore>,
}

impl ProfileActions {
    pub fn new(api: AuthApi, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Save profile changes, then store the server-confirmed user in the
    /// session so readers see exactly what the server kept.
    pub async fn save_profile(&self, update: &UserUpdate) -> ActionResult<User> {
        if update.is_empty() {
            debug!("skipping profile save with no changed fields");
            if let Some(user) = self.session.current_user() {
                return Ok(user);
            }
            return Err(ActionError::SignInRequired);
        }

        let user = self.api.update_profile(update).await?;
        self.session.set_user(user.clone())?;
        Ok(user)
    }

    /// Upload a new avatar image and return its URL. The caller decides
    /// whether to persist it through [`save_profile`].
    pub async fn upload_avatar(&self, upload: AvatarUpload) -> ActionResult<String> {
        upload.validate()?;
        let response = self
            .api
            .upload_image(&upload.file_name, upload.bytes)
            .await?;
        Ok(response.image_url)
    }

    /// Delete the stored resume, then clear it from the session user.
    pub async fn remove_resume(&self) -> ActionResult<()> {
        let Some(user) = self.session.current_user() else {
            return Err(ActionError::SignInRequired);
        };
        let Some(resume_url) = user.resume else {
            return Ok(());
        };

        self.api.delete_resume(&resume_url).await?;
        self.session.update_user(&UserUpdate {
            resume: Some(String::new()),
            ..Default::default()
        })?;
        Ok(())
    }
}

// ============================================================================
// Jobs
// ============================================================================

/// Job-card actions: apply and save/unsave.
pub struct JobActions {
    applications: ApplicationsApi,
    saved_jobs: SavedJobsApi,
    session: Arc<SessionStore>,
}

impl JobActions {
    pub fn new(
        applications: ApplicationsApi,
        saved_jobs: SavedJobsApi,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            applications,
            saved_jobs,
            session,
        }
    }

    /// Apply to a job. Signed-out visitors never issue the request; the
    /// shell routes them to the login page instead.
    pub async fn apply_to_job(&self, job_id: &JobId) -> ActionResult<()> {
        if !self.session.is_authenticated() {
            return Err(ActionError::SignInRequired);
        }
        self.applications.apply(job_id).await?;
        Ok(())
    }

    /// Save or unsave a job depending on its current state. Returns the
    /// new saved flag.
    pub async fn toggle_save(&self, job_id: &JobId, currently_saved: bool) -> ActionResult<bool> {
        if !self.session.is_authenticated() {
            return Err(ActionError::SignInRequired);
        }
        if currently_saved {
            self.saved_jobs.unsave(job_id).await?;
            Ok(false)
        } else {
            self.saved_jobs.save(job_id).await?;
            Ok(true)
        }
    }

    /// The saved-jobs page list.
    pub async fn saved_jobs(&self) -> ActionResult<Vec<SavedJob>> {
        Ok(self.saved_jobs.mine().await?)
    }
}
