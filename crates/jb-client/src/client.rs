//! HTTP client with bearer-token injection and error normalization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info_span, Instrument};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Source of the current bearer token. The session store implements this;
/// every request attaches `Authorization: Bearer <token>` when one is
/// present.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Session invalidation hook. Called exactly once per 401 response,
/// before the error is returned to the caller.
pub trait SessionHooks: Send + Sync {
    fn on_unauthorized(&self);
}

/// Anonymous session for unauthenticated clients and tests.
pub struct NoSession;

impl TokenProvider for NoSession {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

impl SessionHooks for NoSession {
    fn on_unauthorized(&self) {}
}

/// REST client for the job-board backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
    hooks: Arc<dyn SessionHooks>,
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            tokens: Arc::clone(&self.tokens),
            hooks: Arc::clone(&self.hooks),
        }
    }
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("jb-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens,
            hooks: Arc::new(NoSession),
        })
    }

    /// Attach the session invalidation hook.
    pub fn with_hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer token attached if present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and normalize the outcome.
    pub(crate) async fn execute(
        &self,
        operation: &str,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<Response> {
        let span = info_span!("api_request", operation = %operation, path = %path);

        async {
            let response = builder.send().await.map_err(ApiError::from)?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                debug!("request rejected with 401, invalidating session");
                self.hooks.on_unauthorized();
                return Err(ApiError::Unauthorized);
            }

            if status.is_success() {
                Ok(response)
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::from_response(status.as_u16(), &body))
            }
        }
        .instrument(span)
        .await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, path);
        let response = self.execute(operation, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, path).query(params);
        let response = self.execute(operation, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.execute(operation, path, builder).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.execute(operation, path, builder).await?;
        Ok(response.json().await?)
    }

    /// POST with no body, response discarded.
    pub(crate) async fn post_unit(&self, operation: &str, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::POST, path);
        self.execute(operation, path, builder).await?;
        Ok(())
    }

    /// POST with a JSON body, response discarded.
    pub(crate) async fn post_body_unit<B: Serialize>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(operation, path, builder).await?;
        Ok(())
    }

    /// PUT with no body, response discarded.
    pub(crate) async fn put_unit(&self, operation: &str, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::PUT, path);
        self.execute(operation, path, builder).await?;
        Ok(())
    }

    /// PUT with a JSON body, response discarded.
    pub(crate) async fn put_body_unit<B: Serialize>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let builder = self.request(Method::PUT, path).json(body);
        self.execute(operation, path, builder).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, operation: &str, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, path);
        self.execute(operation, path, builder).await?;
        Ok(())
    }
}
