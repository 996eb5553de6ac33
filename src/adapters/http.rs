use crate::config::toml_config::BackendConfig;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

/// Shared HTTP client for the hosted backend. Every request carries the
/// project's anon key as `apikey`; the bearer token is the anon key or the
/// signed-in user's access token.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> Result<Self> {
        validate_url("backend.url", base_url)?;
        let anon_key = anon_key.into();
        validate_non_empty_string("backend.anon_key", &anon_key)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            client: Client::new(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.url, config.anon_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path, &self.anon_key)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path, &self.anon_key)
    }

    /// GET on behalf of a signed-in user, so row-level policies see them.
    pub(crate) fn get_as(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.request(Method::GET, path, access_token)
    }

    /// POST on behalf of a signed-in user.
    pub(crate) fn post_as(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.request(Method::POST, path, access_token)
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Status and message of a non-success response, preferring the message
    /// the backend put in the body.
    pub(crate) async fn error_parts(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error_description.or(b.msg).or(b.message))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        tracing::debug!("Backend error {}: {}", status, message);
        (status, message)
    }

    pub(crate) async fn error_from(response: Response) -> StorefrontError {
        let (status, message) = Self::error_parts(response).await;
        StorefrontError::BackendError {
            status: status.as_u16(),
            message,
        }
    }
}
