use crate::adapters::http::BackendClient;
use crate::domain::model::{Session, UserProfile};
use crate::domain::ports::IdentityService;
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Token endpoint responses carry a session; sign-up without auto-confirm
/// returns only the user.
#[derive(Debug, Deserialize)]
struct AuthBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<UserBody>,
}

impl AuthBody {
    fn into_session(self) -> Option<Session> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Some(Session {
                access_token,
                user_id: user.id,
                email: user.email,
            }),
            _ => None,
        }
    }
}

/// Identity service over the backend's auth endpoints (`/auth/v1`).
/// The last issued session is kept in memory for `current_session`.
#[derive(Debug)]
pub struct RestIdentity {
    backend: BackendClient,
    session: Mutex<Option<Session>>,
}

impl RestIdentity {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            session: Mutex::new(None),
        }
    }

    pub fn with_session(backend: BackendClient, session: Session) -> Self {
        Self {
            backend,
            session: Mutex::new(Some(session)),
        }
    }

    async fn auth_error(response: Response) -> StorefrontError {
        let (status, message) = BackendClient::error_parts(response).await;
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                StorefrontError::AuthError { message }
            }
            _ => StorefrontError::BackendError {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn post_credentials(&self, path: &str, email: &str, password: &str) -> Result<AuthBody> {
        let response = self
            .backend
            .post(path)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl IdentityService for RestIdentity {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.lock().await.clone())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let body = self
            .post_credentials("auth/v1/token?grant_type=password", email, password)
            .await?;
        let session = body.into_session().ok_or_else(|| StorefrontError::AuthError {
            message: "Sign-in response did not contain a session".to_string(),
        })?;

        *self.session.lock().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>> {
        let body = self.post_credentials("auth/v1/signup", email, password).await?;
        let session = body.into_session();

        if let Some(session) = &session {
            *self.session.lock().await = Some(session.clone());
        }
        Ok(session)
    }

    async fn sign_out(&self, session: &Session) -> Result<()> {
        let response = self
            .backend
            .post_as("auth/v1/logout", &session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        *self.session.lock().await = None;
        Ok(())
    }

    async fn user_profile(&self, session: &Session) -> Result<Option<UserProfile>> {
        let response = self
            .backend
            .get_as("rest/v1/users", &session.access_token)
            .query(&[
                ("select", "*".to_string()),
                ("id", format!("eq.{}", session.user_id)),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendClient::error_from(response).await);
        }

        let rows: Vec<UserProfile> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}
