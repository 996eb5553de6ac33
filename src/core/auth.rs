//! Authentication state and the routing decision derived from it.

use crate::domain::model::{AuthState, Session, UserProfile};
use crate::domain::ports::IdentityService;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::is_valid_email;
use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Where the presentation layer should send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    SignIn,
    Shop,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into();
        let password = password.into();

        if !is_valid_email(email.trim()) {
            return Err(StorefrontError::validation("Please enter a valid email address"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(StorefrontError::validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(Self {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct AuthStore {
    state: AuthState,
    profile: Option<UserProfile>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Profile row fetched by [`AuthStore::load`], if any.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn route(&self) -> Route {
        match self.state {
            AuthState::Loading => Route::Splash,
            AuthState::Unauthenticated => Route::SignIn,
            AuthState::Authenticated(_) => Route::Shop,
        }
    }

    /// Result of the initial session lookup.
    pub fn session_resolved(&mut self, session: Option<Session>) {
        self.apply(session);
    }

    /// Identity-service event after start-up (sign in, sign out, refresh).
    pub fn auth_state_changed(&mut self, session: Option<Session>) {
        if matches!(self.state, AuthState::Loading) {
            tracing::debug!("Auth event received before initial session lookup finished");
        }
        self.apply(session);
    }

    /// Resolves the initial session and, when there is one, the user's
    /// profile. A failed profile lookup is logged and leaves the auth state
    /// as resolved.
    pub async fn load<I: IdentityService + ?Sized>(&mut self, identity: &I) -> Result<()> {
        match identity.current_session().await {
            Ok(Some(session)) => {
                match identity.user_profile(&session).await {
                    Ok(profile) => self.profile = profile,
                    Err(e) => tracing::warn!("⚠️ Error fetching user profile: {}", e),
                }
                self.session_resolved(Some(session));
                Ok(())
            }
            Ok(None) => {
                self.session_resolved(None);
                Ok(())
            }
            Err(e) => {
                // an unreachable identity service leaves the user signed out
                self.session_resolved(None);
                Err(e)
            }
        }
    }

    pub async fn sign_in<I: IdentityService + ?Sized>(
        &mut self,
        identity: &I,
        credentials: &Credentials,
    ) -> Result<()> {
        let session = identity
            .sign_in_with_password(&credentials.email, &credentials.password)
            .await?;
        tracing::info!("✅ Login successful for {}", credentials.email);
        self.auth_state_changed(Some(session));
        Ok(())
    }

    /// Registers a new account. Identity services that require e-mail
    /// confirmation return no session, so the store stays signed out.
    pub async fn sign_up<I: IdentityService + ?Sized>(
        &mut self,
        identity: &I,
        credentials: &Credentials,
    ) -> Result<()> {
        let session = identity
            .sign_up(&credentials.email, &credentials.password)
            .await?;
        tracing::info!("✅ Sign up successful for {}", credentials.email);
        if session.is_some() {
            self.auth_state_changed(session);
        }
        Ok(())
    }

    pub async fn sign_out<I: IdentityService + ?Sized>(&mut self, identity: &I) -> Result<()> {
        if let Some(session) = self.state.session() {
            identity.sign_out(session).await?;
            tracing::info!("Signed out successfully");
        }
        self.auth_state_changed(None);
        Ok(())
    }

    fn apply(&mut self, session: Option<Session>) {
        self.state = match session {
            Some(session) => {
                if self.profile.as_ref().is_some_and(|p| p.id != session.user_id) {
                    self.profile = None;
                }
                AuthState::Authenticated(session)
            }
            None => {
                self.profile = None;
                AuthState::Unauthenticated
            }
        };
    }
}
