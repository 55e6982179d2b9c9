use std::time::Duration;

use anyhow::Context;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use stk_store::SessionStore;

use crate::config::{ApiConfig, Environment};

/// Shared application state.
///
/// The session store replaces the database pool a persistent backend would
/// carry here; everything else is auth/cookie plumbing derived from the
/// configuration.
#[derive(Clone)]
pub struct ApiState {
    /// All live sessions
    pub sessions: SessionStore,
    /// Secret for signing session JWTs
    pub jwt_secret: String,
    /// Lifetime of a session token in hours
    pub jwt_expiry_hours: i64,
    /// Key for the private cookie jar
    pub cookie_key: Key,
    /// Deployment environment
    pub environment: Environment,
    /// Simulated login delay; zero in tests
    pub login_delay: Duration,
}

impl ApiState {
    /// Build the state from configuration.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let cookie_key = Key::try_from(config.cookie_secret.as_bytes())
            .context("COOKIE_SECRET must be at least 64 bytes")?;

        Ok(Self {
            sessions: SessionStore::new(),
            jwt_secret: config.jwt_secret,
            jwt_expiry_hours: config.jwt_expiry_hours,
            cookie_key,
            environment: config.env,
            login_delay: Duration::from_millis(config.login_delay_ms),
        })
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key has no Debug impl and the secrets should stay out of logs anyway
        f.debug_struct("ApiState")
            .field("sessions", &self.sessions)
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("environment", &self.environment)
            .field("login_delay", &self.login_delay)
            .finish_non_exhaustive()
    }
}

/// JWT verification settings for the [`crate::auth::AuthUser`] extractor.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Secret for verifying session JWTs
    pub jwt_secret: String,
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        Self {
            jwt_secret: state.jwt_secret.clone(),
        }
    }
}

impl FromRef<ApiState> for Key {
    fn from_ref(state: &ApiState) -> Self {
        state.cookie_key.clone()
    }
}
