use std::env;

/// Deployment environment, parsed from the `ENVIRONMENT` variable.
///
/// Drives cookie security (HTTP cookies are allowed only in development) and
/// the log format picked by [`crate::tracing::init_tracing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development: HTTP cookies, pretty logs
    Development,
    /// Deployed: HTTPS-only cookies, JSON logs
    Production,
}

impl Environment {
    /// Whether this is a development environment.
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// API configuration loaded from environment variables.
///
/// `JWT_SECRET` and `COOKIE_SECRET` are required; everything else has a
/// development default. `COOKIE_SECRET` must be at least 64 bytes (enforced
/// when the cookie key is built in [`crate::state::ApiState::new`]).
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Secret for signing session JWTs
    pub jwt_secret: String,
    /// Secret for the private cookie jar
    pub cookie_secret: String,
    /// Origin allowed by CORS
    pub frontend_url: String,
    /// Lifetime of a session token in hours
    pub jwt_expiry_hours: i64,
    /// Simulated login delay in milliseconds; the login form's fake
    /// round-trip, kept configurable so tests can set it to 0
    pub login_delay_ms: u64,
    /// Deployment environment
    pub env: Environment,
}

impl ApiConfig {
    /// Load the configuration from environment variables.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            jwt_secret: env::var("JWT_SECRET")?,
            cookie_secret: env::var("COOKIE_SECRET")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            login_delay_ms: env::var("LOGIN_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            env: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
        })
    }
}
