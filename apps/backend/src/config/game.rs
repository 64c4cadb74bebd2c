//! Game configuration from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::config::db::must_var;
use crate::error::AppError;

use crate::domain::session::DEFAULT_MAX_ATTEMPTS;

const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Rate-limit policy applied to the search/guess entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub limit: u32,
    pub window: Duration,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

/// Server-side game settings.
///
/// The selection secret is read once here and only ever handed to the
/// selector; it must never reach a response body or a log line.
#[derive(Clone)]
pub struct GameConfig {
    secret: String,
    pub max_attempts: u32,
    pub rate_limit: RateLimitSettings,
}

impl GameConfig {
    pub fn new(secret: String, max_attempts: u32, rate_limit: RateLimitSettings) -> Self {
        Self {
            secret,
            max_attempts,
            rate_limit,
        }
    }

    /// Read configuration from the environment.
    ///
    /// A missing or empty `POKEDLE_SECRET` is a configuration error; the
    /// caller treats it as fatal at startup rather than defaulting.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = must_var("POKEDLE_SECRET")?;
        if secret.trim().is_empty() {
            return Err(AppError::config(
                "POKEDLE_SECRET must not be empty".to_string(),
            ));
        }

        let max_attempts = parsed_var("MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        let limit = parsed_var("RATE_LIMIT_MAX_REQUESTS", DEFAULT_RATE_LIMIT_MAX_REQUESTS)?;
        let window_secs = parsed_var("RATE_LIMIT_WINDOW_SECS", DEFAULT_RATE_LIMIT_WINDOW_SECS)?;

        Ok(Self::new(
            secret,
            max_attempts,
            RateLimitSettings {
                limit,
                window: Duration::from_secs(window_secs),
            },
        ))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameConfig")
            .field("secret", &"<redacted>")
            .field("max_attempts", &self.max_attempts)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

/// Optional numeric env var with a default; unparseable values are a
/// configuration error, not a silent fallback.
fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' is not a valid number"))
        }),
    }
}
