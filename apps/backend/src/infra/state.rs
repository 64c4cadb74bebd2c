use std::env;
use std::sync::Arc;

use crate::config::db::{DbOwner, DbProfile};
use crate::config::game::GameConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::middleware::rate_limit::{MemoryRateLimitStore, RateLimitStore, RedisRateLimitStore};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    game: Option<GameConfig>,
    db_profile: Option<DbProfile>,
    rate_limit_store: Option<Arc<dyn RateLimitStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            game: None,
            db_profile: None,
            rate_limit_store: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = Some(game);
        self
    }

    pub fn with_rate_limit_store(mut self, store: Arc<dyn RateLimitStore>) -> Self {
        self.rate_limit_store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self.db_profile.ok_or_else(|| {
            AppError::config("StateBuilder requires a database profile".to_string())
        })?;

        let game = match self.game {
            Some(game) => game,
            None => GameConfig::from_env()?,
        };

        let store = match self.rate_limit_store {
            Some(store) => store,
            None => default_rate_limit_store().await?,
        };

        // single entrypoint: build + migrate
        let conn = bootstrap_db(profile, DbOwner::App).await?;
        Ok(AppState::new(conn, game, store))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

/// Redis when configured, else the per-process store.
///
/// The in-memory fallback under-enforces across multiple instances; scaled
/// deployments must set REDIS_URL.
async fn default_rate_limit_store() -> Result<Arc<dyn RateLimitStore>, AppError> {
    match env::var("REDIS_URL") {
        Ok(url) if !url.trim().is_empty() => {
            let store = RedisRateLimitStore::connect(url.trim()).await?;
            Ok(Arc::new(store))
        }
        _ => {
            tracing::warn!("REDIS_URL not set; using in-memory rate limiting (single instance only)");
            Ok(Arc::new(MemoryRateLimitStore::new()))
        }
    }
}
