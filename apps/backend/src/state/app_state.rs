use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::game::GameConfig;
use crate::middleware::rate_limit::{MemoryRateLimitStore, RateLimitStore};
use crate::services::pool_cache::PoolCache;

/// Application state containing shared resources
pub struct AppState {
    /// Read-only catalog connection
    pub db: DatabaseConnection,
    /// Game settings including the selection secret
    pub game: Arc<GameConfig>,
    /// Injected rate-limit counter store
    pub rate_limiter: Arc<dyn RateLimitStore>,
    /// Cached per-mode id pools
    pub pools: PoolCache,
}

impl AppState {
    /// Create a new AppState with the given connection, game config and
    /// rate-limit store
    pub fn new(
        db: DatabaseConnection,
        game: GameConfig,
        rate_limiter: Arc<dyn RateLimitStore>,
    ) -> Self {
        Self {
            db,
            game: Arc::new(game),
            rate_limiter,
            pools: PoolCache::new(),
        }
    }

    /// Test state over any connection (mock or real) with an in-memory
    /// rate-limit store and fixed game settings
    pub fn for_tests(db: DatabaseConnection) -> Self {
        use crate::config::game::RateLimitSettings;

        Self::new(
            db,
            GameConfig::new("test-secret".to_string(), 15, RateLimitSettings::default()),
            Arc::new(MemoryRateLimitStore::new()),
        )
    }
}
