//! Cached per-mode pools of ordered catalog ids.
//!
//! Target selection needs the mode's full id list on every guess; the
//! catalog is append-only during normal operation, so the list is cached
//! per mode instead of queried per request. A stale pool within the TTL is
//! the same accepted edge case as a mid-day catalog change: the selector
//! simply re-derives against whatever pool it is handed.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sea_orm::DatabaseConnection;

use crate::domain::modes::ModeConfig;
use crate::errors::domain::DomainError;
use crate::repos::pokemon as pokemon_repo;

const POOL_TTL: Duration = Duration::from_secs(600);
// classic + gen1..gen9
const POOL_CAPACITY: u64 = 16;

#[derive(Clone)]
pub struct PoolCache {
    pools: Cache<&'static str, Arc<Vec<i32>>>,
}

impl PoolCache {
    pub fn new() -> Self {
        Self {
            pools: Cache::builder()
                .max_capacity(POOL_CAPACITY)
                .time_to_live(POOL_TTL)
                .build(),
        }
    }

    /// Ordered id pool for `mode`, loading through the catalog on a miss.
    ///
    /// An empty pool is cached like any other result: the error policy for
    /// it belongs to the selector, not the cache.
    pub async fn pool_for(
        &self,
        db: &DatabaseConnection,
        mode: ModeConfig,
    ) -> Result<Arc<Vec<i32>>, DomainError> {
        self.pools
            .try_get_with(mode.id, async {
                let ids = pokemon_repo::pool_ids(db, mode.gens).await?;
                Ok(Arc::new(ids))
            })
            .await
            .map_err(|e: Arc<DomainError>| (*e).clone())
    }

    /// Seed a mode's pool without touching the catalog (startup warm-up,
    /// tests).
    pub async fn prime(&self, mode_id: &'static str, ids: Vec<i32>) {
        self.pools.insert(mode_id, Arc::new(ids)).await;
    }

    /// Drop every cached pool (used after reseeding the catalog).
    pub fn invalidate_all(&self) {
        self.pools.invalidate_all();
    }
}

impl Default for PoolCache {
    fn default() -> Self {
        Self::new()
    }
}
