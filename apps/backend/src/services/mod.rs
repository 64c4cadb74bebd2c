pub mod game;
pub mod pool_cache;
