//! Deterministic daily target selection.
//!
//! The target for one (day, mode) cycle is never stored: every request
//! re-derives it from the server secret, the day key, the mode id and the
//! mode's ordered id pool. Same inputs, same target, across processes and
//! restarts.

use crate::errors::domain::DomainError;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over a byte string.
///
/// The selection contract pins this exact hash: it depends only on the seed
/// string's bytes, never on container iteration order or addresses.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Seed string for one (day, mode) cycle.
///
/// The mode id is embedded so different modes on the same day get
/// independent targets even over overlapping pools.
fn seed(secret: &str, day_key: &str, mode_id: &str) -> String {
    format!("{secret}:{day_key}|{mode_id}")
}

/// Pick the daily target id from `pool`.
///
/// `pool` must hold the mode's entity ids in ascending id order; selection
/// reduces the seed hash modulo the pool length. An empty pool is a
/// configuration error, never a silent fallback to the full catalog.
///
/// Stateless by design: if the pool changes mid-day the selected target may
/// change with it.
pub fn select_target(
    secret: &str,
    day_key: &str,
    mode_id: &str,
    pool: &[i32],
) -> Result<i32, DomainError> {
    if pool.is_empty() {
        return Err(DomainError::empty_pool(mode_id));
    }
    let hash = fnv1a_32(seed(secret, day_key, mode_id).as_bytes());
    let idx = (hash as usize) % pool.len();
    Ok(pool[idx])
}
