//! Catalog repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::pokemon_sea as pokemon_adapter;
use crate::domain::dex::{DexEntry, TYPE_SLOTS};
use crate::entities::pokemon;
use crate::errors::domain::DomainError;

impl From<pokemon::Model> for DexEntry {
    fn from(m: pokemon::Model) -> Self {
        DexEntry {
            id: m.id,
            name: m.name,
            gen: m.gen,
            height_dm: m.height_dm,
            weight_hg: m.weight_hg,
            types: normalize_types(m.types),
            habitat: m.habitat,
            color: m.color,
            evolution_stage: m.evolution_stage,
        }
    }
}

/// Enforce the type-slot invariant on stored labels: at most two distinct
/// lowercase labels in source slot order, "none" and blanks dropped.
fn normalize_types(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(TYPE_SLOTS);
    for label in raw {
        let label = label.trim().to_ascii_lowercase();
        if label.is_empty() || label == "none" || out.contains(&label) {
            continue;
        }
        out.push(label);
        if out.len() == TYPE_SLOTS {
            break;
        }
    }
    out
}

// Free functions (generic) mirroring the adapter surface

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<DexEntry>, DomainError> {
    let row = pokemon_adapter::find_by_id(conn, id).await?;
    Ok(row.map(DexEntry::from))
}

/// Find a catalog entry by ID or return a domain NotFound.
pub async fn require_pokemon<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<DexEntry, DomainError> {
    let row = pokemon_adapter::require_pokemon(conn, id).await?;
    Ok(DexEntry::from(row))
}

/// One page of name-prefix matches, ascending by id.
pub async fn search_by_prefix<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    prefix: &str,
    offset: u64,
    limit: u64,
) -> Result<Vec<DexEntry>, DomainError> {
    let rows = pokemon_adapter::search_by_prefix(conn, prefix, offset, limit).await?;
    Ok(rows.into_iter().map(DexEntry::from).collect())
}

/// Ascending id pool for a mode filter.
pub async fn pool_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gens: Option<&[i16]>,
) -> Result<Vec<i32>, DomainError> {
    Ok(pokemon_adapter::pool_ids(conn, gens).await?)
}

/// Catalog size under a mode filter.
pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gens: Option<&[i16]>,
) -> Result<u64, DomainError> {
    Ok(pokemon_adapter::count(conn, gens).await?)
}
