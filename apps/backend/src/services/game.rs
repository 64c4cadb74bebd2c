//! Guess orchestration: mode registry, pool, selector and comparator
//! combined into the request-facing game operations.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::config::game::GameConfig;
use crate::domain::compare::{compare, Comparison};
use crate::domain::dex::sprite_url;
use crate::domain::modes::resolve_mode;
use crate::domain::selector::select_target;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::pokemon as pokemon_repo;
use crate::services::pool_cache::PoolCache;
use crate::utils::day_key;

/// Fixed search page size.
pub const SEARCH_PAGE_SIZE: u64 = 50;

/// Day/mode metadata the client needs before its first guess.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub day_key: String,
    pub mode: String,
    pub gens: Option<Vec<i16>>,
    pub tz: String,
}

/// Verdicts plus the guessed entry's display row, so the client renders the
/// attempt without a second lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredGuess {
    pub id: i32,
    pub name: String,
    pub sprite: String,
    #[serde(flatten)]
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub day_key: String,
    pub mode: String,
    pub comparison: ScoredGuess,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: i32,
    pub name: String,
    pub sprite: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub items: Vec<SearchItem>,
    pub has_more: bool,
    pub next_offset: u64,
}

/// Metadata for a (current day, mode) pair. Unknown modes resolve to
/// classic per the registry's permissive-default policy.
pub fn meta_for(mode_input: &str) -> Meta {
    let mode = resolve_mode(mode_input);
    Meta {
        day_key: day_key::current_day_key(),
        mode: mode.id.to_string(),
        gens: mode.gens.map(<[i16]>::to_vec),
        tz: day_key::DAY_TZ.to_string(),
    }
}

/// Score one guess against the day's target for the given mode.
///
/// Validation runs before any lookup; the guess lookup runs before the
/// comparator so a missing id surfaces as NotFound, never as a silent miss.
pub async fn resolve_guess(
    db: &DatabaseConnection,
    pools: &PoolCache,
    config: &GameConfig,
    guess_id: i32,
    day_key_input: &str,
    mode_input: &str,
) -> Result<GuessOutcome, DomainError> {
    if guess_id <= 0 {
        return Err(DomainError::validation(
            "guessId must be a positive integer",
        ));
    }
    let day = day_key_input.trim();
    if !day_key::is_valid_day_key(day) {
        return Err(DomainError::validation("dayKey must look like YYYY-MM-DD"));
    }

    let mode = resolve_mode(mode_input);
    let pool = pools.pool_for(db, mode).await?;
    let target_id = select_target(config.secret(), day, mode.id, &pool)?;

    let guess = pokemon_repo::require_pokemon(db, guess_id).await?;
    let target = pokemon_repo::require_pokemon(db, target_id)
        .await
        .map_err(|e| match e {
            // A pool id without a backing row is catalog corruption, not a
            // client error.
            DomainError::NotFound(..) => DomainError::infra(
                InfraErrorKind::Other("catalog".to_string()),
                format!("pool for mode '{}' references missing id {target_id}", mode.id),
            ),
            other => other,
        })?;

    let comparison = compare(&target, &guess);

    Ok(GuessOutcome {
        day_key: day.to_string(),
        mode: mode.id.to_string(),
        comparison: ScoredGuess {
            id: guess.id,
            sprite: sprite_url(guess.id),
            name: guess.name,
            comparison,
        },
    })
}

/// One page of autocomplete suggestions.
///
/// An empty needle returns an empty page without touching the catalog.
pub async fn search(
    db: &DatabaseConnection,
    q: &str,
    offset: u64,
) -> Result<SearchPage, DomainError> {
    let needle = q.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Ok(SearchPage {
            items: Vec::new(),
            has_more: false,
            next_offset: 0,
        });
    }

    let rows = pokemon_repo::search_by_prefix(db, &needle, offset, SEARCH_PAGE_SIZE).await?;
    let has_more = rows.len() as u64 == SEARCH_PAGE_SIZE;
    let next_offset = offset + rows.len() as u64;

    Ok(SearchPage {
        items: rows
            .into_iter()
            .map(|e| SearchItem {
                id: e.id,
                sprite: sprite_url(e.id),
                name: e.name,
            })
            .collect(),
        has_more,
        next_offset,
    })
}
