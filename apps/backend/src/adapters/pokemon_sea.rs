//! SeaORM adapter for the catalog - generic over ConnectionTrait.
//!
//! The catalog is read-only during normal operation; everything here is a
//! plain query. Adapter functions return DbErr; the repos layer maps to
//! DomainError via From<DbErr>.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::pokemon;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<pokemon::Model>, sea_orm::DbErr> {
    pokemon::Entity::find_by_id(id).one(conn).await
}

/// Find a catalog row by ID or return RecordNotFound.
///
/// Convenience helper that converts `None` into DbErr::RecordNotFound,
/// eliminating the repetitive `ok_or_else` pattern when a row must exist.
pub async fn require_pokemon<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<pokemon::Model, sea_orm::DbErr> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("Pokemon {id} not found")))
}

/// Case-insensitive prefix page over names, ordered by id.
///
/// Names are stored lowercase; callers lowercase the needle. LIKE
/// metacharacters in the needle are escaped so they match literally.
pub async fn search_by_prefix<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    prefix: &str,
    offset: u64,
    limit: u64,
) -> Result<Vec<pokemon::Model>, sea_orm::DbErr> {
    let escaped = escape_like(prefix);
    pokemon::Entity::find()
        .filter(pokemon::Column::Name.like(format!("{escaped}%")))
        .order_by_asc(pokemon::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

/// Ordered id pool for a mode filter; `gens: None` selects the whole catalog.
pub async fn pool_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gens: Option<&[i16]>,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    let mut query = pokemon::Entity::find()
        .select_only()
        .column(pokemon::Column::Id)
        .order_by_asc(pokemon::Column::Id);

    if let Some(gens) = gens {
        query = query.filter(pokemon::Column::Gen.is_in(gens.iter().copied()));
    }

    query.into_tuple::<i32>().all(conn).await
}

/// Catalog size under a mode filter.
pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gens: Option<&[i16]>,
) -> Result<u64, sea_orm::DbErr> {
    let mut query = pokemon::Entity::find();
    if let Some(gens) = gens {
        query = query.filter(pokemon::Column::Gen.is_in(gens.iter().copied()));
    }
    query.count(conn).await
}

fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
