//! Autocomplete search route.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::game;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    offset: Option<u64>,
}

/// GET /api/search?q=<prefix>&offset=<n>
///
/// Case-insensitive name-prefix page, fixed page size, ordered by id.
async fn get_search(
    app_state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let page = game::search(
        &app_state.db,
        query.q.as_deref().unwrap_or(""),
        query.offset.unwrap_or(0),
    )
    .await?;
    Ok(HttpResponse::Ok().json(page))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_search));
}
