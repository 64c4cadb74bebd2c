//! Catalog row lookup, used to enrich a scored guess into a display row.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::pokemon as pokemon_repo;
use crate::state::app_state::AppState;

/// GET /api/pokemon/{id}
///
/// Full attribute row for one catalog id. Rows are immutable, so the
/// response is publicly cacheable for a day.
async fn get_pokemon(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let id: i32 = raw
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            AppError::invalid(ErrorCode::InvalidId, format!("'{raw}' is not a catalog id"))
        })?;

    let entry = pokemon_repo::require_pokemon(&app_state.db, id).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("cache-control", "public, max-age=86400"))
        .json(entry))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{id}", web::get().to(get_pokemon));
}
