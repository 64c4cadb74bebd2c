//! Game metadata route.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::game;

#[derive(Debug, Deserialize)]
struct MetaQuery {
    #[serde(default)]
    mode: Option<String>,
}

/// GET /api/meta?mode=<id>
///
/// Current day key plus the resolved mode config. Pure computation; no
/// catalog access and no per-client state, so it sits outside the rate
/// limiter.
async fn get_meta(query: web::Query<MetaQuery>) -> Result<HttpResponse, AppError> {
    let meta = game::meta_for(query.mode.as_deref().unwrap_or(""));
    Ok(HttpResponse::Ok()
        .insert_header(("cache-control", "no-store"))
        .json(meta))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_meta));
}
