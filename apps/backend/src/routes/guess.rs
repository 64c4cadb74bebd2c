//! Guess scoring route.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::game;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    #[serde(default)]
    pub guess_id: Option<i32>,
    #[serde(default)]
    pub day_key: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// POST /api/guess
///
/// Scores one guess against the daily target of the requested mode. The
/// target is re-derived per call and never echoed back; only the guessed
/// row and its verdicts leave the server.
async fn post_guess(
    app_state: web::Data<AppState>,
    body: ValidatedJson<GuessRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    let guess_id = req.guess_id.ok_or_else(|| {
        AppError::invalid(ErrorCode::InvalidInput, "guessId is required".to_string())
    })?;
    let day_key = req.day_key.unwrap_or_default();
    let mode = req.mode.unwrap_or_default();

    let outcome = game::resolve_guess(
        &app_state.db,
        &app_state.pools,
        &app_state.game,
        guess_id,
        &day_key,
        &mode,
    )
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header(("cache-control", "no-store"))
        .json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(post_guess));
}
