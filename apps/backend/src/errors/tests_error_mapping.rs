// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation("guessId must be a positive integer");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidInput);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_empty_pool_to_400() {
    let de = DomainError::empty_pool("gen9");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "EMPTY_POOL");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Pokemon, "no such pokemon");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "POKEMON_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let other = DomainError::not_found(NotFoundKind::Other("sprite".into()), "no sprite");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_config_to_500() {
    let de = DomainError::config("POKEDLE_SECRET is not set");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_infra() {
    let db = DomainError::infra(InfraErrorKind::Db, "connection refused");
    let app: AppError = db.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_db_err_record_not_found() {
    let de: DomainError = sea_orm::DbErr::RecordNotFound("Pokemon not found".into()).into();
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::PokemonNotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn rate_limited_is_429() {
    let reset = time::OffsetDateTime::now_utc() + time::Duration::seconds(30);
    let app = AppError::rate_limited(30, 0, reset);
    assert_eq!(app.code(), ErrorCode::RateLimitExceeded);
    assert_eq!(app.status().as_u16(), 429);

    let hint = AppError::retry_after_secs(reset);
    assert!((0..=30).contains(&hint));
}
