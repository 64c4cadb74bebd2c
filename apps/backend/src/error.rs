use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Rate limit exceeded")]
    RateLimited {
        limit: u32,
        remaining: u32,
        reset_at: OffsetDateTime,
    },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Error code for any variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::RateLimited { .. } => ErrorCode::RateLimitExceeded,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Detail string as sent to the client.
    ///
    /// Configuration errors carry env/secret names internally; clients only
    /// ever see a generic message (the full detail goes to the server log).
    fn client_detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::RateLimited { .. } => {
                "Too many requests. Please try again later.".to_string()
            }
            AppError::Db { detail, .. } => detail.clone(),
            AppError::Config { .. } => "Server configuration error".to_string(),
            AppError::Internal { detail, .. } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn rate_limited(limit: u32, remaining: u32, reset_at: OffsetDateTime) -> Self {
        Self::RateLimited {
            limit,
            remaining,
            reset_at,
        }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    /// Seconds until the rate-limit window resets (0 if already past).
    pub fn retry_after_secs(reset_at: OffsetDateTime) -> i64 {
        let now = OffsetDateTime::now_utc();
        (reset_at - now).whole_seconds().max(0)
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::invalid(ErrorCode::InvalidInput, detail),
            DomainError::EmptyPool { mode } => AppError::invalid(
                ErrorCode::EmptyPool,
                format!("Mode '{mode}' matches no catalog entries"),
            ),
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Pokemon => ErrorCode::PokemonNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Config(detail) => AppError::config(detail),
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Db => AppError::db(detail),
                InfraErrorKind::Other(_) => AppError::internal(detail),
            },
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().to_string();
        let detail = self.client_detail();
        let trace_id = trace_ctx::trace_id();

        if let AppError::Config { detail } = self {
            // Full detail is server-side only
            tracing::error!(trace_id = %trace_id, detail = %detail, "configuration error");
        }

        let problem_details = ProblemDetails {
            type_: format!("https://pokedle.app/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));

        if let AppError::RateLimited {
            limit,
            remaining,
            reset_at,
        } = self
        {
            builder.insert_header((
                "retry-after",
                Self::retry_after_secs(*reset_at).to_string(),
            ));
            builder.insert_header(("x-ratelimit-limit", limit.to_string()));
            builder.insert_header(("x-ratelimit-remaining", remaining.to_string()));
            if let Ok(reset) = reset_at.format(&Rfc3339) {
                builder.insert_header(("x-ratelimit-reset", reset));
            }
        }

        builder.json(problem_details)
    }
}
