//! Error codes for the Pokedle+ backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Pokedle+ backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in the `code` field of problem-details responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Missing or malformed guess id / day key
    InvalidInput,
    /// Malformed entity id in the path
    InvalidId,
    /// A mode filter yielded zero catalog entries
    EmptyPool,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Guessed entity id not present in the catalog
    PokemonNotFound,
    /// General not found error
    NotFound,

    // Throttling
    /// Per-client request budget exhausted
    RateLimitExceeded,

    // System Errors
    /// Database error
    DbError,
    /// Configuration error (e.g. missing secret)
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidId => "INVALID_ID",
            Self::EmptyPool => "EMPTY_POOL",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::PokemonNotFound => "POKEMON_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Throttling
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
