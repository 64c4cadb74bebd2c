//! Centralized request rate limiting for the search/guess entry points.
//!
//! The sliding-window counter lives behind an injected [`RateLimitStore`]:
//! Redis when the deployment runs more than one stateless instance, the
//! in-memory store for single-instance setups and tests. Independent
//! per-process counters would under-enforce the limit behind a load
//! balancer; the shared store closes that gap.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error as ActixError;
use async_trait::async_trait;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use parking_lot::Mutex;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::game::RateLimitSettings;
use crate::error::AppError;
use crate::extractors::client_ip::client_ip;

/// Outcome of counting one hit against a client's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub limit: u32,
    pub count: u32,
    pub reset_at: OffsetDateTime,
}

impl RateLimitInfo {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }

    pub fn exceeded(&self) -> bool {
        self.count > self.limit
    }
}

/// Shared counter store behind the limiter.
///
/// `hit` counts one request for `key`, creating or rolling the fixed window
/// as needed, and reports the post-increment count plus the window's reset
/// instant. Implementations must be safe under concurrent callers.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    async fn hit(
        &self,
        key: &str,
        window: Duration,
        limit: u32,
    ) -> Result<RateLimitInfo, AppError>;
}

fn window_end(now: OffsetDateTime, window: Duration) -> OffsetDateTime {
    now + time::Duration::milliseconds(window.as_millis() as i64)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

struct WindowEntry {
    count: u32,
    reset_at: OffsetDateTime,
}

/// Per-process fallback store.
///
/// Correct only for a single instance; multi-instance deployments must use
/// the Redis store.
#[derive(Default)]
pub struct MemoryRateLimitStore {
    entries: Mutex<HashMap<String, WindowEntry>>,
}

/// Expired entries are swept once the map grows past this size.
const CLEANUP_THRESHOLD: usize = 1000;

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for MemoryRateLimitStore {
    async fn hit(
        &self,
        key: &str,
        window: Duration,
        limit: u32,
    ) -> Result<RateLimitInfo, AppError> {
        let now = OffsetDateTime::now_utc();
        let mut entries = self.entries.lock();

        if entries.len() > CLEANUP_THRESHOLD {
            entries.retain(|_, e| e.reset_at > now);
        }

        let entry = entries.entry(key.to_string()).or_insert(WindowEntry {
            count: 0,
            reset_at: window_end(now, window),
        });
        if now >= entry.reset_at {
            entry.count = 0;
            entry.reset_at = window_end(now, window);
        }
        entry.count += 1;

        Ok(RateLimitInfo {
            limit,
            count: entry.count,
            reset_at: entry.reset_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Redis store
// ---------------------------------------------------------------------------

/// Shared store over Redis; one counter key per client with the window as
/// its TTL, so every instance sees the same budget.
#[derive(Clone)]
pub struct RedisRateLimitStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisRateLimitStore {
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(url)
            .map_err(|e| AppError::config(format!("invalid REDIS_URL: {e}")))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| AppError::internal(format!("redis connect failed: {e}")))?;
        Ok(Self { conn })
    }

    fn redis_key(key: &str) -> String {
        format!("ratelimit:{key}")
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimitStore {
    async fn hit(
        &self,
        key: &str,
        window: Duration,
        limit: u32,
    ) -> Result<RateLimitInfo, AppError> {
        let mut conn = self.conn.clone();
        let redis_key = Self::redis_key(key);
        let window_ms = window.as_millis() as u64;

        let count: u32 = redis::cmd("INCR")
            .arg(&redis_key)
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::internal(format!("redis INCR failed: {e}")))?;

        // First hit in a window owns the TTL.
        if count == 1 {
            let _: () = redis::cmd("PEXPIRE")
                .arg(&redis_key)
                .arg(window_ms)
                .query_async(&mut conn)
                .await
                .map_err(|e| AppError::internal(format!("redis PEXPIRE failed: {e}")))?;
        }

        let ttl_ms: i64 = redis::cmd("PTTL")
            .arg(&redis_key)
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::internal(format!("redis PTTL failed: {e}")))?;
        let ttl_ms = if ttl_ms > 0 { ttl_ms as u64 } else { window_ms };

        Ok(RateLimitInfo {
            limit,
            count,
            reset_at: window_end(
                OffsetDateTime::now_utc(),
                Duration::from_millis(ttl_ms),
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

/// Rate-limiting transform for a scope.
///
/// Rejections materialize as 429 problem-details responses with the
/// retry-after hint; accepted requests still get the `x-ratelimit-*`
/// budget headers.
#[derive(Clone)]
pub struct RateLimit {
    store: Arc<dyn RateLimitStore>,
    settings: RateLimitSettings,
}

impl RateLimit {
    pub fn new(store: Arc<dyn RateLimitStore>, settings: RateLimitSettings) -> Self {
        Self { store, settings }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            store: self.store.clone(),
            settings: self.settings,
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    store: Arc<dyn RateLimitStore>,
    settings: RateLimitSettings,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let store = self.store.clone();
        let settings = self.settings;

        Box::pin(async move {
            let key = client_ip(&req);

            let info = match store.hit(&key, settings.window, settings.limit).await {
                Ok(info) => info,
                Err(err) => {
                    // Store failures answer with their mapped problem response
                    let res = err.error_response();
                    return Ok(req.into_response(res).map_into_right_body());
                }
            };

            if info.exceeded() {
                let res = AppError::rate_limited(info.limit, info.remaining(), info.reset_at)
                    .error_response();
                return Ok(req.into_response(res).map_into_right_body());
            }

            let mut res = service.call(req).await?.map_into_left_body();

            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                budget_header(info.limit.to_string()),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                budget_header(info.remaining().to_string()),
            );
            if let Ok(reset) = info.reset_at.format(&Rfc3339) {
                headers.insert(
                    HeaderName::from_static("x-ratelimit-reset"),
                    budget_header(reset),
                );
            }

            Ok(res)
        })
    }
}

fn budget_header(value: String) -> HeaderValue {
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("invalid"))
}
