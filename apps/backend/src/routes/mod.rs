use actix_web::web;

pub mod guess;
pub mod health;
pub mod meta;
pub mod pokemon;
pub mod search;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under scopes with additional
/// middleware (rate limiting on the search/guess entry points). For tests
/// we register the same paths without those wrappers so that endpoint
/// behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game metadata: /api/meta
    cfg.service(web::scope("/api/meta").configure(meta::configure_routes));

    // Autocomplete: /api/search
    cfg.service(web::scope("/api/search").configure(search::configure_routes));

    // Guess scoring: /api/guess
    cfg.service(web::scope("/api/guess").configure(guess::configure_routes));

    // Catalog rows: /api/pokemon/{id}
    cfg.service(web::scope("/api/pokemon").configure(pokemon::configure_routes));
}
