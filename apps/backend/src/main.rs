use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::game::GameConfig;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::rate_limit::RateLimit;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::security_headers::SecurityHeaders;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Pokedle+ Backend on http://{}:{}", host, port);

    // Missing/empty secret is fatal here, never defaulted
    let game = match GameConfig::from_env() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Create application state using unified builder
    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_game(game)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    let rate_limit = RateLimit::new(app_state.rate_limiter.clone(), app_state.game.rate_limit);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/api/search")
                    .wrap(rate_limit.clone())
                    .configure(routes::search::configure_routes),
            )
            .service(
                web::scope("/api/guess")
                    .wrap(rate_limit.clone())
                    .configure(routes::guess::configure_routes),
            )
            .service(web::scope("/api/meta").configure(routes::meta::configure_routes))
            .service(web::scope("/api/pokemon").configure(routes::pokemon::configure_routes))
            .service(web::scope("/health").configure(routes::health::configure_routes))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
