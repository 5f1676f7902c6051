//! cognis-api
//!
//! HTTP front end for the screening scorer. Runs on AWS Lambda through
//! `lambda_http`, or as a plain server when started outside Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use config::Config;

/// Build the application router.
pub fn app(config: &Config) -> Router {
    let origins = match &config.allowed_origins {
        Some(list) => AllowOrigin::list(list.iter().cloned()),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/predict", post(routes::predict::predict))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}
