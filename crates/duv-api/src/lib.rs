//! # duv-api - HTTP Surface for the DUV Store
//!
//! ## API Surface
//!
//! | Prefix                | Module                    |
//! |-----------------------|---------------------------|
//! | `/api/pessoas[/:id]`  | [`routes::people`]        |
//! | `/api/navios[/:id]`   | [`routes::ships`]         |
//! | `/api/duvs[/:id]`     | [`routes::declarations`]  |
//! | `/health/*`           | [`routes::health`]        |
//! | `/`                   | [`routes::ui`]            |
//!
//! ## Middleware Stack (outermost first)
//!
//! ```text
//! CorsLayer (permissive) → request id span → TraceLayer → body limit → Handler
//! ```
//!
//! Handlers parse ids and bodies once, then delegate to `duv_core` under a
//! single store lock. All errors become `{"code", "message"}` JSON bodies via
//! [`AppError`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;
pub use error::AppError;
pub use state::{AppState, HandlerSettings};

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::people::router())
        .merge(routes::ships::router())
        .merge(routes::declarations::router())
        .layer(DefaultBodyLimit::max(state.settings.body_limit_bytes))
        .with_state(state.clone());

    let health = routes::health::router().with_state(state);

    Router::new()
        .merge(routes::ui::router())
        .merge(health)
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id))
        .layer(CorsLayer::permissive())
}
