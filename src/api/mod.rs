use axum::{Router, routing::get};
use std::path::Path;
use tower_http::services::ServeDir;

pub mod handlers;
pub mod models;

pub use models::AppState;

pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/search", get(handlers::search_handler))
        .with_state(state)
        // Static assets for the rendered pages
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
}
