use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{health, page, search};
use crate::state::AppState;

/// Builds the application router around the given collaborators.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/wikipedia/page", post(page::fetch_page))
        .route("/wikipedia/search", post(search::search_pages))
        .with_state(state)
}
