//! HTTP route handlers.

pub mod health;
pub mod menu;

use axum::Router;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(menu::router())
        .merge(health::router())
        .with_state(state)
}
