//! Route definitions for the `/roulette` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roulette;
use crate::state::AppState;

/// Routes mounted at `/roulette`.
///
/// ```text
/// POST   /{member_id}             -> play
/// GET    /{member_id}/today       -> played_today
/// GET    /{member_id}/history     -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{member_id}", post(roulette::play))
        .route("/{member_id}/today", get(roulette::played_today))
        .route("/{member_id}/history", get(roulette::history))
}
