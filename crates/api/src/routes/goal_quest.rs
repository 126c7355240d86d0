//! Route definitions for the `/goal-quests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::goal_quest;
use crate::state::AppState;

/// Routes mounted at `/goal-quests`.
///
/// ```text
/// GET    /                        -> list
/// GET    /category/{category}     -> get_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal_quest::list))
        .route("/category/{category}", get(goal_quest::get_by_category))
}
