//! Route definitions for the `/goal` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::goal;
use crate::state::AppState;

/// Routes mounted at `/goal`.
///
/// ```text
/// POST   /                    -> create
/// GET    /list/{member_id}    -> list_by_member
/// GET    /{id}                -> get_by_id
/// PATCH  /{id}                -> update
/// DELETE /{id}                -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(goal::create))
        .route("/list/{member_id}", get(goal::list_by_member))
        .route(
            "/{id}",
            get(goal::get_by_id).patch(goal::update).delete(goal::delete),
        )
}
