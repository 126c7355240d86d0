//! Route definitions for the `/members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PATCH  /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/cotton-candy   -> get_cotton_candy
/// PATCH  /{id}/cotton-candy   -> update_cotton_candy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(member::list).post(member::create))
        .route(
            "/{id}",
            get(member::get_by_id)
                .patch(member::update)
                .delete(member::delete),
        )
        .route(
            "/{id}/cotton-candy",
            get(member::get_cotton_candy).patch(member::update_cotton_candy),
        )
}
