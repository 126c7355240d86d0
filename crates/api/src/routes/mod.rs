pub mod goal;
pub mod goal_quest;
pub mod health;
pub mod member;
pub mod roulette;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /members                                  list, create
/// /members/{id}                             get, update, delete
/// /members/{id}/cotton-candy                get, overwrite balance
///
/// /goal                                     create
/// /goal/list/{member_id}                    member's goals (paged)
/// /goal/{goal_id}                           get, update, delete
///
/// /goal-quests                              list (paged)
/// /goal-quests/category/{category}          quest suggested for a category
///
/// /roulette/{member_id}                     play today's spin (POST)
/// /roulette/{member_id}/today               has the member played today
/// /roulette/{member_id}/history             past plays (paged)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member::router())
        .nest("/goal", goal::router())
        .nest("/goal-quests", goal_quest::router())
        .nest("/roulette", roulette::router())
}
