//! Handlers for the `/goal-quests` resource.

use axum::extract::{Path, State};
use axum::Json;
use moguri_core::pagination::PageRequest;
use moguri_db::models::goal_quest::GoalQuest;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::response::{ApiResponse, Page};
use crate::services::GoalQuestService;
use crate::state::AppState;

/// GET /api/goal-quests?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> AppResult<Json<ApiResponse<Page<GoalQuest>>>> {
    let page = page.validated()?;
    let (quests, total) = GoalQuestService::list(&state.pool, page).await?;
    Ok(Json(ApiResponse::of(Page::of(page, total, quests))))
}

/// GET /api/goal-quests/category/{category}
pub async fn get_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse<GoalQuest>>> {
    let quest = GoalQuestService::get_by_category(&state.pool, &category).await?;
    Ok(Json(ApiResponse::of(quest)))
}
