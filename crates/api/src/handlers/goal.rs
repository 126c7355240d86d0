//! Handlers for the `/goal` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moguri_core::pagination::PageRequest;
use moguri_core::types::DbId;
use moguri_db::models::goal::Goal;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::response::{ApiResponse, Page};
use crate::services::goal::{GoalChanges, NewGoal};
use crate::services::GoalService;
use crate::state::AppState;

/// GET /api/goal/list/{member_id}?page=&limit=
///
/// `totalCount` is the member's full goal count, not the size of this page.
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> AppResult<Json<ApiResponse<Page<Goal>>>> {
    let page = page.validated()?;
    let (goals, total) = GoalService::list_by_member(&state.pool, member_id, page).await?;
    Ok(Json(ApiResponse::of(Page::of(page, total, goals))))
}

/// GET /api/goal/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Goal>>> {
    let goal = GoalService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::of(goal)))
}

/// POST /api/goal
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewGoal>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    GoalService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success())))
}

/// PATCH /api/goal/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<GoalChanges>,
) -> AppResult<Json<ApiResponse<()>>> {
    GoalService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::success()))
}

/// DELETE /api/goal/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    GoalService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::success()))
}
