//! Handlers for the `/members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moguri_core::pagination::PageRequest;
use moguri_core::types::DbId;
use moguri_db::models::member::MemberResponse;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::response::{ApiResponse, Page};
use crate::services::member::{CottonCandyUpdate, MemberChanges, NewMember};
use crate::services::MemberService;
use crate::state::AppState;

/// GET /api/members?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> AppResult<Json<ApiResponse<Page<MemberResponse>>>> {
    let page = page.validated()?;
    let (members, total) = MemberService::list(&state.pool, page).await?;
    let items = members.into_iter().map(MemberResponse::from).collect();
    Ok(Json(ApiResponse::of(Page::of(page, total, items))))
}

/// POST /api/members
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewMember>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    MemberService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success())))
}

/// GET /api/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<MemberResponse>>> {
    let member = MemberService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::of(member.into())))
}

/// PATCH /api/members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<MemberChanges>,
) -> AppResult<Json<ApiResponse<()>>> {
    MemberService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::success()))
}

/// DELETE /api/members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    MemberService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::success()))
}

/// GET /api/members/{id}/cotton-candy
pub async fn get_cotton_candy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<i32>>> {
    let balance = MemberService::get_cotton_candy(&state.pool, id).await?;
    Ok(Json(ApiResponse::of(balance)))
}

/// PATCH /api/members/{id}/cotton-candy
///
/// Overwrites the balance with the supplied value.
pub async fn update_cotton_candy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<CottonCandyUpdate>,
) -> AppResult<Json<ApiResponse<()>>> {
    MemberService::update_cotton_candy(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::success()))
}
