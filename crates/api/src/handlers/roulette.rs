//! Handlers for the `/roulette` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moguri_core::pagination::PageRequest;
use moguri_core::types::DbId;
use moguri_db::models::roulette::Roulette;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::response::{ApiResponse, Page};
use crate::services::RouletteService;
use crate::state::AppState;

/// Payload for `GET /roulette/{member_id}/today`.
#[derive(Debug, Serialize)]
pub struct PlayedToday {
    pub played: bool,
}

/// GET /api/roulette/{member_id}/today
pub async fn played_today(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<PlayedToday>>> {
    let played = RouletteService::has_played_roulette_today(&state.pool, member_id).await?;
    Ok(Json(ApiResponse::of(PlayedToday { played })))
}

/// POST /api/roulette/{member_id}
///
/// 409 if the member already played during the current service day.
pub async fn play(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<ApiResponse<Roulette>>)> {
    let play = RouletteService::play(&state.pool, member_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::of(play))))
}

/// GET /api/roulette/{member_id}/history?page=&limit=
pub async fn history(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> AppResult<Json<ApiResponse<Page<Roulette>>>> {
    let page = page.validated()?;
    let (plays, total) = RouletteService::history(&state.pool, member_id, page).await?;
    Ok(Json(ApiResponse::of(Page::of(page, total, plays))))
}
