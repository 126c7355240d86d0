//! Shared response envelope types for API handlers.
//!
//! Every successful response is wrapped as `{ "code": "SUCCESS", "data": ... }`.
//! Errors use `{ "code": ..., "error": ... }` (see [`crate::error::AppError`]).
//! List endpoints put a [`Page`] in `data`.

use moguri_core::pagination::PageRequest;
use serde::Serialize;

/// Result code carried by every successful response.
pub const SUCCESS_CODE: &str = "SUCCESS";

/// Standard `{ "code": ..., "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::of(member)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: &'static str,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn of(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload (`"data": null`).
    pub fn success() -> Self {
        Self {
            code: SUCCESS_CODE,
            data: None,
        }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T: Serialize> {
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

impl<T: Serialize> Page<T> {
    pub fn of(request: PageRequest, total_count: i64, items: Vec<T>) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total_count,
            total_pages: request.total_pages(total_count),
            items,
        }
    }
}
