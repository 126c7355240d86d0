//! Page/limit pagination rules shared by every list endpoint.
//!
//! Clients send `?page=&limit=` where `page` is zero-based. Requests outside
//! the allowed window are rejected before any query reaches the store.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Page used when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 0;

/// Page size used when the client omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 30;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A validated-on-demand pagination request (`?page=&limit=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    #[validate(range(min = 0, message = "page must be greater than or equal to 0"))]
    pub page: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Check the request against the allowed window, returning it unchanged
    /// when valid.
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate()?;
        Ok(self)
    }

    /// Row offset for SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.limit)
    }

    /// Number of pages needed to hold `total_count` rows at this page size.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if self.limit <= 0 || total_count <= 0 {
            return 0;
        }
        (total_count + self.limit - 1) / self.limit
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_are_first_page_of_thirty() {
        let req = PageRequest::default();
        assert_eq!(req.page, 0);
        assert_eq!(req.limit, 30);
        assert!(req.validated().is_ok());
    }

    #[test]
    fn boundaries_are_accepted() {
        assert!(PageRequest::new(0, 1).validated().is_ok());
        assert!(PageRequest::new(7, MAX_PAGE_LIMIT).validated().is_ok());
    }

    #[test]
    fn limit_over_max_is_rejected() {
        let result = PageRequest::new(0, MAX_PAGE_LIMIT + 1).validated();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("limit"));
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert_matches!(
            PageRequest::new(0, 0).validated(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn negative_page_is_rejected() {
        let result = PageRequest::new(-1, 10).validated();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("page"));
    }

    #[test]
    fn both_violations_are_reported() {
        let result = PageRequest::new(-1, 500).validated();
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg.contains("page") && msg.contains("limit")
        );
    }

    #[test]
    fn offset_is_page_times_limit() {
        assert_eq!(PageRequest::new(0, 30).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        let req = PageRequest::new(0, 30);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(30), 1);
        assert_eq!(req.total_pages(31), 2);
        assert_eq!(req.total_pages(90), 3);
    }
}
