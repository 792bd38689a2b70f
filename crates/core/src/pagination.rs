//! Offset pagination over query-string parameters.

use serde::Deserialize;

/// Page size applied when the client does not send `limit`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query-string pagination parameters (`?page=2&limit=10`).
///
/// Both fields are optional. Out-of-range values are clamped rather than
/// rejected so a stale bookmark never turns into an error response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// 1-based page number, clamped to at least 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Rows per page, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}
