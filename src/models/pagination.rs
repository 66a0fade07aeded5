//! Pagination query parameters and response envelope

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters (zero-based page index)
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<i64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

impl PageQuery {
    pub const DEFAULT_PAGE_SIZE: i64 = 20;

    /// Zero-based page index, clamped to be non-negative
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE).max(0)
    }
}

/// Envelope for paginated listings
///
/// `record_count` is the number of records on the returned page, while
/// `total_record_count` is always the full unpaginated dataset size as
/// reported by the store.
#[derive(Debug, Serialize, ToSchema)]
#[aliases(AuthorPage = PaginatedResponse<crate::models::AuthorSummary>, BookPage = PaginatedResponse<crate::models::Book>)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub record_count: usize,
    pub total_record_count: i64,
    pub response: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(records: Vec<T>, total_record_count: i64) -> Self {
        Self {
            record_count: records.len(),
            total_record_count,
            response: records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_count_tracks_the_page_not_the_total() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 42);
        assert_eq!(page.record_count, 3);
        assert_eq!(page.total_record_count, 42);
    }

    #[test]
    fn defaults_and_clamping() {
        let query = PageQuery {
            page: None,
            page_size: None,
        };
        assert_eq!(query.page(), 0);
        assert_eq!(query.page_size(), PageQuery::DEFAULT_PAGE_SIZE);

        let query = PageQuery {
            page: Some(-3),
            page_size: Some(-1),
        };
        assert_eq!(query.page(), 0);
        assert_eq!(query.page_size(), 0);
    }
}
