use std::ops::Range;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Query parameters accepted by paginated list endpoints.
///
/// Values are taken as signed so out-of-range input clamps instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (starts from 1)
    pub page: Option<i64>,
    /// Number of items per page (max 100)
    pub limit: Option<i64>,
}

/// Navigation metadata describing one page within a larger collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub total_records: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub has_more: bool,
}

/// Compute the index window and navigation metadata for one page.
///
/// `limit` is clamped to `[1, 100]` and `page` to `>= 1`. A page past the
/// end of the collection produces an empty window with well-formed
/// metadata rather than an error; `page` is deliberately not clamped to
/// `total_pages`.
pub fn paginate(
    total: usize,
    page: Option<i64>,
    limit: Option<i64>,
) -> (Range<usize>, PaginationMeta) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u64;
    let page = page.unwrap_or(DEFAULT_PAGE).max(1) as u64;

    let total = total as u64;
    let total_pages = total.div_ceil(limit);

    // Saturating so an arbitrarily large page cannot overflow; the
    // window is then intersected with the collection, so pages past the
    // end yield an empty range.
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    let start = start.min(total) as usize;
    let end = end.min(total) as usize;

    let meta = PaginationMeta {
        total_records: total,
        current_page: page,
        total_pages,
        next_page: (page < total_pages).then_some(page + 1),
        prev_page: (page > 1).then_some(page - 1),
        has_more: page < total_pages,
    };

    (start..end, meta)
}
