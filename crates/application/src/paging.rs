//! Offset pagination over in-memory listings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters accepted by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageParams {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus derived navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PagedList<T> {
    /// Slice one page out of the full (already ordered) item list.
    ///
    /// Assumes params were validated (`page ≥ 1`, `1 ≤ page_size ≤ MAX`).
    pub fn from_items(all: Vec<T>, params: PageParams) -> Self {
        let total_count = all.len() as i64;
        let page_size = params.page_size.max(1);
        let total_pages = (total_count + page_size - 1) / page_size;
        let current_page = params.page.max(1);

        // A huge page number would overflow the offset; such a page is past
        // the end anyway, so it collapses to an empty page.
        let offset = (current_page - 1)
            .checked_mul(page_size)
            .and_then(|o| usize::try_from(o).ok());
        let items: Vec<T> = match offset {
            Some(offset) => all
                .into_iter()
                .skip(offset)
                .take(page_size as usize)
                .collect(),
            None => Vec::new(),
        };

        Self {
            items,
            total_count,
            page_size,
            current_page,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1 && total_count > 0,
        }
    }
}

/// Shared page-bounds validator, reused by every list operation.
pub mod validate {
    use crate::validation::{rules, FieldErrors};

    use super::{PageParams, MAX_PAGE_SIZE};

    pub fn page_params(params: &PageParams, errors: &mut FieldErrors) {
        if params.page < 1 {
            rules::fail(errors, "page", "Page must be at least 1");
        }
        if params.page_size < 1 {
            rules::fail(errors, "pageSize", "Page size must be at least 1");
        } else if params.page_size > MAX_PAGE_SIZE {
            rules::fail(
                errors,
                "pageSize",
                format!("Page size cannot exceed {MAX_PAGE_SIZE}"),
            );
        }
    }
}
