//! Page-based pagination.
//!
//! [`PaginatedResult`] is the provider the response formatter reads its
//! `pagination` block from. [`Page`] is the implementation the repositories
//! return.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// A slice of a larger ordered collection plus its position metadata.
///
/// The formatter copies these values verbatim; implementations own the
/// arithmetic.
pub trait PaginatedResult {
    type Item;

    /// 1-based number of this page.
    fn current_page(&self) -> i64;

    /// Requested page size.
    fn per_page(&self) -> i64;

    /// Number of items across all pages.
    fn total(&self) -> i64;

    /// Number of the last page.
    fn last_page(&self) -> i64;

    fn has_more_pages(&self) -> bool;

    /// Consume the result, yielding this page's items in order.
    fn into_items(self) -> Vec<Self::Item>;
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A validated `(page, limit)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Validate a page request. `page` must be at least 1 and `limit` must be
    /// within `1..=MAX_LIMIT`.
    pub fn new(page: i64, limit: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(
                "The page must be at least 1.".to_string(),
            ));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(format!(
                "The limit must be between 1 and {MAX_LIMIT}."
            )));
        }
        Ok(Self { page, limit })
    }

    /// Fill in defaults for missing values, then validate.
    pub fn from_optional(page: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of results with length-aware metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    current_page: i64,
    per_page: i64,
    total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            current_page: request.page(),
            per_page: request.limit(),
            total: total.max(0),
        }
    }

    /// Slice an already ordered collection into the requested page.
    pub fn from_sorted(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as i64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let items = all.into_iter().skip(skip).take(take).collect();
        Self::new(items, request, total)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

impl<T> PaginatedResult for Page<T> {
    type Item = T;

    fn current_page(&self) -> i64 {
        self.current_page
    }

    fn per_page(&self) -> i64 {
        self.per_page
    }

    fn total(&self) -> i64 {
        self.total
    }

    /// Never less than 1, even for an empty collection.
    fn last_page(&self) -> i64 {
        let pages = (self.total + self.per_page - 1) / self.per_page;
        pages.max(1)
    }

    fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
