//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items per page when not specified in a request.
    pub default_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
        }
    }
}

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PaginationConfig {
    /// Build a [PageRequest] from raw query parameters.
    ///
    /// Parameters that are absent, not an integer, or less than 1 fall back to
    /// the configured defaults rather than being rejected.
    pub fn page_request(&self, page: Option<&str>, per_page: Option<&str>) -> PageRequest {
        PageRequest::new(
            parse_positive(page).unwrap_or(self.default_page),
            parse_positive(per_page).unwrap_or(self.default_page_size),
        )
    }
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value?
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|&number| number >= 1)
        .map(|number| number as u64)
}

impl PageRequest {
    /// Create a page request, raising `page` and `per_page` to 1 if they are
    /// zero.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// The page number, starting from 1.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The maximum number of items on a page, at least 1.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// The number of items that come before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// The number of pages needed to show `total` items.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}
