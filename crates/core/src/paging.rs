//! Pagination and sort-order primitives shared by the repository and
//! handler layers.

use serde::{Deserialize, Serialize};

/// Sort direction for list queries.
///
/// Deserialized from the `order` query parameter; anything other than
/// `asc` or `desc` is rejected at extraction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction. Safe to interpolate: the enum is
    /// closed.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Query-string value (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction, used by sort-toggle links in list headers.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// One page of a filtered, sorted listing, plus the total match count
/// the pagination UI needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page number.
    pub page: i64,
    pub page_size: i64,
    /// Total rows matching the filter, across all pages.
    pub total: i64,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page
            .saturating_add(1)
            .saturating_mul(self.page_size)
            < self.total
    }

    /// One-based index of the first row on this page, or 0 when empty.
    pub fn display_from(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.page.saturating_mul(self.page_size).saturating_add(1)
        }
    }

    /// One-based index of the last row on this page.
    pub fn display_to(&self) -> i64 {
        self.page
            .saturating_mul(self.page_size)
            .saturating_add(self.items.len() as i64)
            .min(self.total)
    }
}
