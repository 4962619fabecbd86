//! Filter criteria and page selection for advocate listings.
//!
//! Optional inputs arrive as loosely typed query parameters. Nothing here
//! fails: malformed values are coerced to "absent" and out-of-range page
//! parameters are snapped to the nearest allowed value.

use serde::{Deserialize, Serialize};

/// Page number used when none (or an invalid one) is requested.
pub const DEFAULT_PAGE: usize = 1;

/// Parses an optional integer, treating blank or non-numeric input as absent.
pub fn parse_lenient_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

/// Splits a comma-separated list, discarding empty fragments.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Allowed number of advocates per page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", from = "usize")]
pub enum PageSize {
    Ten,
    #[default]
    TwentyFive,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Hundred];

    /// Snaps a requested size to an allowed one, falling back to the default.
    pub fn from_requested(value: Option<i64>) -> Self {
        match value {
            Some(10) => PageSize::Ten,
            Some(100) => PageSize::Hundred,
            _ => PageSize::TwentyFive,
        }
    }

    pub const fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Hundred => 100,
        }
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl From<usize> for PageSize {
    fn from(value: usize) -> Self {
        PageSize::from_requested(i64::try_from(value).ok())
    }
}

/// One-based page selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: PageSize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: PageSize::default(),
        }
    }
}

impl PageRequest {
    /// Builds a page request, flooring the page at 1.
    pub fn new(page: Option<i64>, limit: PageSize) -> Self {
        let page = page
            .filter(|p| *p >= 1)
            .and_then(|p| usize::try_from(p).ok())
            .unwrap_or(DEFAULT_PAGE);
        Self { page, limit }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> PageSize {
        self.limit
    }

    /// Number of records preceding this page, or `None` when it does not fit
    /// a SQL `OFFSET` (such a page is necessarily past the end).
    pub fn offset(&self) -> Option<i64> {
        let preceding = i64::try_from(self.page - 1).ok()?;
        let limit = i64::try_from(self.limit.get()).ok()?;
        preceding.checked_mul(limit)
    }
}

/// Criteria an advocate must satisfy to appear in a listing.
///
/// Each populated field contributes one conjunct. An empty filter matches
/// every advocate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvocateFilter {
    /// Case-insensitive substring matched against first name, last name or city.
    pub search: Option<String>,
    /// Advocate matches when it holds at least one of these specialties.
    pub specialties: Vec<String>,
    /// Case-insensitive exact degree.
    pub degree: Option<String>,
    /// Inclusive lower bound on years of experience; always positive when set.
    pub min_experience: Option<i32>,
}

impl AdvocateFilter {
    /// Normalizes raw criteria: empty strings and non-positive thresholds
    /// become absent, empty specialty fragments are dropped.
    pub fn new(
        search: Option<String>,
        specialties: Vec<String>,
        degree: Option<String>,
        min_experience: Option<i64>,
    ) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            specialties: specialties.into_iter().filter(|s| !s.is_empty()).collect(),
            degree: degree.filter(|s| !s.is_empty()),
            min_experience: min_experience
                .filter(|n| *n > 0)
                .map(|n| i32::try_from(n).unwrap_or(i32::MAX)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.specialties.is_empty()
            && self.degree.is_none()
            && self.min_experience.is_none()
    }
}
