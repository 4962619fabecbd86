//! DTOs exposed by the directory API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::pagination::Pagination;

/// Raw query parameters accepted by `GET /api/advocates`.
///
/// Every field is kept as text so that malformed numbers are coerced by the
/// service instead of rejected by the extractor. Absent fields are skipped
/// when serializing, which keeps encoded query strings minimal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesQuery {
    /// Case-insensitive substring of first name, last name or city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma-separated specialty tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl AdvocatesQuery {
    /// Builds the query from decoded `key=value` pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut query.search,
                "specialties" => &mut query.specialties,
                "degree" => &mut query.degree,
                "minExperience" => &mut query.min_experience,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Body returned by `GET /api/advocates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: Pagination,
}

/// Body returned by `POST /api/seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub advocates: Vec<Advocate>,
}

/// Body returned alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
