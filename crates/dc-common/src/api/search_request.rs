use serde::Deserialize;

use crate::matching::{FilterCriteria, SortMode};
use crate::ViewerProfile;

fn default_limit() -> usize {
    20
}

/// Pagination window for search responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Search request body. Every field is optional; an empty body lists the
/// whole board newest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortMode,
    /// Signed-in viewer projection; drives the match percentage badge.
    #[serde(default)]
    pub viewer: Option<ViewerProfile>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
