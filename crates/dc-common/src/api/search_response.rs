use serde::Serialize;

use crate::matching::{JobMatch, SortMode};
use crate::JobPosting;

/// One search hit as served over the wire: the posting itself plus the
/// derived ranking fields and the application routing decision.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchItem {
    #[serde(flatten)]
    pub posting: JobPosting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    pub apply_route: &'static str,
}

impl From<JobMatch> for JobMatchItem {
    fn from(value: JobMatch) -> Self {
        let apply_route = value.posting.apply_route().as_str();
        Self {
            posting: value.posting,
            relevance_score: value.relevance_score,
            match_percentage: value.match_percentage,
            apply_route,
        }
    }
}

impl From<JobPosting> for JobMatchItem {
    fn from(posting: JobPosting) -> Self {
        let apply_route = posting.apply_route().as_str();
        Self {
            posting,
            relevance_score: None,
            match_percentage: None,
            apply_route,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub items: Vec<JobMatchItem>,
    /// Matches before pagination was applied.
    pub total_matched: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
    pub sort: SortMode,
}
