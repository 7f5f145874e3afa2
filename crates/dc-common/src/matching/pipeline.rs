use chrono::{DateTime, Utc};
use serde::Serialize;

use super::criteria::{FilterCriteria, BUDGET_SLIDER_CEILING};
use super::filters;
use super::relevance::{match_percentage, relevance_score};
use super::sorting::{sort_matches, SortMode};
use crate::{JobPosting, ViewerProfile};

/// One search hit: the surviving posting plus its derived ranking data.
/// `relevance_score` is only computed under relevance sort;
/// `match_percentage` is present whenever a viewer was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub posting: JobPosting,
    pub relevance_score: Option<u32>,
    pub match_percentage: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngineConfig {
    /// Budget slider ceiling the criteria range is measured against.
    pub budget_ceiling: u32,
}

impl Default for MatchEngineConfig {
    fn default() -> Self {
        Self {
            budget_ceiling: BUDGET_SLIDER_CEILING,
        }
    }
}

impl MatchEngineConfig {
    pub fn from_env() -> Self {
        let budget_ceiling = std::env::var("DC_BUDGET_CEILING")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|ceiling| *ceiling > 0)
            .unwrap_or(BUDGET_SLIDER_CEILING);

        Self { budget_ceiling }
    }
}

/// Filter-then-sort pipeline over one snapshot of the board. The engine
/// holds no state besides its config: it never mutates its inputs and the
/// same inputs always produce the same ordered output.
#[derive(Debug, Clone, Default)]
pub struct JobMatchEngine {
    config: MatchEngineConfig,
}

impl JobMatchEngine {
    pub fn new(config: MatchEngineConfig) -> Self {
        Self { config }
    }

    pub fn budget_ceiling(&self) -> u32 {
        self.config.budget_ceiling
    }

    pub fn run(
        &self,
        postings: &[JobPosting],
        criteria: &FilterCriteria,
        sort: SortMode,
        viewer: Option<&ViewerProfile>,
    ) -> Vec<JobMatch> {
        self.run_at(Utc::now(), postings, criteria, sort, viewer)
    }

    /// Same pass against a caller-supplied clock. `now` is fixed here so
    /// every posting in the pass is measured against the same instant.
    pub fn run_at(
        &self,
        now: DateTime<Utc>,
        postings: &[JobPosting],
        criteria: &FilterCriteria,
        sort: SortMode,
        viewer: Option<&ViewerProfile>,
    ) -> Vec<JobMatch> {
        let mut matches: Vec<JobMatch> = postings
            .iter()
            .filter(|posting| filters::passes(posting, criteria, now, self.config.budget_ceiling))
            .map(|posting| self.build_match(posting, criteria, sort, viewer))
            .collect();

        sort_matches(&mut matches, sort);
        matches
    }

    fn build_match(
        &self,
        posting: &JobPosting,
        criteria: &FilterCriteria,
        sort: SortMode,
        viewer: Option<&ViewerProfile>,
    ) -> JobMatch {
        let relevance = (sort == SortMode::Relevance)
            .then(|| relevance_score(posting, criteria, viewer));
        let percentage = viewer.map(|viewer| match_percentage(posting, viewer));

        JobMatch {
            posting: posting.clone(),
            relevance_score: relevance,
            match_percentage: percentage,
        }
    }
}
