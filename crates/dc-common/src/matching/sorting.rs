use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::pipeline::JobMatch;
use crate::JobPosting;

/// Ordering applied after filtering. Exactly one mode is active per pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Date,
    Budget,
    Deadline,
    Applications,
    Relevance,
}

impl SortMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Budget => "budget",
            Self::Deadline => "deadline",
            Self::Applications => "applications",
            Self::Relevance => "relevance",
        }
    }
}

/// Highest advertised rate; postings without any stated rate sort as 0.
fn advertised_rate(posting: &JobPosting) -> u32 {
    posting
        .max_hourly_rate
        .unwrap_or(0)
        .max(posting.min_hourly_rate.unwrap_or(0))
}

fn deadline_order(a: &JobMatch, b: &JobMatch) -> Ordering {
    match (
        a.posting.application_deadline,
        b.posting.application_deadline,
    ) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort; ties keep their filtered-stage order.
pub fn sort_matches(matches: &mut [JobMatch], mode: SortMode) {
    match mode {
        SortMode::Date => {
            matches.sort_by(|a, b| b.posting.created_at.cmp(&a.posting.created_at));
        }
        SortMode::Budget => {
            matches.sort_by(|a, b| advertised_rate(&b.posting).cmp(&advertised_rate(&a.posting)));
        }
        SortMode::Deadline => {
            matches.sort_by(deadline_order);
        }
        SortMode::Applications => {
            matches.sort_by(|a, b| {
                a.posting
                    .application_count
                    .cmp(&b.posting.application_count)
            });
        }
        SortMode::Relevance => {
            matches.sort_by(|a, b| {
                b.relevance_score
                    .unwrap_or(0)
                    .cmp(&a.relevance_score.unwrap_or(0))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobStatus;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn posting(id: &str) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: "Posting".into(),
            description: String::new(),
            required_roles: vec![],
            required_skills: vec![],
            programming_languages: vec![],
            frameworks: vec![],
            preferred_locations: vec![],
            preferred_timezones: vec![],
            payment_type: None,
            min_hourly_rate: None,
            max_hourly_rate: None,
            project_scope: None,
            experience_level: None,
            remote_type: None,
            company_size: None,
            status: JobStatus::Open,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            application_deadline: None,
            application_count: 0,
            external: false,
            source: None,
            original_url: None,
        }
    }

    fn as_match(posting: JobPosting) -> JobMatch {
        JobMatch {
            posting,
            relevance_score: None,
            match_percentage: None,
        }
    }

    fn ids(matches: &[JobMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.posting.id.as_str()).collect()
    }

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap() + Duration::days(offset)
    }

    #[test]
    fn date_sorts_newest_first() {
        let mut matches = vec![
            as_match(JobPosting { created_at: day(1), ..posting("old") }),
            as_match(JobPosting { created_at: day(5), ..posting("new") }),
            as_match(JobPosting { created_at: day(3), ..posting("mid") }),
        ];

        sort_matches(&mut matches, SortMode::Date);
        assert_eq!(ids(&matches), vec!["new", "mid", "old"]);
    }

    #[test]
    fn budget_uses_highest_advertised_rate() {
        let mut matches = vec![
            as_match(JobPosting {
                min_hourly_rate: Some(30),
                max_hourly_rate: None,
                ..posting("min-only")
            }),
            as_match(JobPosting {
                min_hourly_rate: Some(10),
                max_hourly_rate: Some(60),
                ..posting("wide")
            }),
            as_match(posting("unpriced")),
        ];

        sort_matches(&mut matches, SortMode::Budget);
        assert_eq!(ids(&matches), vec!["wide", "min-only", "unpriced"]);
    }

    #[test]
    fn deadline_sorts_soonest_first_and_missing_last() {
        let mut matches = vec![
            as_match(JobPosting { application_deadline: None, ..posting("none-a") }),
            as_match(JobPosting {
                application_deadline: Some(day(9)),
                ..posting("later")
            }),
            as_match(JobPosting { application_deadline: None, ..posting("none-b") }),
            as_match(JobPosting {
                application_deadline: Some(day(2)),
                ..posting("soon")
            }),
        ];

        sort_matches(&mut matches, SortMode::Deadline);

        // Missing deadlines drop to the tail, keeping their relative order.
        assert_eq!(ids(&matches), vec!["soon", "later", "none-a", "none-b"]);
    }

    #[test]
    fn applications_sorts_least_competitive_first() {
        let mut matches = vec![
            as_match(JobPosting { application_count: 12, ..posting("busy") }),
            as_match(JobPosting { application_count: 0, ..posting("fresh") }),
            as_match(JobPosting { application_count: 3, ..posting("some") }),
        ];

        sort_matches(&mut matches, SortMode::Applications);
        assert_eq!(ids(&matches), vec!["fresh", "some", "busy"]);
    }

    #[test]
    fn relevance_ties_keep_input_order() {
        let mut matches = vec![
            JobMatch { relevance_score: Some(5), ..as_match(posting("first")) },
            JobMatch { relevance_score: Some(5), ..as_match(posting("second")) },
            JobMatch { relevance_score: Some(9), ..as_match(posting("top")) },
        ];

        sort_matches(&mut matches, SortMode::Relevance);
        assert_eq!(ids(&matches), vec!["top", "first", "second"]);
    }
}
