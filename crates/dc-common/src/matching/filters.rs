use chrono::{DateTime, Utc};

use super::criteria::{BudgetRange, DatePosted, FilterCriteria};
use crate::{ExperienceLevel, JobPosting, PaymentType, ProjectScope, RemoteType};

/// True when the posting survives every active criterion.
pub fn passes(
    posting: &JobPosting,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
    budget_ceiling: u32,
) -> bool {
    first_rejection(posting, criteria, now, budget_ceiling).is_none()
}

/// Name of the first criterion the posting fails, if any. Used for debug
/// logging around zero-result searches; `passes` is the boolean complement.
pub fn first_rejection(
    posting: &JobPosting,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
    budget_ceiling: u32,
) -> Option<&'static str> {
    let checks = [
        ("query", matches_query(posting, &criteria.query)),
        ("role", matches_role(posting, criteria.role.as_deref())),
        ("payment", matches_payment(posting, criteria.payment)),
        ("scope", matches_scope(posting, criteria.scope)),
        ("experience", matches_experience(posting, criteria.experience)),
        ("remote", matches_remote(posting, criteria.remote)),
        (
            "company_size",
            matches_company_size(posting, criteria.company_size.as_deref()),
        ),
        (
            "date_posted",
            matches_date_posted(posting, criteria.date_posted, now),
        ),
        (
            "languages",
            overlaps(&criteria.languages, &posting.programming_languages),
        ),
        ("frameworks", overlaps(&criteria.frameworks, &posting.frameworks)),
        (
            "locations",
            overlaps(&criteria.locations, &posting.preferred_locations),
        ),
        (
            "timezones",
            overlaps(&criteria.timezones, &posting.preferred_timezones),
        ),
        (
            "budget",
            matches_budget(posting, &criteria.budget, budget_ceiling),
        ),
    ];

    checks
        .iter()
        .find(|(_, passed)| !passed)
        .map(|(name, _)| *name)
}

/// Case-insensitive substring search over title and description.
pub fn matches_query(posting: &JobPosting, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    posting.title.to_lowercase().contains(&needle)
        || posting.description.to_lowercase().contains(&needle)
}

pub fn matches_role(posting: &JobPosting, role: Option<&str>) -> bool {
    match role {
        Some(role) => posting.required_roles.iter().any(|required| required == role),
        None => true,
    }
}

pub fn matches_payment(posting: &JobPosting, payment: Option<PaymentType>) -> bool {
    match payment {
        Some(payment) => posting.payment_type == Some(payment),
        None => true,
    }
}

pub fn matches_scope(posting: &JobPosting, scope: Option<ProjectScope>) -> bool {
    match scope {
        Some(scope) => posting.project_scope == Some(scope),
        None => true,
    }
}

pub fn matches_experience(posting: &JobPosting, experience: Option<ExperienceLevel>) -> bool {
    match experience {
        Some(level) => posting.experience_level == Some(level),
        None => true,
    }
}

pub fn matches_remote(posting: &JobPosting, remote: Option<RemoteType>) -> bool {
    match remote {
        Some(remote) => posting.remote_type == Some(remote),
        None => true,
    }
}

pub fn matches_company_size(posting: &JobPosting, company_size: Option<&str>) -> bool {
    match company_size {
        Some(bucket) => posting.company_size.as_deref() == Some(bucket),
        None => true,
    }
}

/// All postings in one pass are measured against the same `now`.
pub fn matches_date_posted(posting: &JobPosting, bucket: DatePosted, now: DateTime<Utc>) -> bool {
    match bucket.cutoff(now) {
        Some(cutoff) => posting.created_at >= cutoff,
        None => true,
    }
}

/// OR semantics across the viewer's selections: any overlap qualifies.
pub fn overlaps(selected: &[String], available: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|item| available.contains(item))
}

/// Only engages once the slider is narrowed. An absent max rate is
/// open-ended and never satisfies a finite upper bound, so such postings
/// drop out of every narrowed search.
pub fn matches_budget(posting: &JobPosting, budget: &BudgetRange, ceiling: u32) -> bool {
    if !budget.is_narrowed(ceiling) {
        return true;
    }

    let min_ok = posting.min_hourly_rate.unwrap_or(0) >= budget.min;
    let max_ok = posting
        .max_hourly_rate
        .map_or(false, |max| max <= budget.max);

    min_ok && max_ok
}
