use std::collections::HashSet;

use super::criteria::FilterCriteria;
use super::weights::RELEVANCE_WEIGHTS;
use crate::{JobPosting, ViewerProfile};

/// Number of distinct shared entries between the two lists. Selections are
/// treated as sets, so repeated entries count once.
fn overlap_count(left: &[String], right: &[String]) -> u32 {
    let left: HashSet<&str> = left.iter().map(String::as_str).collect();
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    left.intersection(&right).count() as u32
}

/// Additive ranking score for one posting. Every term is independent;
/// viewer-dependent terms contribute nothing for anonymous searches.
pub fn relevance_score(
    posting: &JobPosting,
    criteria: &FilterCriteria,
    viewer: Option<&ViewerProfile>,
) -> u32 {
    let weights = RELEVANCE_WEIGHTS;
    let mut score = 0;

    if let Some(role) = criteria.role.as_deref() {
        if posting.required_roles.iter().any(|required| required == role) {
            score += weights.criteria_role;
        }
    }

    if let Some(viewer) = viewer {
        score += weights.viewer_skill * overlap_count(&viewer.skills, &posting.required_skills);
        score += weights.viewer_role * overlap_count(&viewer.developer_roles, &posting.required_roles);

        if viewer.experience_level.is_some()
            && viewer.experience_level == posting.experience_level
        {
            score += weights.experience_match;
        }
    }

    score += weights.criteria_language
        * overlap_count(&criteria.languages, &posting.programming_languages);
    score += weights.criteria_framework * overlap_count(&criteria.frameworks, &posting.frameworks);

    score
}

/// Viewer-facing compatibility badge, 0-100. Groups are only counted when
/// the posting states comparable data; with nothing comparable the result
/// is 0 rather than a division by zero.
pub fn match_percentage(posting: &JobPosting, viewer: &ViewerProfile) -> u8 {
    let mut matched = 0u32;
    let mut total = 0u32;

    total += posting.required_roles.len() as u32;
    matched += overlap_count(&viewer.developer_roles, &posting.required_roles);

    total += posting.required_skills.len() as u32;
    matched += overlap_count(&viewer.skills, &posting.required_skills);

    if posting.experience_level.is_some() {
        total += 1;
        if viewer.experience_level == posting.experience_level {
            matched += 1;
        }
    }

    if total == 0 {
        return 0;
    }

    ((matched as f64 / total as f64) * 100.0).round() as u8
}
