/// Relevance weights for ranked search.
/// Criteria-side terms reward postings that hit the viewer's explicit filter
/// selections; profile-side terms reward overlap with the signed-in viewer.
pub const RELEVANCE_WEIGHTS: RelevanceWeights = RelevanceWeights {
    criteria_role: 10,
    viewer_role: 8,
    viewer_skill: 5,
    experience_match: 5,
    criteria_language: 3,
    criteria_framework: 2,
};

#[derive(Debug, Clone, Copy)]
pub struct RelevanceWeights {
    /// Flat bonus when the selected role filter is one of the posting's roles.
    pub criteria_role: u32,
    /// Per overlapping role between the viewer's profile and the posting.
    pub viewer_role: u32,
    /// Per overlapping skill between the viewer's profile and the posting.
    pub viewer_skill: u32,
    /// Flat bonus when viewer and posting state the same experience level.
    pub experience_match: u32,
    /// Per overlapping language between the filter selection and the posting.
    pub criteria_language: u32,
    /// Per overlapping framework between the filter selection and the posting.
    pub criteria_framework: u32,
}
