//! Domain types for entity resolution over place-search candidates.

use serde::{Deserialize, Serialize};

/// One result from the places search API.
///
/// Only `place_id` is guaranteed; the API omits every other field freely,
/// so everything else is optional and defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Category tags, e.g. `roofing_contractor`.
    #[serde(default)]
    pub types: Vec<String>,
    /// Operating status, e.g. `OPERATIONAL` or `CLOSED_PERMANENTLY`.
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// The input side of a resolution run: what is already believed about the
/// business being looked up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupProfile {
    pub name: String,
    /// Free-form locality hint, e.g. `"Denver CO"` or a street address.
    #[serde(default)]
    pub location_hint: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Categories a correctly resolved listing is expected to carry
    /// (typically from the niche roster).
    #[serde(default)]
    pub expected_categories: Vec<String>,
    /// Operator flag: the listing's category already looked wrong upstream.
    #[serde(default)]
    pub suspected_wrong_category: bool,
}

/// Where candidate data came from. Selected once by the caller and passed
/// explicitly into the pipeline; the core never inspects ambient state
/// such as whether an API key is configured.
#[derive(Debug, Clone)]
pub enum EntitySource {
    /// Candidates returned by the places search API.
    ApiBacked { candidates: Vec<Candidate> },
    /// A single listing supplied by a human operator; it has no siblings,
    /// so collision analysis has nothing to compare against.
    ManualHint { candidate: Candidate },
}

/// The four independently auditable signals behind a match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSignals {
    /// Jaccard similarity of name word-token sets, in `[0, 1]`.
    pub name_similarity: f64,
    /// Fraction of location-hint tokens found in the candidate address,
    /// in `[0, 1]`.
    pub location_match: f64,
    pub phone_match: bool,
    pub website_match: bool,
}

/// Composite match score for one (profile, candidate) pair.
///
/// The composite is additive and unclamped (max attainable ≈ 117); it is
/// meaningful only for ranking candidates against each other, never as an
/// absolute probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchScore {
    pub composite: f64,
    pub signals: MatchSignals,
}

/// A non-selected candidate similar enough to the input name to be
/// confusable with the target business.
#[derive(Debug, Clone, Serialize)]
pub struct CollisionCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub name_similarity: f64,
}

/// Whether a name/brand collision risk exists among sibling candidates.
#[derive(Debug, Clone, Serialize)]
pub struct CollisionReport {
    pub collision_risk: bool,
    pub collision_candidates: Vec<CollisionCandidate>,
    /// Advisory disambiguation suggestions (location qualifiers appended
    /// to the business name). Never applied automatically.
    pub suggested_variants: Vec<String>,
}

/// Category-tag alignment between a listing and the expected service type.
#[derive(Debug, Clone, Serialize)]
pub struct MismatchReport {
    pub mismatch: bool,
    /// Jaccard similarity of tag tokens vs expected-category tokens.
    pub category_similarity: f64,
    /// Denylisted unrelated-trade keywords found among the listing's tags.
    pub denylist_hits: Vec<String>,
    /// Carried through from the lookup profile verbatim.
    pub suspected_wrong_category: bool,
    pub summary: String,
}

/// Ordinal risk that a listing's visibility is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThrottleSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ThrottleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Risk flags feeding the severity classification.
#[derive(Debug, Clone, Serialize)]
pub struct ThrottleFlags {
    /// `None` when the review count is unknown; unknown never counts
    /// toward severity.
    pub zero_reviews: Option<bool>,
    pub collision_risk: bool,
    pub category_mismatch: bool,
    /// Always `true`: whether the listing is service-area-only cannot be
    /// observed from candidate data. Marks a blind spot, not evidence.
    pub service_area_only_unknown: bool,
}

/// Aggregated visibility-risk assessment for a resolved listing.
#[derive(Debug, Clone, Serialize)]
pub struct ThrottleAssessment {
    pub flags: ThrottleFlags,
    pub severity: ThrottleSeverity,
}

/// Everything produced by one resolution run.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionOutcome {
    pub selected: Candidate,
    pub match_score: MatchScore,
    pub collision: CollisionReport,
    pub mismatch: MismatchReport,
    pub throttle: ThrottleAssessment,
}
