//! Aggregation of resolution signals into a single visibility-risk
//! severity.

use crate::types::{
    Candidate, CollisionReport, MismatchReport, ThrottleAssessment, ThrottleFlags,
    ThrottleSeverity,
};

/// Classify the visibility-suppression risk for a resolved listing.
///
/// Severity is ordinal over the count of raised flags among zero-reviews,
/// collision risk, and category mismatch: 0 → LOW, 1 → MEDIUM, ≥2 → HIGH.
/// An unknown review count (`zero_reviews = None`) never counts. The
/// `service_area_only_unknown` flag is always raised and never counted —
/// it records an inherent blind spot, not evidence.
#[must_use]
pub fn classify(
    selected: &Candidate,
    mismatch: &MismatchReport,
    collision: &CollisionReport,
) -> ThrottleAssessment {
    let flags = ThrottleFlags {
        zero_reviews: selected.user_ratings_total.map(|total| total == 0),
        collision_risk: collision.collision_risk,
        category_mismatch: mismatch.mismatch,
        service_area_only_unknown: true,
    };

    let raised = usize::from(flags.zero_reviews == Some(true))
        + usize::from(flags.collision_risk)
        + usize::from(flags.category_mismatch);

    let severity = match raised {
        0 => ThrottleSeverity::Low,
        1 => ThrottleSeverity::Medium,
        _ => ThrottleSeverity::High,
    };

    ThrottleAssessment { flags, severity }
}
