//! Outreach ordering over scored businesses.

use leadlens_core::{niche_priority, Business};

/// Filter and order businesses for outreach.
///
/// Businesses with no reachable contact channel (no email, contact URL, or
/// phone) are dropped regardless of score. The rest are ordered by
/// `friction_score` descending, tie-broken by the fixed niche-priority
/// ordinal ascending. The sort is stable: equal (score, priority) pairs
/// keep their input order. The input is never mutated; callers get an
/// ordered view of references.
#[must_use]
pub fn rank(businesses: &[Business]) -> Vec<&Business> {
    let mut ordered: Vec<&Business> = businesses
        .iter()
        .filter(|b| b.has_contact_channel())
        .collect();

    ordered.sort_by(|a, b| {
        b.friction_score
            .cmp(&a.friction_score)
            .then_with(|| niche_priority(&a.niche).cmp(&niche_priority(&b.niche)))
    });

    ordered
}
