//! Candidate similarity scoring and selection.

use std::collections::BTreeSet;

use crate::normalize::{name_similarity, phone_suffix, registrable_domain};
use crate::types::{Candidate, LookupProfile, MatchScore, MatchSignals};

// Signal weights. Additive so each signal stays auditable on its own;
// the composite is unclamped and ranks candidates relative to each other.
const NAME_WEIGHT: f64 = 35.0;
const LOCATION_WEIGHT: f64 = 20.0;
const PHONE_WEIGHT: f64 = 35.0;
const WEBSITE_WEIGHT: f64 = 25.0;
const REVIEWED_BONUS: f64 = 2.0;

/// Hints shorter than this many tokens still divide by this floor, so a
/// one-word hint cannot produce a perfect location score.
const LOCATION_TOKEN_FLOOR: usize = 4;

/// Score one candidate against the lookup profile.
///
/// Absent fields on either side fall to the no-match branch of each
/// signal; nothing here errors.
#[must_use]
pub fn score_candidate(candidate: &Candidate, profile: &LookupProfile) -> MatchScore {
    let name_sim = name_similarity(candidate.name.as_deref().unwrap_or(""), &profile.name);

    let location = location_match(
        candidate.formatted_address.as_deref().unwrap_or(""),
        profile.location_hint.as_deref().unwrap_or(""),
    );

    let phone_match = {
        let candidate_suffix = phone_suffix(candidate.phone.as_deref().unwrap_or(""));
        let profile_suffix = phone_suffix(profile.phone.as_deref().unwrap_or(""));
        !candidate_suffix.is_empty() && !profile_suffix.is_empty() && candidate_suffix == profile_suffix
    };

    let website_match = {
        let candidate_domain = registrable_domain(candidate.website.as_deref().unwrap_or(""));
        let profile_domain = registrable_domain(profile.website.as_deref().unwrap_or(""));
        !candidate_domain.is_empty() && !profile_domain.is_empty() && candidate_domain == profile_domain
    };

    let mut composite = NAME_WEIGHT * name_sim + LOCATION_WEIGHT * location;
    if phone_match {
        composite += PHONE_WEIGHT;
    }
    if website_match {
        composite += WEBSITE_WEIGHT;
    }
    if candidate.user_ratings_total.unwrap_or(0) >= 1 {
        composite += REVIEWED_BONUS;
    }

    MatchScore {
        composite,
        signals: MatchSignals {
            name_similarity: name_sim,
            location_match: location,
            phone_match,
            website_match,
        },
    }
}

/// Fraction of distinct hint tokens (length ≥ 2) appearing as substrings
/// of the lowercased candidate address. The denominator is floored at
/// [`LOCATION_TOKEN_FLOOR`]; the result is capped at 1.0. An empty hint
/// scores 0.0.
fn location_match(address: &str, hint: &str) -> f64 {
    let hint_tokens: BTreeSet<String> = hint
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(str::to_owned)
        .collect();
    if hint_tokens.is_empty() {
        return 0.0;
    }

    let address = address.to_lowercase();
    let matched = hint_tokens
        .iter()
        .filter(|t| address.contains(t.as_str()))
        .count();
    let denominator = hint_tokens.len().max(LOCATION_TOKEN_FLOOR);

    // Hint token counts are tiny; exact in f64.
    #[allow(clippy::cast_precision_loss)]
    let fraction = matched as f64 / denominator as f64;
    fraction.min(1.0)
}

/// Select the candidate with the highest composite score.
///
/// Ties keep the first-encountered candidate from the upstream order.
/// Returns `None` only for an empty slice.
#[must_use]
pub fn select_best<'a>(
    candidates: &'a [Candidate],
    profile: &LookupProfile,
) -> Option<(&'a Candidate, MatchScore)> {
    let mut best: Option<(&Candidate, MatchScore)> = None;
    for candidate in candidates {
        let score = score_candidate(candidate, profile);
        match best {
            Some((_, current)) if score.composite <= current.composite => {}
            _ => best = Some((candidate, score)),
        }
    }
    best
}
