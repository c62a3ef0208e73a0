//! Entity-resolution orchestration.

use crate::error::ResolveError;
use crate::types::{
    Candidate, CollisionReport, EntitySource, LookupProfile, MatchScore, ResolutionOutcome,
};
use crate::{category, collision, matcher, throttle};

/// Resolve a business profile against a candidate source.
///
/// 1. Select the entity: the best-scoring API candidate, or the operator's
///    hint verbatim.
/// 2. Check siblings for name collisions (a manual hint has none).
/// 3. Compare the listing's categories against the expected ones.
/// 4. Aggregate into a throttle-severity assessment.
///
/// # Errors
///
/// Returns [`ResolveError::NoCandidates`] for an API-backed source with an
/// empty candidate list.
pub fn resolve_entity(
    source: &EntitySource,
    profile: &LookupProfile,
) -> Result<ResolutionOutcome, ResolveError> {
    match source {
        EntitySource::ManualHint { candidate } => {
            tracing::info!(
                business = %profile.name,
                place_id = %candidate.place_id,
                "resolving from operator-supplied listing"
            );
            let match_score = matcher::score_candidate(candidate, profile);
            let collision = collision::detect(
                std::slice::from_ref(candidate),
                candidate,
                &profile.name,
                profile.website.as_deref(),
            );
            Ok(finish(candidate.clone(), match_score, collision, profile))
        }
        EntitySource::ApiBacked { candidates } => {
            if candidates.is_empty() {
                tracing::info!(
                    business = %profile.name,
                    "search returned no candidates — resolution cannot proceed"
                );
                return Err(ResolveError::NoCandidates);
            }

            tracing::debug!(
                business = %profile.name,
                count = candidates.len(),
                "scoring search candidates"
            );
            let (selected, match_score) =
                matcher::select_best(candidates, profile).ok_or(ResolveError::NoCandidates)?;
            tracing::info!(
                business = %profile.name,
                place_id = %selected.place_id,
                composite = match_score.composite,
                "selected candidate"
            );

            let collision =
                collision::detect(candidates, selected, &profile.name, profile.website.as_deref());
            if collision.collision_risk {
                tracing::warn!(
                    business = %profile.name,
                    siblings = collision.collision_candidates.len(),
                    "name collision risk among sibling candidates"
                );
            }

            Ok(finish(selected.clone(), match_score, collision, profile))
        }
    }
}

fn finish(
    selected: Candidate,
    match_score: MatchScore,
    collision: CollisionReport,
    profile: &LookupProfile,
) -> ResolutionOutcome {
    let mismatch = category::analyze(
        &selected.types,
        &profile.expected_categories,
        profile.suspected_wrong_category,
    );
    let throttle = throttle::classify(&selected, &mismatch, &collision);

    ResolutionOutcome {
        selected,
        match_score,
        collision,
        mismatch,
        throttle,
    }
}
