//! Name-collision detection among sibling candidates.

use crate::normalize::{name_similarity, registrable_domain, trailing_state_token};
use crate::types::{Candidate, CollisionCandidate, CollisionReport};

/// Siblings below this name similarity to the input are not confusable
/// with the target business and are ignored.
const NAME_COLLISION_THRESHOLD: f64 = 0.55;

/// Detect whether any sibling candidate poses a collision risk for the
/// selected entity.
///
/// A sibling qualifies when its name is similar to the input name
/// (≥ 0.55) and it diverges from the selected entity by trailing address
/// state (both known) or by registrable domain (compared against the
/// selected entity's domain and the input website's domain, each only when
/// both sides are non-empty). When a risk exists, advisory name variants
/// with location qualifiers are suggested — they are never applied.
#[must_use]
pub fn detect(
    candidates: &[Candidate],
    selected: &Candidate,
    business_name: &str,
    website: Option<&str>,
) -> CollisionReport {
    let selected_state = selected
        .formatted_address
        .as_deref()
        .and_then(trailing_state_token);
    let selected_domain = registrable_domain(selected.website.as_deref().unwrap_or(""));
    let input_domain = registrable_domain(website.unwrap_or(""));

    let mut collision_candidates = Vec::new();
    for candidate in candidates {
        if candidate.place_id == selected.place_id {
            continue;
        }

        let similarity = name_similarity(candidate.name.as_deref().unwrap_or(""), business_name);
        if similarity < NAME_COLLISION_THRESHOLD {
            continue;
        }

        let candidate_state = candidate
            .formatted_address
            .as_deref()
            .and_then(trailing_state_token);
        // Absence of a state on either side is not divergence evidence.
        let state_differs = matches!(
            (candidate_state.as_deref(), selected_state.as_deref()),
            (Some(a), Some(b)) if a != b
        );

        let candidate_domain = registrable_domain(candidate.website.as_deref().unwrap_or(""));
        let domain_differs = |other: &str| {
            !candidate_domain.is_empty() && !other.is_empty() && candidate_domain != other
        };

        if state_differs || domain_differs(&selected_domain) || domain_differs(&input_domain) {
            collision_candidates.push(CollisionCandidate {
                place_id: candidate.place_id.clone(),
                name: candidate.name.clone(),
                formatted_address: candidate.formatted_address.clone(),
                name_similarity: similarity,
            });
        }
    }

    let collision_risk = !collision_candidates.is_empty();
    let suggested_variants = if collision_risk {
        suggest_variants(business_name, selected)
    } else {
        Vec::new()
    };

    CollisionReport {
        collision_risk,
        collision_candidates,
        suggested_variants,
    }
}

/// Disambiguating name variants built from the selected entity's address:
/// the city and the state appended as qualifiers.
fn suggest_variants(business_name: &str, selected: &Candidate) -> Vec<String> {
    let mut variants = Vec::new();
    if let Some(address) = selected.formatted_address.as_deref() {
        if let Some(city) = city_before_state(address) {
            variants.push(format!("{business_name} {city}"));
        }
        if let Some(state) = trailing_state_token(address) {
            variants.push(format!("{business_name} {state}"));
        }
    }
    variants
}

/// The comma-separated address segment preceding the one holding the
/// trailing state token — the city in US-style formatted addresses.
fn city_before_state(address: &str) -> Option<String> {
    let state = trailing_state_token(address)?;
    let segments: Vec<&str> = address.split(',').map(str::trim).collect();
    let state_idx = segments.iter().rposition(|segment| {
        segment
            .split_whitespace()
            .any(|t| t.eq_ignore_ascii_case(&state))
    })?;
    if state_idx == 0 {
        return None;
    }
    Some(segments[state_idx - 1].to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(place_id: &str, name: &str, address: &str, website: Option<&str>) -> Candidate {
        Candidate {
            place_id: place_id.to_owned(),
            name: Some(name.to_owned()),
            formatted_address: Some(address.to_owned()),
            types: vec![],
            business_status: None,
            rating: None,
            user_ratings_total: None,
            phone: None,
            website: website.map(str::to_owned),
        }
    }

    fn selected() -> Candidate {
        candidate(
            "sel",
            "Summit Roofing",
            "1200 Federal Blvd, Denver, CO 80204, USA",
            Some("https://summitroofing.com"),
        )
    }

    #[test]
    fn similar_name_in_other_state_is_a_collision() {
        let doppelganger = candidate(
            "dop",
            "Summit Roofing",
            "500 Main St, Dallas, TX 75201, USA",
            Some("https://summitroofingtx.com"),
        );
        let report = detect(
            &[selected(), doppelganger],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(report.collision_risk);
        assert_eq!(report.collision_candidates.len(), 1);
        assert_eq!(report.collision_candidates[0].place_id, "dop");
    }

    #[test]
    fn two_qualifying_siblings_are_both_listed() {
        let tx = candidate(
            "tx",
            "Summit Roofing",
            "500 Main St, Dallas, TX 75201, USA",
            Some("https://summitroofingtx.com"),
        );
        let az = candidate(
            "az",
            "Summit Roofing LLC",
            "22 E Camelback Rd, Phoenix, AZ 85012, USA",
            Some("https://summitroofaz.com"),
        );
        let report = detect(
            &[selected(), tx, az],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(report.collision_risk);
        assert_eq!(report.collision_candidates.len(), 2);
    }

    #[test]
    fn dissimilar_names_are_ignored() {
        let other = candidate(
            "oth",
            "Apex Gutter Cleaning",
            "500 Main St, Dallas, TX 75201, USA",
            Some("https://apexgutters.com"),
        );
        let report = detect(
            &[selected(), other],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(!report.collision_risk);
        assert!(report.collision_candidates.is_empty());
        assert!(report.suggested_variants.is_empty());
    }

    #[test]
    fn same_state_same_domain_is_not_a_collision() {
        // A second listing for the same entity (duplicate pin) shares state
        // and domain; that is dedup territory, not a collision.
        let duplicate = candidate(
            "dup",
            "Summit Roofing",
            "1200 Federal Blvd, Denver, CO 80204, USA",
            Some("https://www.summitroofing.com/locations"),
        );
        let report = detect(
            &[selected(), duplicate],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(!report.collision_risk);
    }

    #[test]
    fn missing_domains_abstain_from_the_domain_check() {
        let same_state_no_site = candidate(
            "nos",
            "Summit Roofing",
            "900 Broadway, Denver, CO 80203, USA",
            None,
        );
        let report = detect(
            &[selected(), same_state_no_site],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(!report.collision_risk);
    }

    #[test]
    fn domain_divergence_alone_qualifies() {
        let same_state_other_site = candidate(
            "oss",
            "Summit Roofing",
            "900 Broadway, Denver, CO 80203, USA",
            Some("https://summitroofingdenver.com"),
        );
        let report = detect(
            &[selected(), same_state_other_site],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(report.collision_risk);
    }

    #[test]
    fn selected_candidate_is_never_its_own_collision() {
        let report = detect(
            &[selected()],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert!(!report.collision_risk);
    }

    #[test]
    fn variants_append_city_and_state_qualifiers() {
        let doppelganger = candidate(
            "dop",
            "Summit Roofing",
            "500 Main St, Dallas, TX 75201, USA",
            Some("https://summitroofingtx.com"),
        );
        let report = detect(
            &[selected(), doppelganger],
            &selected(),
            "Summit Roofing",
            Some("summitroofing.com"),
        );
        assert_eq!(
            report.suggested_variants,
            vec!["Summit Roofing Denver", "Summit Roofing CO"]
        );
    }

    #[test]
    fn city_extraction_handles_missing_country_suffix() {
        assert_eq!(
            city_before_state("500 Main St, Dallas, TX 75201").as_deref(),
            Some("Dallas")
        );
    }
}
