//! Category-tag alignment between a resolved listing and the expected
//! service type.

use std::collections::BTreeSet;

use crate::normalize::jaccard;
use crate::types::MismatchReport;

/// Trade/service keywords that have no business appearing on a home-service
/// contractor listing. Any hit flags a mismatch outright.
///
/// Keys are lowercase single tokens compared against the listing's tag
/// sub-tokens.
pub(crate) const IRRELEVANT_CATEGORY_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "bakery",
    "bar",
    "hotel",
    "motel",
    "salon",
    "spa",
    "church",
    "school",
    "bank",
    "pharmacy",
    "dentist",
    "doctor",
    "attorney",
    "lawyer",
    "insurance",
    "realty",
    "realtor",
    "grocery",
    "gym",
    "florist",
    "tattoo",
    "nightclub",
    "casino",
];

/// Tag-token similarity below this reads as a different line of business.
const CATEGORY_SIMILARITY_FLOOR: f64 = 0.12;

/// Compare a listing's category tags against the expected service
/// categories.
///
/// Tags are split on their separators into lowercase sub-tokens
/// (`roofing_contractor` → `roofing`, `contractor`) and compared by
/// Jaccard similarity; the denylist is checked against the listing's
/// tokens. `mismatch` is true on any denylist hit or when similarity falls
/// below the floor. `suspected_wrong_category` is carried through
/// unchanged and does not enter the computation.
#[must_use]
pub fn analyze(
    candidate_types: &[String],
    expected_categories: &[String],
    suspected_wrong_category: bool,
) -> MismatchReport {
    let candidate_tokens = tag_tokens(candidate_types);
    let expected_tokens = tag_tokens(expected_categories);

    let category_similarity = jaccard(&candidate_tokens, &expected_tokens);

    let denylist_hits: Vec<String> = IRRELEVANT_CATEGORY_KEYWORDS
        .iter()
        .filter(|keyword| candidate_tokens.contains(**keyword))
        .map(|keyword| (*keyword).to_owned())
        .collect();

    let mismatch = !denylist_hits.is_empty() || category_similarity < CATEGORY_SIMILARITY_FLOOR;

    let verdict = if mismatch {
        "diverge from"
    } else {
        "align with"
    };
    let summary = format!(
        "listed categories {verdict} the expected service type \
         (similarity {category_similarity:.2}); this is a proxy signal \
         derived from advertised tags, not ground truth"
    );

    MismatchReport {
        mismatch,
        category_similarity,
        denylist_hits,
        suspected_wrong_category,
        summary,
    }
}

/// Lowercase sub-tokens of a tag list, split on any non-alphanumeric
/// separator.
fn tag_tokens(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .flat_map(|tag| tag.split(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
