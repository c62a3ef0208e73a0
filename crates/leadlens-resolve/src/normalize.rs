//! String-normalization helpers shared by the matcher and collision
//! detector.
//!
//! The phone and domain reductions are deliberately naïve: last-10-digit
//! phone suffixes fold non-US country codes away, and last-two-label
//! domains collapse multi-part public suffixes like `co.uk`. Both
//! approximations are part of the matching contract; downstream match
//! decisions depend on them staying as they are.

use std::collections::BTreeSet;

/// Lowercased word tokens of a display name, split on any
/// non-alphanumeric character.
pub(crate) fn name_tokens(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Jaccard similarity of two token sets.
///
/// Two empty sets are a perfect match (1.0); exactly one empty set is no
/// match (0.0).
// Token sets are tiny; both counts fit f64's mantissa exactly.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Name similarity between two display names, in `[0, 1]`.
pub(crate) fn name_similarity(a: &str, b: &str) -> f64 {
    jaccard(&name_tokens(a), &name_tokens(b))
}

/// The trailing (up to) 10 digits of a phone number, empty when the input
/// has no digits.
pub(crate) fn phone_suffix(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(10);
    digits[start..].iter().collect()
}

/// Naïve registrable domain: the last two DNS labels of the URL's host,
/// lowercased, `www.` stripped. Empty string when no host is present.
pub(crate) fn registrable_domain(url: &str) -> String {
    let trimmed = url.trim().to_lowercase();
    if trimmed.is_empty() {
        return String::new();
    }
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed.as_str(), |(_, rest)| rest);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.len() {
        0 => String::new(),
        1 => labels[0].to_owned(),
        n => format!("{}.{}", labels[n - 2], labels[n - 1]),
    }
}

/// The trailing two-letter alphabetic token of a formatted address,
/// uppercased. A heuristic for US-style addresses
/// (`"…, Denver, CO 80014, USA"` → `"CO"`); returns `None` when no such
/// token exists.
pub(crate) fn trailing_state_token(address: &str) -> Option<String> {
    address
        .split(|c: char| !c.is_alphanumeric())
        .rev()
        .find(|t| t.len() == 2 && t.chars().all(char::is_alphabetic))
        .map(str::to_uppercase)
}
