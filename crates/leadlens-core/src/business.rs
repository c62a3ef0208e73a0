//! The scored business aggregate and its derived grading types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::heuristics::SiteFlags;

/// Letter band bucketing a friction score for human scanning.
///
/// Thresholds are right-inclusive lower bounds evaluated in descending
/// order: ≥80 → A, ≥60 → B, ≥40 → C, else D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    A,
    B,
    C,
    D,
}

impl ScoreBand {
    /// Band for a friction score. Total over the full `u8` range.
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::A,
            60..=79 => Self::B,
            40..=59 => Self::C,
            _ => Self::D,
        }
    }

    /// The outreach tier this band maps to.
    #[must_use]
    pub fn tier(self) -> TargetingTier {
        match self {
            Self::A => TargetingTier::Priority,
            Self::B => TargetingTier::Good,
            Self::C => TargetingTier::Pass,
            Self::D => TargetingTier::Skip,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// Outreach-priority label derived from the score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetingTier {
    Priority,
    Good,
    Pass,
    Skip,
}

impl std::fmt::Display for TargetingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "PRIORITY"),
            Self::Good => write!(f, "GOOD"),
            Self::Pass => write!(f, "PASS"),
            Self::Skip => write!(f, "SKIP"),
        }
    }
}

/// Identity and contact fields for a business before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessIdentity {
    pub name: String,
    pub domain: String,
    pub niche: String,
    pub region: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_url: Option<String>,
}

/// One crawled-and-scored business.
///
/// Created once per crawled site and immutable thereafter. `score_band`
/// and `targeting_tier` are derived from `friction_score` in
/// [`Business::scored`], so the three fields cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
    pub niche: String,
    pub region: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_url: Option<String>,
    pub flags: SiteFlags,
    /// Friction score in `[0, 100]`; higher means more obstacles for a
    /// prospective customer making contact.
    pub friction_score: u8,
    pub score_band: ScoreBand,
    pub targeting_tier: TargetingTier,
    /// Contributing-factor notes in the order the scoring rules fired.
    pub score_notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Business {
    /// Assemble a scored record from identity fields and a scoring result.
    ///
    /// `friction_score` must come from the scorer, which clamps to
    /// `[0, 100]`.
    #[must_use]
    pub fn scored(
        identity: BusinessIdentity,
        flags: SiteFlags,
        friction_score: u8,
        score_notes: Vec<String>,
    ) -> Self {
        debug_assert!(friction_score <= 100, "scorer clamps to [0, 100]");
        let score_band = ScoreBand::for_score(friction_score);
        Self {
            id: Uuid::new_v4(),
            name: identity.name,
            domain: identity.domain,
            niche: identity.niche,
            region: identity.region,
            email: identity.email,
            phone: identity.phone,
            contact_url: identity.contact_url,
            flags,
            friction_score,
            score_band,
            targeting_tier: score_band.tier(),
            score_notes,
            created_at: Utc::now(),
        }
    }

    /// Whether at least one outreach channel (email, contact URL, phone)
    /// is present and non-blank.
    #[must_use]
    pub fn has_contact_channel(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.email) || present(&self.contact_url) || present(&self.phone)
    }
}

/// Compute a stable dedup key for a business.
///
/// SHA-256 over `name || domain || region`, lower-cased and trimmed, with
/// NUL separators. Hex-encoded. Used by the persistence layer to collapse
/// re-crawls of the same site.
#[must_use]
pub fn business_key(name: &str, domain: &str, region: &str) -> String {
    use sha2::{Digest, Sha256};
    let input = format!(
        "{}\x00{}\x00{}",
        name.trim().to_lowercase(),
        domain.trim().to_lowercase(),
        region.trim().to_lowercase(),
    );
    format!("{:x}", Sha256::digest(input.as_bytes()))
}
