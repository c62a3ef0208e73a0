//! Friction scoring: raw crawl signals in, `[0, 100]` score out.

use leadlens_core::{HeuristicResult, ScoreBand};
use serde::Serialize;

use crate::error::ScoringError;
use crate::rules::RULES;

/// Which rules fired during one scoring call. Produced fresh per call and
/// never mutated afterward; consumed by the reporting layer for audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoringFactors {
    pub no_booking: bool,
    pub long_form: bool,
    pub no_phone_link: bool,
    pub no_email: bool,
    pub no_chat: bool,
    pub no_instant_quote: bool,
    pub no_file_upload: bool,
    pub poor_mobile: bool,
    pub has_online_booking: bool,
    pub has_chat_widget: bool,
    pub has_instant_quote_widget: bool,
}

/// Result of scoring one site's heuristics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    /// Friction score in `[0, 100]`. Higher means more obstacles for a
    /// prospective customer making contact.
    pub score: u8,
    pub factors: ScoringFactors,
    /// Contributing-factor notes in rule-table order.
    pub notes: Vec<String>,
}

impl ScoreOutcome {
    /// Letter band for this score.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// Score one site's crawl heuristics.
///
/// Walks the fixed rule table, accumulating integer deltas and appending
/// one note per fired rule, then clamps the total to `[0, 100]`.
/// Deterministic: identical input yields an identical
/// `(score, factors, notes)` triple.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidHeuristics`] when
/// `form_required_count > form_input_count` — required fields are a subset
/// of the form's inputs, so this indicates a crawler bug rather than a
/// high-friction site.
pub fn score(heuristics: &HeuristicResult) -> Result<ScoreOutcome, ScoringError> {
    if heuristics.form_required_count > heuristics.form_input_count {
        return Err(ScoringError::InvalidHeuristics {
            reason: format!(
                "form_required_count {} exceeds form_input_count {}",
                heuristics.form_required_count, heuristics.form_input_count
            ),
        });
    }

    let mut total = 0i32;
    let mut factors = ScoringFactors::default();
    let mut notes = Vec::new();

    for rule in RULES {
        if (rule.applies)(heuristics) {
            total += rule.delta;
            (rule.mark)(&mut factors);
            (rule.note)(heuristics, &mut notes);
        }
    }

    // Clamped to [0, 100], so the narrowing cast is lossless.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let score = total.clamp(0, 100) as u8;

    Ok(ScoreOutcome {
        score,
        factors,
        notes,
    })
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
