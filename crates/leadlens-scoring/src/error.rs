use thiserror::Error;

/// Errors returned by the friction scorer.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The crawler supplied a `HeuristicResult` outside its documented
    /// domain. Surfaced instead of silently coercing, since coercion would
    /// mask caller bugs.
    #[error("invalid heuristics: {reason}")]
    InvalidHeuristics { reason: String },
}
