use thiserror::Error;

/// Errors returned by the entity-resolution pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The search API returned zero candidates for this lookup; there is
    /// nothing to resolve against.
    #[error("no candidates to resolve against")]
    NoCandidates,
}
