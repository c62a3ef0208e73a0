pub mod category;
pub mod collision;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod throttle;
pub mod types;

pub use error::ResolveError;
pub use pipeline::resolve_entity;
pub use types::{
    Candidate, CollisionCandidate, CollisionReport, EntitySource, LookupProfile, MatchScore,
    MatchSignals, MismatchReport, ResolutionOutcome, ThrottleAssessment, ThrottleFlags,
    ThrottleSeverity,
};
