pub mod error;
pub mod ranker;
pub mod rules;
pub mod scorer;

pub use error::ScoringError;
pub use ranker::rank;
pub use scorer::{score, ScoreOutcome, ScoringFactors};
