pub mod business;
pub mod error;
pub mod heuristics;
pub mod niches;

pub use business::{business_key, Business, BusinessIdentity, ScoreBand, TargetingTier};
pub use error::ConfigError;
pub use heuristics::{HeuristicResult, SiteFlags};
pub use niches::{load_niches, niche_priority, NicheConfig, NichesFile};
