//! Niche roster configuration and the fixed outreach-priority table.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Fixed outreach-priority ordinal for a service niche. Lower sorts first
/// among equal friction scores; unknown niches sort last.
#[must_use]
pub fn niche_priority(niche: &str) -> u16 {
    match niche.trim().to_lowercase().as_str() {
        "roofing" => 1,
        "hvac" => 2,
        "remodeling" => 3,
        "landscaping" => 4,
        "tree" => 5,
        "pest" => 6,
        _ => 999,
    }
}

/// One entry in the niche roster (`config/niches.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheConfig {
    pub name: String,
    /// Service categories a correctly-resolved listing in this niche is
    /// expected to carry; input material for category-mismatch analysis.
    pub expected_categories: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NichesFile {
    pub niches: Vec<NicheConfig>,
}

impl NichesFile {
    /// Expected categories for a niche, matched case-insensitively.
    #[must_use]
    pub fn expected_categories(&self, niche: &str) -> Option<&[String]> {
        let wanted = niche.trim().to_lowercase();
        self.niches
            .iter()
            .find(|n| n.name.to_lowercase() == wanted)
            .map(|n| n.expected_categories.as_slice())
    }
}

/// Load and validate the niche roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_niches(path: &Path) -> Result<NichesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::NichesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let niches_file: NichesFile = serde_yaml::from_str(&content)?;
    validate_niches(&niches_file)?;
    Ok(niches_file)
}

fn validate_niches(niches_file: &NichesFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for niche in &niches_file.niches {
        if niche.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "niche name must be non-empty".to_string(),
            ));
        }

        if niche.expected_categories.is_empty() {
            return Err(ConfigError::Validation(format!(
                "niche '{}' has no expected categories",
                niche.name
            )));
        }

        if !seen.insert(niche.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate niche name: '{}'",
                niche.name
            )));
        }
    }

    Ok(())
}
