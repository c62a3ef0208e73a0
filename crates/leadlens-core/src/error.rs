use thiserror::Error;

/// Errors from loading or validating the niche roster configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The roster file could not be read.
    #[error("failed to read niches file at {path}: {source}")]
    NichesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The roster file is not valid YAML for the expected shape.
    #[error("failed to parse niches file: {0}")]
    NichesFileParse(#[from] serde_yaml::Error),

    /// The roster parsed but violates a validation rule.
    #[error("niches validation error: {0}")]
    Validation(String),
}
