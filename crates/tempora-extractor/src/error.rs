//! Error types for the normalizer

use thiserror::Error;

/// Errors that can occur while building or configuring a normalizer
///
/// Normalizing a value never fails: a string no grammar recognizes is a
/// `NoMatch` result, not an error.
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    /// TOML serialization error
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(String),
}

impl From<toml::de::Error> for NormalizerError {
    fn from(e: toml::de::Error) -> Self {
        NormalizerError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for NormalizerError {
    fn from(e: toml::ser::Error) -> Self {
        NormalizerError::TomlSerialize(e.to_string())
    }
}
