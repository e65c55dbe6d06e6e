//! Configuration for the normalizer

use serde::{Deserialize, Serialize};
use tempora_validator::ValidationConfig;

use crate::NormalizerError;

/// Configuration for [`DatesNormalizer`](crate::DatesNormalizer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Retry unmatched values after stripping brackets, circa markers and notes
    pub sanitize: bool,

    /// Check matches and try swapping interval ends or day and month when invalid
    pub validate_and_fix: bool,

    /// Longer inputs (in characters) are not matched at all
    pub max_input_length: usize,

    /// Rules used by the validate-and-fix step
    pub validation: ValidationConfig,
}

impl Default for NormalizerConfig {
    /// Sanitizing and repair on, ordering checks only
    fn default() -> Self {
        Self {
            sanitize: true,
            validate_and_fix: true,
            max_input_length: 256,
            validation: ValidationConfig::default(),
        }
    }
}

impl NormalizerConfig {
    /// Strict preset: calendar, ordering and future checks during repair
    pub fn strict() -> Self {
        Self {
            validation: ValidationConfig::strict(),
            ..Self::default()
        }
    }

    /// Raw preset: grammars only, no sanitizing and no repair
    pub fn raw() -> Self {
        Self {
            sanitize: false,
            validate_and_fix: false,
            validation: ValidationConfig::permissive(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), NormalizerError> {
        if self.max_input_length == 0 {
            return Err(NormalizerError::Config(
                "max_input_length must be greater than 0".to_string(),
            ));
        }
        if self.max_input_length > 65_536 {
            return Err(NormalizerError::Config(format!(
                "max_input_length cannot exceed 65536 (got {})",
                self.max_input_length
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, NormalizerError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, NormalizerError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
