//! Command implementations.

pub mod batch;
pub mod config;
pub mod normalize;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::normalize::{execute_normalize, normalize_values};

use tempora_domain::DateNormalizationResult;
use tempora_extractor::DatesNormalizer;

/// Which pipeline entry point values go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMode {
    /// Date-valued property
    Date,
    /// Property that may hold a complete date
    Generic,
}

impl PropertyMode {
    /// Normalize one value in this mode.
    pub fn normalize(&self, normalizer: &DatesNormalizer, value: &str) -> DateNormalizationResult {
        match self {
            PropertyMode::Date => normalizer.normalize_date_property(value),
            PropertyMode::Generic => normalizer.normalize_generic_property(value),
        }
    }
}
