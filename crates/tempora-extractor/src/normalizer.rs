//! The extraction pipeline

use tempora_domain::{
    AbstractEdtfDate, DateExtractor, DateNormalizationResult, InstantEdtfDate, MatchId,
};
use tempora_validator::Validator;
use tracing::{debug, trace};

use crate::sanitizer::{sanitize, SanitizePass};
use crate::strategies::{Strategy, DATE_PROPERTY_ORDER, GENERIC_PROPERTY_ORDER};
use crate::{NormalizerConfig, NormalizerError};

/// Sanitize passes tried after the raw input for date properties
const DATE_PROPERTY_PASSES: [SanitizePass; 2] = [SanitizePass::First, SanitizePass::Second];

/// Sanitize passes tried after the raw input for generic properties
const GENERIC_PROPERTY_PASSES: [SanitizePass; 1] = [SanitizePass::Generic];

/// The DatesNormalizer turns free-text date values into canonical EDTF dates
///
/// Strategies are tried in a fixed order and the first match wins. When the
/// raw value matches nothing, sanitized variants of it are tried in turn. A
/// match is then checked against the validator and, when it fails, repaired
/// by swapping interval ends or day and month.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct DatesNormalizer {
    config: NormalizerConfig,
    validator: Validator,
}

impl DatesNormalizer {
    /// Create a new normalizer with the given configuration
    pub fn new(config: NormalizerConfig) -> Result<Self, NormalizerError> {
        config.validate()?;
        let validator = Validator::new(config.validation.clone());
        Ok(Self { config, validator })
    }

    /// Create a normalizer with the default configuration
    pub fn default_config() -> Self {
        let config = NormalizerConfig::default();
        let validator = Validator::new(config.validation.clone());
        Self { config, validator }
    }

    /// Active configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize the value of a property that is expected to hold a date
    ///
    /// # Arguments
    ///
    /// * `value` - The free-text value
    ///
    /// # Returns
    ///
    /// The first match across the raw, first-time sanitized and second-time
    /// sanitized value, or a no-match result. Repairs that fail yield an
    /// `INVALID` no-match.
    pub fn normalize_date_property(&self, value: &str) -> DateNormalizationResult {
        let Some(input) = self.presanitize(value) else {
            return DateNormalizationResult::no_match();
        };
        let result = self.run_passes(&input, &DATE_PROPERTY_ORDER, &DATE_PROPERTY_PASSES);
        self.validate_and_fix(result)
    }

    /// Normalize the value of a property that may or may not hold a date
    ///
    /// Only complete dates (known down to the day) are kept.
    pub fn normalize_generic_property(&self, value: &str) -> DateNormalizationResult {
        let Some(input) = self.presanitize(value) else {
            return DateNormalizationResult::no_match();
        };
        let result = self.run_passes(&input, &GENERIC_PROPERTY_ORDER, &GENERIC_PROPERTY_PASSES);
        let result = self.validate_and_fix(result);

        match result.date() {
            Some(date) if !date.is_complete() => {
                trace!("Generic value {:?} is not a complete date: {}", input, date);
                DateNormalizationResult::no_match()
            }
            _ => result,
        }
    }

    /// Trim, fold NBSP and en dash, and enforce the length limit
    fn presanitize(&self, value: &str) -> Option<String> {
        let input = value
            .trim()
            .replace('\u{a0}', " ")
            .replace('\u{2013}', "-")
            .trim()
            .to_string();
        if input.is_empty() {
            return None;
        }
        if input.chars().count() > self.config.max_input_length {
            debug!(
                "Input of {} characters exceeds limit of {}",
                input.chars().count(),
                self.config.max_input_length
            );
            return None;
        }
        Some(input)
    }

    fn run_passes(
        &self,
        input: &str,
        order: &[Strategy],
        passes: &[SanitizePass],
    ) -> DateNormalizationResult {
        if let Some(result) = Self::first_match(order, input) {
            return result;
        }
        if !self.config.sanitize {
            return DateNormalizationResult::no_match();
        }

        for pass in passes {
            let Some(sanitized) = sanitize(input, *pass) else {
                trace!("{:?} sanitize pass left nothing for {:?}", pass, input);
                continue;
            };
            debug!(
                "{:?} sanitize pass: {:?} -> {:?} ({:?})",
                pass, input, sanitized.value, sanitized.operation
            );
            if let Some(result) = Self::first_match(order, &sanitized.value) {
                let result = if sanitized.operation.is_circa() {
                    result.map_date(Self::approximate)
                } else {
                    result
                };
                let result = if result.match_id() == MatchId::Edtf {
                    result.with_match_id(MatchId::EdtfCleaned)
                } else {
                    result
                };
                return result.with_sanitize_operation(sanitized.operation);
            }
        }
        DateNormalizationResult::no_match()
    }

    fn first_match(order: &[Strategy], input: &str) -> Option<DateNormalizationResult> {
        order.iter().find_map(|strategy| {
            let result = strategy.extract(input);
            if result.is_match() {
                debug!("Strategy {} matched {:?}", strategy.name(), input);
                Some(result)
            } else {
                None
            }
        })
    }

    fn approximate(date: AbstractEdtfDate) -> AbstractEdtfDate {
        date.map_instants(|instant| {
            let qualification = instant.qualification().with_approximate();
            instant.with_qualification(qualification)
        })
    }

    /// Check a match and try the interval and day/month repairs
    fn validate_and_fix(&self, result: DateNormalizationResult) -> DateNormalizationResult {
        if !self.config.validate_and_fix {
            return result;
        }
        let Some(date) = result.date().cloned() else {
            return result;
        };
        if self.validator.validate(&date).is_valid() {
            return result;
        }

        if let AbstractEdtfDate::Interval(interval) = &date {
            let swapped = AbstractEdtfDate::from(interval.clone().swapped());
            if self.validator.validate(&swapped).is_valid() {
                debug!("Swapped interval ends: {} -> {}", date, swapped);
                return result.map_date(|_| swapped);
            }
        }

        let transposed = date
            .clone()
            .map_instants(InstantEdtfDate::with_day_and_month_swapped);
        if transposed != date && self.validator.validate(&transposed).is_valid() {
            debug!("Swapped day and month: {} -> {}", date, transposed);
            return result.map_date(|_| transposed);
        }

        debug!("Date {} is invalid and could not be repaired", date);
        DateNormalizationResult::invalid()
    }
}
