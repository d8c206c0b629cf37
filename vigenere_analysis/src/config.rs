//! Analysis configuration
//!
//! Settings are validated once, when [`AnalysisConfigBuilder::build`] runs, so
//! analysis never sees an invalid key-length range, threshold or table.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::frequency::{FrequencyTable, Language};

/// Upper bound (exclusive) of the key-length search
pub const DEFAULT_MAX_KEY_LENGTH: usize = 50;

/// Minimum average IOC that accepts a key length. English sits around 0.066-0.072.
pub const DEFAULT_IOC_THRESHOLD: f64 = 0.07;

/// Shortest key length the search considers
pub const MIN_KEY_LENGTH: usize = 2;

/// How the key-length search picks its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Accept the first length whose average IOC exceeds the threshold.
    #[default]
    FirstAboveThreshold,
    /// Scan the whole range and accept the highest average IOC, if it exceeds the threshold.
    BestInRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    max_key_length: usize,
    ioc_threshold: f64,
    frequencies: FrequencyTable,
    strategy: SearchStrategy,
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Parses a TOML document and layers it over the defaults.
    ///
    /// # Errors
    ///
    /// Malformed TOML, unknown keys, or any value rejected by validation.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        ConfigFile::from_toml_str(source)?
            .apply(Self::builder())?
            .build()
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    pub fn ioc_threshold(&self) -> f64 {
        self.ioc_threshold
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            ioc_threshold: DEFAULT_IOC_THRESHOLD,
            frequencies: FrequencyTable::ENGLISH,
            strategy: SearchStrategy::FirstAboveThreshold,
        }
    }
}

/// Builder for [`AnalysisConfig`], starting from the defaults.
#[derive(Debug, Clone)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

impl AnalysisConfigBuilder {
    pub fn max_key_length(mut self, max_key_length: usize) -> Self {
        self.config.max_key_length = max_key_length;
        self
    }

    pub fn ioc_threshold(mut self, ioc_threshold: f64) -> Self {
        self.config.ioc_threshold = ioc_threshold;
        self
    }

    pub fn frequencies(mut self, frequencies: FrequencyTable) -> Self {
        self.config.frequencies = frequencies;
        self
    }

    /// Shorthand for the built-in table of `language`.
    pub fn language(self, language: Language) -> Self {
        self.frequencies(language.table())
    }

    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::MaxKeyLengthTooSmall`] if `max_key_length < 2`
    /// * [`ConfigError::ThresholdOutOfRange`] if the threshold is outside [0, 1] or NaN
    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let config = self.config;

        if config.max_key_length < MIN_KEY_LENGTH {
            return Err(ConfigError::MaxKeyLengthTooSmall(config.max_key_length));
        }

        if !(0.0..=1.0).contains(&config.ioc_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(config.ioc_threshold));
        }

        Ok(config)
    }
}

/// On-disk configuration. Every key is optional.
///
/// ```toml
/// max_key_length = 30
/// ioc_threshold = 0.065
/// strategy = "best-in-range"
/// language = "german"
///
/// [frequencies]   # overrides `language`; all 26 letters required
/// a = 0.0817
/// # ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub max_key_length: Option<usize>,
    pub ioc_threshold: Option<f64>,
    pub strategy: Option<SearchStrategy>,
    pub language: Option<Language>,
    pub frequencies: Option<BTreeMap<String, f64>>,
}

impl ConfigFile {
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Applies the values present in the file on top of `builder`.
    ///
    /// # Errors
    ///
    /// Any rejection from [`FrequencyTable::from_entries`].
    pub fn apply(self, mut builder: AnalysisConfigBuilder) -> Result<AnalysisConfigBuilder, ConfigError> {
        if let Some(max_key_length) = self.max_key_length {
            builder = builder.max_key_length(max_key_length);
        }
        if let Some(ioc_threshold) = self.ioc_threshold {
            builder = builder.ioc_threshold(ioc_threshold);
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        if let Some(language) = self.language {
            builder = builder.language(language);
        }
        if let Some(frequencies) = self.frequencies {
            builder = builder.frequencies(FrequencyTable::try_from(frequencies)?);
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::ENGLISH_FREQUENCIES;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::builder().build().unwrap();
        assert_eq!(config.max_key_length(), 50);
        assert_eq!(config.ioc_threshold(), 0.07);
        assert_eq!(config.strategy(), SearchStrategy::FirstAboveThreshold);
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_max_key_length_validation() {
        assert_eq!(
            AnalysisConfig::builder().max_key_length(1).build(),
            Err(ConfigError::MaxKeyLengthTooSmall(1))
        );
        assert!(AnalysisConfig::builder().max_key_length(2).build().is_ok());
    }

    #[test]
    fn test_threshold_validation() {
        assert_eq!(
            AnalysisConfig::builder().ioc_threshold(1.5).build(),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
        assert_eq!(
            AnalysisConfig::builder().ioc_threshold(-0.1).build(),
            Err(ConfigError::ThresholdOutOfRange(-0.1))
        );
        assert!(matches!(
            AnalysisConfig::builder().ioc_threshold(f64::NAN).build(),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert!(AnalysisConfig::builder().ioc_threshold(0.0).build().is_ok());
        assert!(AnalysisConfig::builder().ioc_threshold(1.0).build().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            max_key_length = 30
            ioc_threshold = 0.065
            strategy = "best-in-range"
            language = "german"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_key_length(), 30);
        assert_eq!(config.ioc_threshold(), 0.065);
        assert_eq!(config.strategy(), SearchStrategy::BestInRange);
        assert_eq!(config.frequencies(), &FrequencyTable::GERMAN);
    }

    #[test]
    fn test_from_toml_str_frequency_table() {
        let mut document = String::from("[frequencies]\n");
        for (i, f) in ENGLISH_FREQUENCIES.iter().enumerate() {
            document.push_str(&format!("{} = {}\n", (b'a' + i as u8) as char, f));
        }

        let config = AnalysisConfig::from_toml_str(&document).unwrap();
        assert_eq!(config.frequencies(), &FrequencyTable::ENGLISH);
    }

    #[test]
    fn test_from_toml_str_incomplete_table() {
        let result = AnalysisConfig::from_toml_str("[frequencies]\na = 0.5\n");
        assert_eq!(result, Err(ConfigError::MissingLetter('b')));
    }

    #[test]
    fn test_from_toml_str_letter_in_both_cases() {
        let mut document = String::from("[frequencies]\nA = 0.9\n");
        for (i, f) in ENGLISH_FREQUENCIES.iter().enumerate() {
            document.push_str(&format!("{} = {}\n", (b'a' + i as u8) as char, f));
        }

        let result = AnalysisConfig::from_toml_str(&document);
        assert_eq!(result, Err(ConfigError::DuplicateLetter('a')));
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_keys() {
        let result = AnalysisConfig::from_toml_str("max_keylength = 10\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_toml_str_validates_values() {
        let result = AnalysisConfig::from_toml_str("max_key_length = 0\n");
        assert_eq!(result, Err(ConfigError::MaxKeyLengthTooSmall(0)));
    }
}
