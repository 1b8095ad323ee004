//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::defaults::LOG_LEVELS;
use super::parser::{optional_path, parse_bool};
use super::settings::{format_code_list, parse_code_list, ConfigFile};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Registry settings
    RegistryPath,

    // Lookup settings
    LookupExactMatch,
    LookupPreferredCodes,

    // Logging settings
    LoggingLevel,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registry.path" => Ok(ConfigKey::RegistryPath),

            "lookup.exact_match" => Ok(ConfigKey::LookupExactMatch),
            "lookup.preferred_codes" => Ok(ConfigKey::LookupPreferredCodes),

            "logging.level" => Ok(ConfigKey::LoggingLevel),
            "logging.file" => Ok(ConfigKey::LoggingFile),

            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "lookup.exact_match").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::RegistryPath => "registry.path",
            ConfigKey::LookupExactMatch => "lookup.exact_match",
            ConfigKey::LookupPreferredCodes => "lookup.preferred_codes",
            ConfigKey::LoggingLevel => "logging.level",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "lookup").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "exact_match").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::RegistryPath => config
                .registry
                .path
                .as_ref()
                .map(|p| path_to_display(p))
                .unwrap_or_default(),
            ConfigKey::LookupExactMatch => config.lookup.exact_match.to_string(),
            ConfigKey::LookupPreferredCodes => format_code_list(&config.lookup.preferred_codes),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| path_to_display(p))
                .unwrap_or_default(),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    /// On error the config is left unchanged.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;

        match self {
            ConfigKey::RegistryPath => {
                config.registry.path = optional_path(value);
            }
            ConfigKey::LookupExactMatch => {
                config.lookup.exact_match = parse_bool(value).ok_or_else(|| self.invalid(value))?;
            }
            ConfigKey::LookupPreferredCodes => {
                config.lookup.preferred_codes =
                    parse_code_list(value).map_err(|e| self.failed(e.to_string()))?;
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = value.trim().to_lowercase();
            }
            ConfigKey::LoggingFile => {
                config.logging.file = optional_path(value);
            }
        }
        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| self.failed(reason))
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::RegistryPath => Box::new(OptionalPathSpec),
            ConfigKey::LookupExactMatch => Box::new(BooleanSpec),
            ConfigKey::LookupPreferredCodes => Box::new(CodeListSpec),
            ConfigKey::LoggingLevel => Box::new(OneOfSpec::new(&LOG_LEVELS)),
            ConfigKey::LoggingFile => Box::new(OptionalPathSpec),
        }
    }

    fn failed(&self, reason: String) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        }
    }

    fn invalid(&self, value: &str) -> ConfigKeyError {
        self.failed(format!("'{}' is not accepted", value))
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::RegistryPath,
            ConfigKey::LookupExactMatch,
            ConfigKey::LookupPreferredCodes,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification that requires the value to be one of a set of options.
struct OneOfSpec {
    options: &'static [&'static str],
}

impl OneOfSpec {
    fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl ValueSpecification for OneOfSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.trim().to_lowercase();
        if self.options.iter().any(|opt| *opt == lower) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Specification for boolean values.
struct BooleanSpec;

impl ValueSpecification for BooleanSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_bool(value)
            .map(|_| ())
            .ok_or_else(|| "must be true/false, yes/no, 1/0, or on/off".to_string())
    }
}

/// Specification for comma separated EPSG code lists (empty allowed).
struct CodeListSpec;

impl ValueSpecification for CodeListSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_code_list(value)
            .map(|_| ())
            .map_err(|e| format!("must be a comma separated list of EPSG codes ({})", e))
    }
}

/// Specification for optional path values (empty allowed).
struct OptionalPathSpec;

impl ValueSpecification for OptionalPathSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epsg::EpsgCode;
    use std::path::PathBuf;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "lookup.exact_match".parse::<ConfigKey>().unwrap(),
            ConfigKey::LookupExactMatch
        );
        assert_eq!(
            "registry.path".parse::<ConfigKey>().unwrap(),
            ConfigKey::RegistryPath
        );
        // Case insensitive
        assert_eq!(
            "LOGGING.LEVEL".parse::<ConfigKey>().unwrap(),
            ConfigKey::LoggingLevel
        );
        assert!("invalid.key".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_key_name_parts() {
        assert_eq!(ConfigKey::LookupPreferredCodes.section(), "lookup");
        assert_eq!(ConfigKey::LookupPreferredCodes.key_name(), "preferred_codes");
        assert_eq!(ConfigKey::RegistryPath.section(), "registry");
        assert_eq!(ConfigKey::RegistryPath.key_name(), "path");
    }

    #[test]
    fn test_names_round_trip() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();

        assert_eq!(ConfigKey::RegistryPath.get(&config), "");
        assert_eq!(ConfigKey::LookupExactMatch.get(&config), "true");
        assert_eq!(ConfigKey::LookupPreferredCodes.get(&config), "4326,3857");
        assert_eq!(ConfigKey::LoggingLevel.get(&config), "warn");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::LookupExactMatch.set(&mut config, "no").unwrap();
        assert!(!config.lookup.exact_match);

        ConfigKey::LookupPreferredCodes
            .set(&mut config, "3857, EPSG:4326")
            .unwrap();
        assert_eq!(
            config.lookup.preferred_codes,
            vec![EpsgCode::WEB_MERCATOR, EpsgCode::WGS84]
        );

        ConfigKey::LoggingLevel.set(&mut config, "DEBUG").unwrap();
        assert_eq!(config.logging.level, "debug");

        ConfigKey::RegistryPath
            .set(&mut config, "/usr/share/proj/epsg")
            .unwrap();
        assert_eq!(
            config.registry.path,
            Some(PathBuf::from("/usr/share/proj/epsg"))
        );
    }

    #[test]
    fn test_validate_boolean() {
        for valid in &["true", "false", "yes", "no", "1", "0", "on", "off"] {
            assert!(
                ConfigKey::LookupExactMatch.validate(valid).is_ok(),
                "Expected '{}' to be valid",
                valid
            );
        }
        assert!(ConfigKey::LookupExactMatch.validate("maybe").is_err());
    }

    #[test]
    fn test_validate_code_list() {
        assert!(ConfigKey::LookupPreferredCodes.validate("").is_ok());
        assert!(ConfigKey::LookupPreferredCodes.validate("4326").is_ok());
        assert!(ConfigKey::LookupPreferredCodes.validate("4326,0").is_err());
        assert!(ConfigKey::LookupPreferredCodes.validate("wgs84").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(ConfigKey::LoggingLevel.validate("trace").is_ok());
        assert!(ConfigKey::LoggingLevel.validate("Info").is_ok());
        assert!(ConfigKey::LoggingLevel.validate("verbose").is_err());
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();

        let result = ConfigKey::LoggingLevel.set(&mut config, "loud");
        assert!(matches!(
            result,
            Err(ConfigKeyError::ValidationFailed { .. })
        ));

        // Config should be unchanged
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_clear_optional_value() {
        let mut config = ConfigFile::default();

        ConfigKey::LoggingFile
            .set(&mut config, "/tmp/crsmatch.log")
            .unwrap();
        assert!(config.logging.file.is_some());

        ConfigKey::LoggingFile.set(&mut config, "").unwrap();
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_all_keys() {
        let keys = ConfigKey::all();
        assert_eq!(keys.len(), 5);
        assert!(keys.contains(&ConfigKey::RegistryPath));
        assert!(keys.contains(&ConfigKey::LoggingFile));
    }
}
