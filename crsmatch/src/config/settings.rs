//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::epsg::{EpsgCode, EpsgCodeError};
use crate::lookup::MatchPolicy;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Registry file location
    pub registry: RegistrySettings,
    /// Matching behaviour
    pub lookup: LookupSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrySettings {
    /// Path to the PROJ `epsg` file. `None` searches the PROJ data directories.
    pub path: Option<PathBuf>,
}

/// Lookup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupSettings {
    /// Default for `identify`: only accept exact matches.
    pub exact_match: bool,
    /// Codes preferred when several entries match equally well.
    pub preferred_codes: Vec<EpsgCode>,
}

impl LookupSettings {
    /// Tie-break policy built from these settings.
    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.preferred_codes.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Level filter used when RUST_LOG is not set.
    pub level: String,
    /// Optional log file. `None` logs to stderr only.
    pub file: Option<PathBuf>,
}

/// Parse a comma separated code list such as `4326, 3857`.
///
/// An empty string yields an empty list.
pub fn parse_code_list(value: &str) -> Result<Vec<EpsgCode>, EpsgCodeError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<EpsgCode>())
        .collect()
}

/// Format a code list for the config file.
pub fn format_code_list(codes: &[EpsgCode]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_list() {
        let codes = parse_code_list("4326, 3857,epsg:2154").unwrap();
        let values: Vec<u32> = codes.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![4326, 3857, 2154]);
    }

    #[test]
    fn test_parse_empty_code_list() {
        assert!(parse_code_list("").unwrap().is_empty());
        assert!(parse_code_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_code_list_rejects_garbage() {
        assert!(parse_code_list("4326,abc").is_err());
    }

    #[test]
    fn test_format_code_list() {
        assert_eq!(
            format_code_list(&[EpsgCode::WGS84, EpsgCode::WEB_MERCATOR]),
            "4326,3857"
        );
        assert_eq!(format_code_list(&[]), "");
    }

    #[test]
    fn test_match_policy_from_settings() {
        let settings = LookupSettings {
            exact_match: true,
            preferred_codes: vec![EpsgCode::WEB_MERCATOR],
        };
        assert_eq!(
            settings.match_policy().preferred_codes(),
            &[EpsgCode::WEB_MERCATOR]
        );
    }
}
