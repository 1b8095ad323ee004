//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::settings::*;
use crate::epsg::EpsgCode;

// =============================================================================
// Lookup defaults
// =============================================================================

/// Only exact matches are reported unless fuzzy matching is requested.
pub const DEFAULT_EXACT_MATCH: bool = true;

/// WGS 84 and Web Mercator win ties between equally good matches.
pub const DEFAULT_PREFERRED_CODES: [EpsgCode; 2] = [EpsgCode::WGS84, EpsgCode::WEB_MERCATOR];

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log level. Lookups are quiet unless asked otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            registry: RegistrySettings::default(),
            lookup: LookupSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            exact_match: DEFAULT_EXACT_MATCH,
            preferred_codes: DEFAULT_PREFERRED_CODES.to_vec(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}
