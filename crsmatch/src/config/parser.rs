//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::LOG_LEVELS;
use super::file::ConfigFileError;
use super::settings::{parse_code_list, ConfigFile};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [registry] section
    if let Some(section) = ini.section(Some("registry")) {
        if let Some(v) = section.get("path") {
            config.registry.path = optional_path(v);
        }
    }

    // [lookup] section
    if let Some(section) = ini.section(Some("lookup")) {
        if let Some(v) = section.get("exact_match") {
            config.lookup.exact_match =
                parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "lookup".to_string(),
                    key: "exact_match".to_string(),
                    value: v.to_string(),
                    reason: "must be 'true' or 'false'".to_string(),
                })?;
        }
        if let Some(v) = section.get("preferred_codes") {
            config.lookup.preferred_codes =
                parse_code_list(v).map_err(|e| ConfigFileError::InvalidValue {
                    section: "lookup".to_string(),
                    key: "preferred_codes".to_string(),
                    value: v.to_string(),
                    reason: e.to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            let v = v.trim().to_lowercase();
            if !LOG_LEVELS.contains(&v.as_str()) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "level".to_string(),
                    value: v,
                    reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
                });
            }
            config.logging.level = v;
        }
        if let Some(v) = section.get("file") {
            config.logging.file = optional_path(v);
        }
    }

    Ok(config)
}

/// Parse a boolean setting, accepting the usual spellings.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Empty values mean "not set".
pub(super) fn optional_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(expand_tilde(value))
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
