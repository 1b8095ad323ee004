//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::{format_code_list, ConfigFile};

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let registry_path = config
        .registry
        .path
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[registry]
; Path to the PROJ epsg init file (plain or .gz).
; If empty, searches $PROJ_DATA, $PROJ_LIB and the usual PROJ data directories.
; Example: path = /usr/share/proj/epsg
path = {}

[lookup]
; When true, 'identify' only reports codes whose definition contains every
; given parameter. Override per call with --exact or --fuzzy.
exact_match = {}
; Codes preferred when several registry entries match equally well
; (comma separated, empty to always pick the shortest definition)
preferred_codes = {}

[logging]
; Log level when RUST_LOG is not set: error, warn, info, debug, trace
level = {}
; Optional log file. If empty, logs go to stderr only.
file = {}
"#,
        registry_path,
        config.lookup.exact_match,
        format_code_list(&config.lookup.preferred_codes),
        config.logging.level,
        log_file,
    )
}

pub(super) fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
