//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`expand`] - Expand a code or CRS into explicit parameters
//! - [`identify`] - Find the EPSG code for a CRS
//! - [`show`] - Print a registry entry

pub mod config;
pub mod expand;
pub mod identify;
pub mod show;

use crsmatch::EpsgCode;

use crate::error::CliError;

/// Parse an EPSG code argument such as `4326` or `EPSG:4326`.
pub(crate) fn parse_code(input: &str) -> Result<EpsgCode, CliError> {
    input.parse().map_err(|error| CliError::InvalidCode {
        input: input.to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("EPSG:3857").unwrap(), EpsgCode::WEB_MERCATOR);
        assert!(matches!(
            parse_code("wgs84"),
            Err(CliError::InvalidCode { .. })
        ));
    }
}
