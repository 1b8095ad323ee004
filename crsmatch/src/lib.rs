//! crsmatch - EPSG code identification for PROJ.4 coordinate reference systems
//!
//! This library matches PROJ.4 style CRS definitions against the PROJ `epsg`
//! registry file, and expands EPSG codes back into explicit parameter maps.
//!
//! # High-Level API
//!
//! ```ignore
//! use crsmatch::{epsg_from_crs, explicit_crs_from_epsg, EpsgRegistry};
//!
//! let registry = EpsgRegistry::from_default_location()?;
//!
//! // "+proj=longlat" matches several entries; WGS 84 wins the tie
//! let code = epsg_from_crs(&registry, Some("+proj=longlat".into()), true)?;
//!
//! // Expand the code into its full definition, tagged init=epsg:4326
//! let params = explicit_crs_from_epsg(&registry, None, code)?;
//! println!("{}", params);
//! ```
//!
//! # Modules
//!
//! - [`crs`] - CRS parameter maps, parsing and rendering
//! - [`epsg`] - EPSG codes and the registry file
//! - [`lookup`] - code resolution and expansion
//! - [`config`] - `~/.crsmatch/config.ini`
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod crs;
pub mod epsg;
pub mod logging;
pub mod lookup;

pub use crs::{Crs, CrsParams, ParamValue};
pub use epsg::{EpsgCode, EpsgRegistry, RegistryEntry, RegistrySource};
pub use lookup::{epsg_from_crs, explicit_crs_from_epsg, CrsLookup, LookupError, MatchPolicy};

/// Version of the crsmatch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_top_level_api() {
        let registry = vec![RegistryEntry::new(
            EpsgCode::WGS84,
            "+proj=longlat +datum=WGS84 +no_defs",
        )];
        let code = epsg_from_crs(&registry, Some("+proj=longlat".into()), true).unwrap();
        assert_eq!(code, Some(EpsgCode::WGS84));

        let params = explicit_crs_from_epsg(&registry, None, code).unwrap();
        assert_eq!(params.to_string(), "+datum=WGS84 +init=epsg:4326 +no_defs +proj=longlat");
    }
}
