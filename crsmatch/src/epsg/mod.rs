//! EPSG registry access.
//!
//! This module loads the PROJ `epsg` init file into an immutable,
//! in-memory list of [`RegistryEntry`] values. Lookups in [`crate::lookup`]
//! consume it through the [`RegistrySource`] trait so tests can supply a
//! small synthetic registry instead.
//!
//! # Data Source
//!
//! The file ships with PROJ (up to version 5) in its data directory:
//! `$PROJ_DATA/epsg`, `$PROJ_LIB/epsg` or e.g. `/usr/share/proj/epsg`.
//!
//! # Example
//!
//! ```ignore
//! use crsmatch::epsg::{EpsgCode, EpsgRegistry, RegistrySource};
//!
//! let registry = EpsgRegistry::from_file("/usr/share/proj/epsg")?;
//! if let Some(entry) = registry.get(EpsgCode::WGS84) {
//!     println!("{}: {}", entry.code(), entry.params());
//! }
//! ```

mod code;
pub mod locate;
mod parser;
mod registry;

pub use code::{EpsgCode, EpsgCodeError};
pub use locate::locate_epsg_file;
pub use parser::{EpsgFileParser, ParseError};
pub use registry::{EpsgRegistry, RegistryEntry, RegistryError, RegistrySource};
