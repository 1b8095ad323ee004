//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use crsmatch::config::ConfigFileError;
use crsmatch::epsg::{EpsgCodeError, RegistryError};
use crsmatch::lookup::LookupError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to load the epsg registry
    Registry(RegistryError),
    /// Lookup failed
    Lookup(LookupError),
    /// Malformed EPSG code argument
    InvalidCode { input: String, error: EpsgCodeError },
    /// Failed to render output
    Output(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Registry(RegistryError::NotLocated | RegistryError::NotFound(_)) => {
                eprintln!();
                eprintln!("crsmatch needs the PROJ 'epsg' init file. Point at it with one of:");
                eprintln!("  1. crsmatch --registry /path/to/epsg <command>");
                eprintln!("  2. crsmatch config set registry.path /path/to/epsg");
                eprintln!("  3. export PROJ_DATA=/directory/containing/epsg");
            }
            CliError::Lookup(LookupError::InvalidInput(_)) => {
                eprintln!();
                eprintln!("Give the CRS as a PROJ.4 string, for example:");
                eprintln!("  crsmatch identify '+proj=longlat +datum=WGS84'");
            }
            CliError::InvalidCode { .. } => {
                eprintln!();
                eprintln!("EPSG codes look like '4326' or 'EPSG:4326'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Registry(e) => write!(f, "Failed to load registry: {}", e),
            CliError::Lookup(e) => write!(f, "Lookup failed: {}", e),
            CliError::InvalidCode { input, error } => {
                write!(f, "Invalid EPSG code '{}': {}", input, error)
            }
            CliError::Output(msg) => write!(f, "Failed to render output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Registry(e) => Some(e),
            CliError::Lookup(e) => Some(e),
            CliError::InvalidCode { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::Registry(e)
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        CliError::Lookup(e)
    }
}
