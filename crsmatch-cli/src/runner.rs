//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and registry loading
//! to reduce duplication across command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crsmatch::config::ConfigFile;
use crsmatch::epsg::EpsgRegistry;
use crsmatch::logging::{init_logging, LoggingGuard};
use crsmatch::lookup::CrsLookup;

use crate::error::CliError;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Registry file overriding config and discovery
    pub registry: Option<PathBuf>,
    /// Force debug logging
    pub verbose: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    registry_override: Option<PathBuf>,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let level = if options.verbose {
            "debug"
        } else {
            config.logging.level.as_str()
        };

        let logging_guard = init_logging(level, config.logging.file.as_deref())
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            registry_override: options.registry.clone(),
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("crsmatch v{}", crsmatch::VERSION);
        info!("crsmatch CLI: {} command", command);
    }

    /// Registry file to load: `--registry`, then `registry.path`, then discovery.
    fn registry_path(&self) -> Option<&PathBuf> {
        self.registry_override
            .as_ref()
            .or(self.config.registry.path.as_ref())
    }

    /// Load the epsg registry.
    pub fn load_registry(&self) -> Result<EpsgRegistry, CliError> {
        let registry = match self.registry_path() {
            Some(path) => {
                info!(path = %path.display(), "Loading configured registry");
                EpsgRegistry::from_file(path)?
            }
            None => EpsgRegistry::from_default_location()?,
        };
        Ok(registry)
    }

    /// Build a lookup over the registry using the configured tie-break policy.
    pub fn lookup(&self) -> Result<CrsLookup, CliError> {
        let registry = self.load_registry()?;
        Ok(CrsLookup::new(Arc::new(registry)).with_policy(self.config.lookup.match_policy()))
    }
}
