//! Configuration for crsmatch.
//!
//! Settings are read from `~/.crsmatch/config.ini`. A missing file is not an
//! error; every setting has a default.
//!
//! # Example
//!
//! ```
//! use crsmatch::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "lookup.exact_match".parse().unwrap();
//! key.set(&mut config, "false").unwrap();
//! assert_eq!(key.get(&config), "false");
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_EXACT_MATCH, DEFAULT_LOG_LEVEL, DEFAULT_PREFERRED_CODES, LOG_LEVELS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    format_code_list, parse_code_list, ConfigFile, LoggingSettings, LookupSettings,
    RegistrySettings,
};
