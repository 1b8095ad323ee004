//! crsmatch CLI - Command-line interface
//!
//! This binary identifies EPSG codes for PROJ.4 CRS definitions and expands
//! codes into explicit parameters, using the crsmatch library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use runner::GlobalOptions;

#[derive(Parser)]
#[command(name = "crsmatch")]
#[command(version)]
#[command(about = "Match PROJ.4 coordinate reference systems to EPSG codes", long_about = None)]
struct Cli {
    /// Path to the PROJ epsg file (overrides registry.path and discovery)
    #[arg(long, global = true, value_name = "PATH")]
    registry: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the EPSG code best matching a CRS
    ///
    /// Prints the code, or 'no match'.
    Identify {
        /// PROJ.4 string, e.g. '+proj=longlat +datum=WGS84'
        #[arg(allow_hyphen_values = true)]
        crs: String,

        /// Only accept entries containing every parameter
        #[arg(long, conflicts_with = "fuzzy")]
        exact: bool,

        /// Fall back to the entry sharing the most parameters
        #[arg(long)]
        fuzzy: bool,
    },

    /// Print the full registry definition for a code or CRS
    Expand {
        /// EPSG code, e.g. 4326 or EPSG:4326 (takes precedence over --crs)
        #[arg(long, value_name = "CODE")]
        epsg: Option<String>,

        /// PROJ.4 string to resolve a code from
        #[arg(long, allow_hyphen_values = true)]
        crs: Option<String>,

        /// Print a flat JSON object instead of a PROJ string
        #[arg(long)]
        json: bool,
    },

    /// Print the registry entry for a code
    Show {
        /// EPSG code, e.g. 4326 or EPSG:4326
        code: String,
    },

    /// View and modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    let options = GlobalOptions {
        registry: cli.registry,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Identify { crs, exact, fuzzy } => {
            commands::identify::run(&options, &crs, exact, fuzzy)
        }
        Commands::Expand { epsg, crs, json } => {
            commands::expand::run(&options, epsg.as_deref(), crs.as_deref(), json)
        }
        Commands::Show { code } => commands::show::run(&options, &code),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_identify_accepts_proj_string() {
        let cli = Cli::try_parse_from(["crsmatch", "identify", "+proj=merc", "--fuzzy"]).unwrap();
        match cli.command {
            Commands::Identify { crs, exact, fuzzy } => {
                assert_eq!(crs, "+proj=merc");
                assert!(!exact);
                assert!(fuzzy);
            }
            _ => panic!("expected identify"),
        }
    }

    #[test]
    fn test_exact_and_fuzzy_conflict() {
        assert!(Cli::try_parse_from(["crsmatch", "identify", "+proj=merc", "--exact", "--fuzzy"]).is_err());
    }

    #[test]
    fn test_global_registry_flag() {
        let cli =
            Cli::try_parse_from(["crsmatch", "show", "4326", "--registry", "/tmp/epsg"]).unwrap();
        assert_eq!(cli.registry, Some(PathBuf::from("/tmp/epsg")));
    }
}
