//! `crsmatch show`: print a registry entry.

use crsmatch::RegistryEntry;

use super::parse_code;
use crate::error::CliError;
use crate::runner::{CliRunner, GlobalOptions};

/// Run the show command.
pub fn run(options: &GlobalOptions, code: &str) -> Result<(), CliError> {
    let code = parse_code(code)?;

    let runner = CliRunner::new(options)?;
    runner.log_startup("show");

    let lookup = runner.lookup()?;
    let entry = lookup.entry(code)?;

    print!("{}", describe(entry));
    Ok(())
}

fn describe(entry: &RegistryEntry) -> String {
    let title = match entry.name() {
        Some(name) => format!("EPSG:{} - {}", entry.code(), name),
        None => format!("EPSG:{}", entry.code()),
    };
    format!("{}\n{}\n", title, entry.params())
}
