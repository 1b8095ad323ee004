//! `crsmatch identify`: find the EPSG code best matching a CRS.

use crate::error::CliError;
use crate::runner::{CliRunner, GlobalOptions};

/// Run the identify command.
///
/// Prints the code, or `no match` when nothing qualifies.
pub fn run(options: &GlobalOptions, crs: &str, exact: bool, fuzzy: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(options)?;
    runner.log_startup("identify");

    let exact_match = exact_match_mode(runner.config().lookup.exact_match, exact, fuzzy);
    let lookup = runner.lookup()?;

    match lookup.epsg_from_crs(Some(crs.into()), exact_match)? {
        Some(code) => println!("{}", code),
        None => println!("no match"),
    }

    Ok(())
}

/// `--exact` and `--fuzzy` override the configured default.
fn exact_match_mode(configured: bool, exact: bool, fuzzy: bool) -> bool {
    match (exact, fuzzy) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => configured,
    }
}
