//! `crsmatch expand`: print the explicit parameters for a code or CRS.

use crsmatch::{Crs, CrsParams};

use super::parse_code;
use crate::error::CliError;
use crate::runner::{CliRunner, GlobalOptions};

/// Run the expand command.
///
/// `epsg` wins over `crs` when both are given.
pub fn run(
    options: &GlobalOptions,
    epsg: Option<&str>,
    crs: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let code = epsg.map(parse_code).transpose()?;

    let runner = CliRunner::new(options)?;
    runner.log_startup("expand");

    let lookup = runner.lookup()?;
    let params = lookup.explicit_crs_from_epsg(crs.map(Crs::from), code)?;

    println!("{}", format_params(&params, json)?);
    Ok(())
}

/// Render parameters as a PROJ string, or as a flat JSON object.
fn format_params(params: &CrsParams, json: bool) -> Result<String, CliError> {
    if json {
        serde_json::to_string(params).map_err(|e| CliError::Output(e.to_string()))
    } else {
        Ok(params.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CrsParams {
        CrsParams::new()
            .with("proj", "longlat")
            .with("datum", "WGS84")
            .with("no_defs", true)
            .with("init", "epsg:4326")
    }

    #[test]
    fn test_format_proj_string() {
        assert_eq!(
            format_params(&params(), false).unwrap(),
            "+datum=WGS84 +init=epsg:4326 +no_defs +proj=longlat"
        );
    }

    #[test]
    fn test_format_json() {
        assert_eq!(
            format_params(&params(), true).unwrap(),
            r#"{"datum":"WGS84","init":"epsg:4326","no_defs":true,"proj":"longlat"}"#
        );
    }
}
