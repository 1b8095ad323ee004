//! PROJ.4 parameter handling
//!
//! Converts between PROJ.4 strings (`+proj=merc +datum=WGS84`) and
//! [`CrsParams`] maps. Unrecognised parameter names are dropped so that
//! stray tokens never take part in registry matching.

mod types;

pub use types::{Crs, CrsParams, ParamValue, INIT_KEY};

/// Parameter names recognised by PROJ.4.
pub const KNOWN_PARAMS: &[&str] = &[
    "a", "alpha", "approx", "axis", "azi", "b", "belgium", "czech", "datum", "e", "ellps",
    "es", "f", "gamma", "geoc", "geoidgrids", "guam", "h", "init", "k", "k_0", "lat_0",
    "lat_1", "lat_2", "lat_b", "lat_ts", "lon_0", "lon_1", "lon_2", "lon_wrap", "lonc",
    "lsat", "m", "M", "n", "nadgrids", "no_cut", "no_defs", "no_off", "no_rot", "no_uoff",
    "ns", "o_alpha", "o_lat_1", "o_lat_2", "o_lat_c", "o_lat_p", "o_lon_1", "o_lon_2",
    "o_lon_c", "o_lon_p", "o_proj", "over", "path", "pm", "proj", "q", "R", "R_A", "R_a",
    "R_g", "R_h", "R_lat_a", "R_lat_g", "R_V", "rf", "south", "sweep", "t", "theta",
    "tilt", "title", "to_meter", "towgs84", "units", "vto_meter", "vunits", "W", "wktext",
    "x_0", "y_0", "zone",
];

/// Returns true if `key` is a recognised PROJ.4 parameter name.
pub fn is_known_param(key: &str) -> bool {
    KNOWN_PARAMS.contains(&key)
}

/// Parse a PROJ.4 string into parameters.
///
/// Tokens are whitespace separated with an optional leading `+`. A token
/// without `=` is a flag and becomes `true`. Unknown keys are skipped, so
/// empty or unrecognisable text yields an empty map.
pub fn parse_params(text: &str) -> CrsParams {
    let mut params = CrsParams::new();

    for token in text.split_whitespace() {
        let token = token.trim_start_matches('+');
        if token.is_empty() {
            continue;
        }

        let (key, value) = match token.split_once('=') {
            Some((key, raw)) => (key, ParamValue::from_raw(raw)),
            None => (token, ParamValue::Bool(true)),
        };

        if !is_known_param(key) {
            tracing::debug!(key, "Ignoring unrecognised PROJ.4 parameter");
            continue;
        }

        params.insert(key, value);
    }

    params
}

/// Render parameters back to a PROJ.4 string.
///
/// Tokens are emitted in sorted key order. Flags render as a bare `+key`
/// and `false` flags are omitted.
pub fn render_params(params: &CrsParams) -> String {
    params.to_string()
}
