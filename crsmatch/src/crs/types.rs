//! CRS parameter type definitions

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::epsg::EpsgCode;

/// Key holding an authority reference such as `epsg:4326`.
pub const INIT_KEY: &str = "init";

/// A single PROJ.4 parameter value.
///
/// Values are typed the way they are read from text: booleans first,
/// then integers, then floats, falling back to the raw string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Flag parameter (`+no_defs`) or literal `true`/`false`
    Bool(bool),
    /// Integer value (`+zone=33`)
    Int(i64),
    /// Floating point value (`+lat_ts=-41.5`)
    Float(f64),
    /// Anything else (`+datum=WGS84`, `+towgs84=0,0,0`)
    Str(String),
}

impl ParamValue {
    /// Interpret a raw parameter value.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "true" | "True" => return ParamValue::Bool(true),
            "false" | "False" => return ParamValue::Bool(false),
            _ => {}
        }

        if let Ok(i) = raw.parse::<i64>() {
            return ParamValue::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return ParamValue::Float(f);
        }
        ParamValue::Str(raw.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            // Keep whole floats distinguishable from integers (`1.0` not `1`)
            ParamValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// A set of PROJ.4 parameters keyed by name.
///
/// Keys are kept sorted so that rendering is canonical: two maps with the
/// same contents always render to the same token sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CrsParams {
    params: BTreeMap<String, ParamValue>,
}

impl CrsParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a PROJ.4 string such as `+proj=longlat +datum=WGS84 +no_defs`.
    pub fn parse(text: &str) -> Self {
        super::parse_params(text)
    }

    /// Insert or overwrite a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.params.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.remove(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in canonical (sorted) order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.params.iter()
    }

    /// Returns the authoritative code carried by an `init=epsg:<digits>` entry.
    ///
    /// The authority prefix is matched case-insensitively. Any other `init`
    /// value (e.g. `esri:102003`) yields `None`.
    pub fn epsg_init(&self) -> Option<EpsgCode> {
        match self.params.get(INIT_KEY)? {
            ParamValue::Str(s) => EpsgCode::from_init(s),
            _ => None,
        }
    }

    /// Canonical `+key=value` tokens, one per rendered parameter.
    ///
    /// Keys that are not PROJ.4 parameters are left out, matching what
    /// [`super::parse_params`] accepts.
    pub fn tokens(&self) -> Vec<String> {
        self.params
            .iter()
            .filter(|(key, _)| super::is_known_param(key))
            .filter_map(|(key, value)| render_token(key, value))
            .collect()
    }
}

/// Render one parameter, or `None` when it is omitted from text form.
fn render_token(key: &str, value: &ParamValue) -> Option<String> {
    match value {
        ParamValue::Bool(false) => None,
        ParamValue::Bool(true) => Some(format!("+{}", key)),
        ParamValue::Str(s) if s.is_empty() => Some(format!("+{}", key)),
        other => Some(format!("+{}={}", key, other)),
    }
}

impl fmt::Display for CrsParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for CrsParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CrsParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// A CRS as supplied by a caller: either raw PROJ.4 text or parsed parameters.
#[derive(Debug, Clone, Copy)]
pub enum Crs<'a> {
    Text(&'a str),
    Params(&'a CrsParams),
}

impl<'a> Crs<'a> {
    /// Parameters for this CRS, parsing text on demand.
    pub fn to_params(&self) -> Cow<'a, CrsParams> {
        match *self {
            Crs::Text(text) => Cow::Owned(super::parse_params(text)),
            Crs::Params(params) => Cow::Borrowed(params),
        }
    }
}

impl<'a> From<&'a str> for Crs<'a> {
    fn from(text: &'a str) -> Self {
        Crs::Text(text)
    }
}

impl<'a> From<&'a String> for Crs<'a> {
    fn from(text: &'a String) -> Self {
        Crs::Text(text.as_str())
    }
}

impl<'a> From<&'a CrsParams> for Crs<'a> {
    fn from(params: &'a CrsParams) -> Self {
        Crs::Params(params)
    }
}
