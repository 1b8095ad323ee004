//! EPSG code newtype.

use std::fmt;
use std::str::FromStr;

/// Authority prefix used in `init` references.
const EPSG_PREFIX: &str = "epsg:";

/// Errors that can occur when parsing an EPSG code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpsgCodeError {
    #[error("EPSG code is empty")]
    Empty,
    #[error("Invalid EPSG code: '{0}' (expected digits, optionally prefixed with 'epsg:')")]
    Invalid(String),
    #[error("EPSG code must be a positive integer")]
    Zero,
}

/// A positive EPSG registry code such as `4326`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpsgCode(u32);

impl EpsgCode {
    /// WGS 84 geographic.
    pub const WGS84: EpsgCode = EpsgCode(4326);
    /// WGS 84 / Pseudo-Mercator.
    pub const WEB_MERCATOR: EpsgCode = EpsgCode(3857);

    /// Create a code, rejecting zero.
    pub fn new(code: u32) -> Result<Self, EpsgCodeError> {
        if code == 0 {
            return Err(EpsgCodeError::Zero);
        }
        Ok(Self(code))
    }

    /// Returns the numeric code.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Extract a code from an `init` value of the form `epsg:<digits>`.
    ///
    /// The prefix is case-insensitive. Returns `None` for other authorities
    /// or malformed digits.
    pub fn from_init(value: &str) -> Option<Self> {
        let value = value.trim();
        let prefix = value.get(..EPSG_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(EPSG_PREFIX) {
            return None;
        }
        parse_digits(value[EPSG_PREFIX.len()..].trim()).ok()
    }

    /// The `init` value that refers to this code, e.g. `epsg:4326`.
    pub fn init_value(self) -> String {
        format!("{}{}", EPSG_PREFIX, self.0)
    }
}

fn parse_digits(s: &str) -> Result<EpsgCode, EpsgCodeError> {
    if s.is_empty() {
        return Err(EpsgCodeError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EpsgCodeError::Invalid(s.to_string()));
    }
    let code: u32 = s
        .parse()
        .map_err(|_| EpsgCodeError::Invalid(s.to_string()))?;
    EpsgCode::new(code)
}

impl FromStr for EpsgCode {
    type Err = EpsgCodeError;

    /// Accepts `4326`, `epsg:4326` and `EPSG:4326`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EpsgCodeError::Empty);
        }
        if let Some(prefix) = s.get(..EPSG_PREFIX.len()) {
            if prefix.eq_ignore_ascii_case(EPSG_PREFIX) {
                return parse_digits(s[EPSG_PREFIX.len()..].trim());
            }
        }
        parse_digits(s)
    }
}

impl TryFrom<u32> for EpsgCode {
    type Error = EpsgCodeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<EpsgCode> for u32 {
    fn from(code: EpsgCode) -> Self {
        code.0
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_prefixed() {
        assert_eq!("4326".parse::<EpsgCode>().unwrap().value(), 4326);
        assert_eq!("epsg:3857".parse::<EpsgCode>().unwrap().value(), 3857);
        assert_eq!("EPSG:3395".parse::<EpsgCode>().unwrap().value(), 3395);
        assert_eq!(" 32633 ".parse::<EpsgCode>().unwrap().value(), 32633);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<EpsgCode>(), Err(EpsgCodeError::Empty));
        assert_eq!("epsg:".parse::<EpsgCode>(), Err(EpsgCodeError::Empty));
        assert_eq!("0".parse::<EpsgCode>(), Err(EpsgCodeError::Zero));
        assert!(matches!(
            "-4326".parse::<EpsgCode>(),
            Err(EpsgCodeError::Invalid(_))
        ));
        assert!(matches!(
            "esri:102003".parse::<EpsgCode>(),
            Err(EpsgCodeError::Invalid(_))
        ));
        assert!(matches!(
            "99999999999".parse::<EpsgCode>(),
            Err(EpsgCodeError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_init() {
        assert_eq!(EpsgCode::from_init("epsg:4326"), Some(EpsgCode::WGS84));
        assert_eq!(EpsgCode::from_init("EpSg:3857"), Some(EpsgCode::WEB_MERCATOR));
        assert_eq!(EpsgCode::from_init("4326"), None);
        assert_eq!(EpsgCode::from_init("IGNF:LAMB93"), None);
        assert_eq!(EpsgCode::from_init("epsg:abc"), None);
    }

    #[test]
    fn test_from_init_allows_space_after_prefix() {
        assert_eq!(EpsgCode::from_init("epsg: 4326"), Some(EpsgCode::WGS84));
        assert_eq!(EpsgCode::from_init("EPSG:3857 "), Some(EpsgCode::WEB_MERCATOR));
        assert_eq!("EPSG: 3395".parse::<EpsgCode>().unwrap().value(), 3395);
        assert_eq!(EpsgCode::from_init("epsg: 43 26"), None);
    }

    #[test]
    fn test_init_value_round_trip() {
        let code = EpsgCode::new(3395).unwrap();
        assert_eq!(code.init_value(), "epsg:3395");
        assert_eq!(EpsgCode::from_init(&code.init_value()), Some(code));
    }

    #[test]
    fn test_display() {
        assert_eq!(EpsgCode::WGS84.to_string(), "4326");
    }
}
