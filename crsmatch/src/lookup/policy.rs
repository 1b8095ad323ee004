//! Tie-break policy for ambiguous matches.

use crate::epsg::{EpsgCode, RegistryEntry};

/// Codes preferred when several registry entries match equally well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPolicy {
    preferred_codes: Vec<EpsgCode>,
    /// Decimal renderings of `preferred_codes`, searched in entry text
    needles: Vec<String>,
}

impl MatchPolicy {
    /// Create a policy preferring the given codes.
    pub fn new(preferred_codes: Vec<EpsgCode>) -> Self {
        let needles = preferred_codes.iter().map(|c| c.to_string()).collect();
        Self {
            preferred_codes,
            needles,
        }
    }

    /// A policy with no preferred codes; ties always go to the shortest entry.
    pub fn without_preference() -> Self {
        Self::new(Vec::new())
    }

    pub fn preferred_codes(&self) -> &[EpsgCode] {
        &self.preferred_codes
    }

    /// Returns true if any preferred code's digits occur in the entry text.
    ///
    /// This is a plain substring test over the whole line, so the code
    /// marker and parameter values both count.
    pub fn is_preferred(&self, entry: &RegistryEntry) -> bool {
        self.needles
            .iter()
            .any(|needle| entry.line().contains(needle.as_str()))
    }
}

impl Default for MatchPolicy {
    /// Prefers WGS 84 (4326) and Web Mercator (3857).
    fn default() -> Self {
        Self::new(vec![EpsgCode::WGS84, EpsgCode::WEB_MERCATOR])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: u32, params: &str) -> RegistryEntry {
        RegistryEntry::new(EpsgCode::new(code).unwrap(), params)
    }

    #[test]
    fn test_default_prefers_common_codes() {
        let policy = MatchPolicy::default();
        assert_eq!(
            policy.preferred_codes(),
            &[EpsgCode::WGS84, EpsgCode::WEB_MERCATOR]
        );
        assert!(policy.is_preferred(&entry(4326, "+proj=longlat +datum=WGS84")));
        assert!(policy.is_preferred(&entry(3857, "+proj=merc +a=6378137")));
        assert!(!policy.is_preferred(&entry(3395, "+proj=merc +datum=WGS84")));
    }

    #[test]
    fn test_digits_anywhere_in_line_count() {
        let policy = MatchPolicy::default();
        // Code 43260 contains "4326"
        assert!(policy.is_preferred(&entry(43260, "+proj=longlat")));
        assert!(policy.is_preferred(&entry(2000, "+proj=tmerc +x_0=3857000")));
    }

    #[test]
    fn test_without_preference() {
        let policy = MatchPolicy::without_preference();
        assert!(!policy.is_preferred(&entry(4326, "+proj=longlat")));
    }
}
