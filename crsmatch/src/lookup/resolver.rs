//! CRS → EPSG code resolution.
//!
//! Resolution narrows the registry in stages:
//!
//! 1. An `init=epsg:<N>` parameter is authoritative and returned as is.
//! 2. Coarse narrowing keeps entries containing `+proj=`, `+datum=` and
//!    `+ellps=` tokens from the input (the *fuzzy* set).
//! 3. Exact narrowing keeps fuzzy entries containing every rendered input
//!    token (the *exact* set).
//! 4. A single exact entry wins. Several exact entries are tie-broken by
//!    [`MatchPolicy`], then by shortest line.
//! 5. Without an exact match, and only when allowed, the fuzzy entries
//!    sharing the most tokens with the input are tie-broken the same way.
//!
//! All substring tests are literal and case-insensitive.

use super::policy::MatchPolicy;
use super::LookupError;
use crate::crs::{Crs, CrsParams};
use crate::epsg::{EpsgCode, RegistryEntry, RegistrySource};

/// Keys used for coarse narrowing, in application order.
const COARSE_KEYS: [&str; 3] = ["proj", "datum", "ellps"];

/// A fuzzy candidate and the number of input tokens it contains.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'r> {
    pub entry: &'r RegistryEntry,
    pub matched_count: usize,
}

impl<'r> MatchCandidate<'r> {
    /// Score `entry` against lowercase input tokens.
    fn score(entry: &'r RegistryEntry, tokens_lower: &[String]) -> Self {
        let matched_count = tokens_lower
            .iter()
            .filter(|token| entry.contains_lower(token))
            .count();
        Self {
            entry,
            matched_count,
        }
    }
}

/// Resolves CRS parameters to the best-matching registry code.
pub struct CodeResolver<'r, R: RegistrySource + ?Sized> {
    registry: &'r R,
    policy: MatchPolicy,
}

impl<'r, R: RegistrySource + ?Sized> CodeResolver<'r, R> {
    /// Create a resolver with the default [`MatchPolicy`].
    pub fn new(registry: &'r R) -> Self {
        Self::with_policy(registry, MatchPolicy::default())
    }

    pub fn with_policy(registry: &'r R, policy: MatchPolicy) -> Self {
        Self { registry, policy }
    }

    /// Resolve a CRS given as text or parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] if `crs` is `None`, or if it
    /// holds no recognised parameters.
    pub fn resolve(
        &self,
        crs: Option<Crs<'_>>,
        exact_match: bool,
    ) -> Result<Option<EpsgCode>, LookupError> {
        let crs = crs.ok_or_else(|| LookupError::InvalidInput("No crs provided".to_string()))?;
        let params = crs.to_params();
        self.resolve_params(&params, exact_match)
    }

    /// Resolve parsed parameters.
    ///
    /// `Ok(None)` means nothing matched, which is expected for `exact_match`
    /// lookups of non-standard definitions.
    pub fn resolve_params(
        &self,
        params: &CrsParams,
        exact_match: bool,
    ) -> Result<Option<EpsgCode>, LookupError> {
        if params.is_empty() {
            return Err(LookupError::InvalidInput(
                "Empty or invalid crs provided".to_string(),
            ));
        }

        if let Some(code) = params.epsg_init() {
            tracing::debug!(%code, "Using authoritative init code");
            return Ok(Some(code));
        }

        let fuzzy = self.coarse_candidates(params);
        let tokens: Vec<String> = params.tokens().iter().map(|t| t.to_lowercase()).collect();

        let exact: Vec<&RegistryEntry> = fuzzy
            .iter()
            .copied()
            .filter(|entry| tokens.iter().all(|token| entry.contains_lower(token)))
            .collect();

        tracing::debug!(
            fuzzy = fuzzy.len(),
            exact = exact.len(),
            "Narrowed registry candidates"
        );

        if let Some(entry) = self.pick_exact(&exact) {
            tracing::debug!(code = %entry.code(), "Exact match");
            return Ok(Some(entry.code()));
        }

        if exact_match {
            return Ok(None);
        }

        let matched = self.pick_fuzzy(&fuzzy, &tokens);
        if let Some(entry) = matched {
            tracing::debug!(code = %entry.code(), "Fuzzy match");
        }
        Ok(matched.map(RegistryEntry::code))
    }

    /// Entries containing the input's `proj`, `datum` and `ellps` tokens.
    fn coarse_candidates(&self, params: &CrsParams) -> Vec<&'r RegistryEntry> {
        let needles: Vec<String> = COARSE_KEYS
            .iter()
            .filter_map(|key| {
                params
                    .get(key)
                    .map(|value| format!("+{}={}", key, value).to_lowercase())
            })
            .collect();

        self.registry
            .entries()
            .iter()
            .filter(|entry| needles.iter().all(|needle| entry.contains_lower(needle)))
            .collect()
    }

    /// Choose among exact candidates.
    fn pick_exact(&self, exact: &[&'r RegistryEntry]) -> Option<&'r RegistryEntry> {
        match exact {
            [] => None,
            [only] => Some(*only),
            several => self.tie_break(several.iter().copied()),
        }
    }

    /// Choose among fuzzy candidates by maximal token overlap.
    fn pick_fuzzy(
        &self,
        fuzzy: &[&'r RegistryEntry],
        tokens_lower: &[String],
    ) -> Option<&'r RegistryEntry> {
        let scored: Vec<MatchCandidate<'r>> = fuzzy
            .iter()
            .map(|&entry| MatchCandidate::score(entry, tokens_lower))
            .collect();

        let best = scored.iter().map(|c| c.matched_count).max()?;
        tracing::trace!(best, "Best fuzzy overlap");

        self.tie_break(
            scored
                .iter()
                .filter(|c| c.matched_count == best)
                .map(|c| c.entry),
        )
    }

    /// First preferred entry, otherwise the first entry with the shortest line.
    fn tie_break<I>(&self, candidates: I) -> Option<&'r RegistryEntry>
    where
        I: Iterator<Item = &'r RegistryEntry> + Clone,
    {
        candidates
            .clone()
            .find(|entry| self.policy.is_preferred(entry))
            .or_else(|| shortest(candidates))
    }
}

/// The first entry with the minimal line length.
fn shortest<'r>(candidates: impl Iterator<Item = &'r RegistryEntry>) -> Option<&'r RegistryEntry> {
    candidates.fold(None, |best: Option<&'r RegistryEntry>, entry| match best {
        Some(current) if current.text_len() <= entry.text_len() => Some(current),
        _ => Some(entry),
    })
}

/// Resolve a CRS against `registry` with the default policy.
///
/// See [`CodeResolver::resolve`].
pub fn epsg_from_crs<R: RegistrySource + ?Sized>(
    registry: &R,
    crs: Option<Crs<'_>>,
    exact_match: bool,
) -> Result<Option<EpsgCode>, LookupError> {
    CodeResolver::new(registry).resolve(crs, exact_match)
}
