//! EPSG code → explicit CRS parameters.

use super::policy::MatchPolicy;
use super::resolver::CodeResolver;
use super::LookupError;
use crate::crs::{parse_params, Crs, CrsParams, INIT_KEY};
use crate::epsg::{EpsgCode, RegistrySource};

/// Expands EPSG codes into their full registry definitions.
pub struct CrsExpander<'r, R: RegistrySource + ?Sized> {
    resolver: CodeResolver<'r, R>,
    registry: &'r R,
}

impl<'r, R: RegistrySource + ?Sized> CrsExpander<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self::with_policy(registry, MatchPolicy::default())
    }

    /// Create an expander whose fallback code resolution uses `policy`.
    pub fn with_policy(registry: &'r R, policy: MatchPolicy) -> Self {
        Self {
            resolver: CodeResolver::with_policy(registry, policy),
            registry,
        }
    }

    /// Expand a code, or the code resolved from `crs`, into explicit parameters.
    ///
    /// When `epsg` is given it takes precedence and `crs` is ignored. Otherwise
    /// the code is resolved from `crs` with fuzzy matching allowed. The result
    /// carries `init=epsg:<code>`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidInput`] if no code was given and none could be
    ///   resolved from `crs`
    /// - [`LookupError::NotFound`] if the registry has no entry for the code
    pub fn expand(
        &self,
        crs: Option<Crs<'_>>,
        epsg: Option<EpsgCode>,
    ) -> Result<CrsParams, LookupError> {
        let code = match (epsg, crs) {
            (Some(code), _) => Some(code),
            (None, Some(crs)) => self.resolver.resolve(Some(crs), false)?,
            (None, None) => None,
        };

        let code = code.ok_or_else(|| {
            LookupError::InvalidInput(
                "No epsg code provided or epsg code could not be identified from the provided crs"
                    .to_string(),
            )
        })?;

        self.expand_code(code)
    }

    /// Expand a known code.
    pub fn expand_code(&self, code: EpsgCode) -> Result<CrsParams, LookupError> {
        let entry = self.registry.get(code).ok_or(LookupError::NotFound(code))?;

        let mut params = parse_params(entry.params());
        // Keep the code so the result resolves straight back to it
        params.insert(INIT_KEY, code.init_value());

        tracing::debug!(%code, params = params.len(), "Expanded registry entry");
        Ok(params)
    }
}

/// Expand `epsg`, or the code resolved from `crs`, with the default policy.
///
/// See [`CrsExpander::expand`].
pub fn explicit_crs_from_epsg<R: RegistrySource + ?Sized>(
    registry: &R,
    crs: Option<Crs<'_>>,
    epsg: Option<EpsgCode>,
) -> Result<CrsParams, LookupError> {
    CrsExpander::new(registry).expand(crs, epsg)
}
