//! CRS ↔ EPSG code lookup.
//!
//! Two operations share one registry:
//!
//! - [`epsg_from_crs`] finds the registry code best matching a CRS
//! - [`explicit_crs_from_epsg`] expands a code (or a CRS resolved to one)
//!   into its full registry definition
//!
//! [`CrsLookup`] bundles a shared registry with a [`MatchPolicy`] for
//! callers that perform many lookups.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use crsmatch::crs::Crs;
//! use crsmatch::epsg::EpsgRegistry;
//! use crsmatch::lookup::CrsLookup;
//!
//! let lookup = CrsLookup::new(Arc::new(EpsgRegistry::from_default_location()?));
//! let code = lookup.epsg_from_crs(Some(Crs::from("+proj=merc +datum=WGS84")), false)?;
//! let params = lookup.explicit_crs_from_epsg(None, code)?;
//! ```

mod expander;
mod policy;
mod resolver;

use std::sync::Arc;

pub use expander::{explicit_crs_from_epsg, CrsExpander};
pub use policy::MatchPolicy;
pub use resolver::{epsg_from_crs, CodeResolver, MatchCandidate};

use crate::crs::{Crs, CrsParams};
use crate::epsg::{EpsgCode, RegistryEntry, RegistrySource};

/// Errors returned by lookup operations.
///
/// A lookup that simply finds nothing is not an error; it returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No usable parameters or code were supplied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The code has no registry entry
    #[error("EPSG code \"{0}\" not found")]
    NotFound(EpsgCode),
}

/// Lookup facade over a shared, immutable registry.
#[derive(Clone)]
pub struct CrsLookup {
    registry: Arc<dyn RegistrySource>,
    policy: MatchPolicy,
}

impl CrsLookup {
    /// Create a lookup with the default [`MatchPolicy`].
    pub fn new(registry: Arc<dyn RegistrySource>) -> Self {
        Self {
            registry,
            policy: MatchPolicy::default(),
        }
    }

    /// Replace the tie-break policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &dyn RegistrySource {
        self.registry.as_ref()
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Find the code best matching `crs`.
    ///
    /// See [`CodeResolver::resolve`].
    pub fn epsg_from_crs(
        &self,
        crs: Option<Crs<'_>>,
        exact_match: bool,
    ) -> Result<Option<EpsgCode>, LookupError> {
        CodeResolver::with_policy(self.registry(), self.policy.clone()).resolve(crs, exact_match)
    }

    /// Expand `epsg`, or the code resolved from `crs`.
    ///
    /// See [`CrsExpander::expand`].
    pub fn explicit_crs_from_epsg(
        &self,
        crs: Option<Crs<'_>>,
        epsg: Option<EpsgCode>,
    ) -> Result<CrsParams, LookupError> {
        CrsExpander::with_policy(self.registry(), self.policy.clone()).expand(crs, epsg)
    }

    /// The raw registry entry for `code`.
    pub fn entry(&self, code: EpsgCode) -> Result<&RegistryEntry, LookupError> {
        self.registry.get(code).ok_or(LookupError::NotFound(code))
    }
}

impl std::fmt::Debug for CrsLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrsLookup")
            .field("entries", &self.registry.len())
            .field("policy", &self.policy)
            .finish()
    }
}
