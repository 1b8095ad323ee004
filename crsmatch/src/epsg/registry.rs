//! In-memory EPSG registry.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::code::EpsgCode;
use super::locate::locate_epsg_file;
use super::parser::{EpsgFileParser, ParseError};

/// Error type for registry loading.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("epsg registry file not found at: {0}")]
    NotFound(PathBuf),
    #[error("No epsg registry file found (set PROJ_DATA or configure registry.path)")]
    NotLocated,
    #[error("Failed to parse epsg registry: {0}")]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One registry definition.
///
/// `line` is the entry exactly as stored (trimmed), including the leading
/// `<code>` marker. Matching runs against this text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    code: EpsgCode,
    name: Option<String>,
    line: String,
    params: String,
    line_lower: String,
}

impl RegistryEntry {
    /// Create an entry from a code and its parameter text.
    ///
    /// The stored line uses the epsg file layout: `<code> params <>`.
    pub fn new(code: EpsgCode, params: impl Into<String>) -> Self {
        let params = params.into().trim().to_string();
        let line = format!("<{}> {} <>", code, params);
        Self::from_parts(code, None, line, params)
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn from_parts(
        code: EpsgCode,
        name: Option<String>,
        line: String,
        params: String,
    ) -> Self {
        let line_lower = line.to_lowercase();
        Self {
            code,
            name,
            line,
            params,
            line_lower,
        }
    }

    pub fn code(&self) -> EpsgCode {
        self.code
    }

    /// Name from the comment preceding the entry, e.g. `WGS 84`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Full registry line including the code marker.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Parameter text between the code marker and the terminator.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Case-insensitive substring test against the full line.
    ///
    /// `needle_lower` must already be lowercase.
    #[inline]
    pub fn contains_lower(&self, needle_lower: &str) -> bool {
        self.line_lower.contains(needle_lower)
    }

    /// Length of the full line in characters, used for shortest-entry ties.
    #[inline]
    pub fn text_len(&self) -> usize {
        self.line.chars().count()
    }
}

/// Read-only source of registry entries.
///
/// Implementations must be immutable after construction so that they can
/// be shared between threads without locking.
pub trait RegistrySource: Send + Sync {
    /// All entries in stable file order.
    fn entries(&self) -> &[RegistryEntry];

    /// The first entry whose code equals `code`.
    fn get(&self, code: EpsgCode) -> Option<&RegistryEntry> {
        self.entries().iter().find(|entry| entry.code() == code)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Registry loaded from a PROJ `epsg` file.
#[derive(Debug, Clone, Default)]
pub struct EpsgRegistry {
    entries: Vec<RegistryEntry>,
}

impl EpsgRegistry {
    /// Create a registry from pre-built entries.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Load the registry from the first epsg file found on this system.
    ///
    /// See [`locate_epsg_file`] for the search order.
    pub fn from_default_location() -> Result<Self, RegistryError> {
        let path = locate_epsg_file().ok_or(RegistryError::NotLocated)?;
        Self::from_file(path)
    }

    /// Load the registry from an epsg file.
    ///
    /// Supports both plain and gzip compressed (`.gz`) files.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        use flate2::read::GzDecoder;

        let path = path.as_ref();
        if !path.exists() {
            return Err(RegistryError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;

        if path.extension().is_some_and(|ext| ext == "gz") {
            tracing::debug!(path = %path.display(), "Loading gzip compressed epsg file");
            Self::from_reader(BufReader::new(GzDecoder::new(file)))
        } else {
            tracing::debug!(path = %path.display(), "Loading epsg file");
            Self::from_reader(BufReader::new(file))
        }
    }

    /// Load the registry from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, RegistryError> {
        let entries = EpsgFileParser::parse_all(reader)?;
        tracing::info!(count = entries.len(), "Loaded epsg registry");
        Ok(Self { entries })
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }
}

impl RegistrySource for EpsgRegistry {
    fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}

impl RegistrySource for [RegistryEntry] {
    fn entries(&self) -> &[RegistryEntry] {
        self
    }
}

impl RegistrySource for Vec<RegistryEntry> {
    fn entries(&self) -> &[RegistryEntry] {
        self
    }
}
