//! Registry file discovery.
//!
//! PROJ installs its `epsg` init file in a data directory whose location
//! depends on the platform and packaging. We look in the directories PROJ
//! itself honours before falling back to common install prefixes.

use std::path::{Path, PathBuf};

/// Well-known names used when locating the registry.
pub mod names {
    /// Registry file name inside a PROJ data directory.
    pub const EPSG_FILE: &str = "epsg";
    /// Compressed variant of the registry file.
    pub const EPSG_FILE_GZ: &str = "epsg.gz";
    /// Environment variable used by PROJ 7 and later.
    pub const PROJ_DATA_ENV: &str = "PROJ_DATA";
    /// Environment variable used by older PROJ releases.
    pub const PROJ_LIB_ENV: &str = "PROJ_LIB";
}

/// System-wide PROJ data directories, checked after the environment.
const SYSTEM_DATA_DIRS: &[&str] = &[
    "/usr/local/share/proj",
    "/usr/share/proj",
    "/opt/homebrew/share/proj",
];

/// PROJ data directories to search, in priority order.
pub fn candidate_data_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for var in [names::PROJ_DATA_ENV, names::PROJ_LIB_ENV] {
        if let Some(value) = std::env::var_os(var) {
            // Both variables may hold a search path
            candidates.extend(std::env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()));
        }
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(data_dir.join("proj"));
    }

    candidates.extend(SYSTEM_DATA_DIRS.iter().map(PathBuf::from));
    candidates
}

/// Find the registry file inside a single data directory.
pub fn epsg_file_in(dir: &Path) -> Option<PathBuf> {
    [names::EPSG_FILE, names::EPSG_FILE_GZ]
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Locate the registry file on this system.
///
/// Returns the first existing file among [`candidate_data_dirs`].
pub fn locate_epsg_file() -> Option<PathBuf> {
    let found = candidate_data_dirs()
        .iter()
        .find_map(|dir| epsg_file_in(dir));

    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "Located epsg registry"),
        None => tracing::debug!("No epsg registry found in PROJ data directories"),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_dirs_are_candidates() {
        let dirs = candidate_data_dirs();
        assert!(dirs.contains(&PathBuf::from("/usr/share/proj")));
        assert!(dirs.contains(&PathBuf::from("/usr/local/share/proj")));
    }

    #[test]
    fn test_epsg_file_in_prefers_plain_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("epsg.gz"), b"").unwrap();
        assert_eq!(epsg_file_in(dir.path()), Some(dir.path().join("epsg.gz")));

        std::fs::write(dir.path().join("epsg"), b"").unwrap();
        assert_eq!(epsg_file_in(dir.path()), Some(dir.path().join("epsg")));
    }

    #[test]
    fn test_epsg_file_in_empty_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(epsg_file_in(dir.path()), None);
    }

    #[test]
    fn test_epsg_file_in_ignores_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("epsg")).unwrap();
        assert_eq!(epsg_file_in(dir.path()), None);
    }
}
