//! Parser for the PROJ `epsg` init file.
//!
//! The file is line based:
//! - `# <name>` comment lines name the entry that follows
//! - `<code> +param=value ... <>` lines define one entry
//! - blank lines are ignored
//!
//! Markers that are not numeric (such as `<metadata>`) are skipped.

use std::io::{BufRead, BufReader, Read};
use std::sync::OnceLock;

use regex::Regex;

use super::code::EpsgCode;
use super::registry::RegistryEntry;

/// Error type for epsg file parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid epsg file format at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },
}

/// Get the entry line pattern.
///
/// Group 1 is the marker between the leading angle brackets, group 2 the
/// parameter text up to the optional `<>` terminator.
fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^<([^<>]*)>\s*(.*?)\s*(?:<>)?$").expect("entry pattern is valid")
    })
}

/// Parser for the PROJ `epsg` file format.
pub struct EpsgFileParser;

impl EpsgFileParser {
    /// Parse entries from a reader, yielding them as they are read.
    pub fn parse<R: Read>(reader: R) -> impl Iterator<Item = Result<RegistryEntry, ParseError>> {
        EpsgFileIterator::new(BufReader::new(reader))
    }

    /// Parse all entries into a vector.
    ///
    /// Malformed lines are skipped with a warning. IO errors abort parsing.
    pub fn parse_all<R: Read>(reader: R) -> Result<Vec<RegistryEntry>, ParseError> {
        let mut entries = Vec::new();
        for result in Self::parse(reader) {
            match result {
                Ok(entry) => entries.push(entry),
                Err(ParseError::Io(e)) => return Err(ParseError::Io(e)),
                Err(e) => {
                    tracing::warn!("Skipping registry line: {}", e);
                }
            }
        }
        Ok(entries)
    }
}

/// Iterator that yields registry entries from an epsg file.
struct EpsgFileIterator<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    /// Name from the most recent comment line, consumed by the next entry
    pending_name: Option<String>,
    done: bool,
}

impl<R: BufRead> EpsgFileIterator<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            line_number: 0,
            pending_name: None,
            done: false,
        }
    }

    /// Parse one entry line. `Ok(None)` means a non-numeric marker to skip.
    fn parse_entry(&mut self, line: &str) -> Result<Option<RegistryEntry>, ParseError> {
        let captures = entry_pattern()
            .captures(line)
            .ok_or_else(|| ParseError::InvalidFormat {
                line: self.line_number,
                message: "expected '<code> <params> <>'".to_string(),
            })?;

        let marker = &captures[1];
        if !marker.bytes().all(|b| b.is_ascii_digit()) || marker.is_empty() {
            tracing::trace!(line = self.line_number, marker, "Skipping non-code marker");
            self.pending_name = None;
            return Ok(None);
        }

        let code: EpsgCode = marker.parse().map_err(|e| ParseError::InvalidFormat {
            line: self.line_number,
            message: format!("{}", e),
        })?;
        let params = captures[2].to_string();
        let name = self.pending_name.take();

        Ok(Some(RegistryEntry::from_parts(code, name, line.to_string(), params)))
    }
}

impl<R: BufRead> Iterator for EpsgFileIterator<R> {
    type Item = Result<RegistryEntry, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim().to_string();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(comment) = line.strip_prefix('#') {
                        let name = comment.trim();
                        self.pending_name = (!name.is_empty()).then(|| name.to_string());
                        continue;
                    }

                    if !line.starts_with('<') {
                        self.pending_name = None;
                        return Some(Err(ParseError::InvalidFormat {
                            line: self.line_number,
                            message: format!("unexpected line '{}'", line),
                        }));
                    }

                    match self.parse_entry(&line) {
                        Ok(Some(entry)) => return Some(Ok(entry)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ParseError::Io(e)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_entries() {
        let epsg = r#"
# WGS 84
<4326> +proj=longlat +datum=WGS84 +no_defs  <>
# WGS 84 / World Mercator
<3395> +proj=merc +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs  <>
"#;
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].code().value(), 4326);
        assert_eq!(entries[0].name(), Some("WGS 84"));
        assert_eq!(entries[0].params(), "+proj=longlat +datum=WGS84 +no_defs");
        assert_eq!(
            entries[0].line(),
            "<4326> +proj=longlat +datum=WGS84 +no_defs  <>"
        );

        assert_eq!(entries[1].code().value(), 3395);
        assert_eq!(entries[1].name(), Some("WGS 84 / World Mercator"));
    }

    #[test]
    fn test_entry_without_comment_has_no_name() {
        let epsg = "<4269> +proj=longlat +datum=NAD83 +no_defs  <>\n";
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), None);
    }

    #[test]
    fn test_terminator_is_optional() {
        let epsg = "<32633> +proj=utm +zone=33 +datum=WGS84 +units=m +no_defs\n";
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].params(),
            "+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs"
        );
    }

    #[test]
    fn test_skips_metadata_marker() {
        let epsg = r#"
<metadata> +lastupdate=2016-12-12 <>
# NAD83
<4269> +proj=longlat +datum=NAD83 +no_defs  <>
"#;
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code().value(), 4269);
    }

    #[test]
    fn test_invalid_line_reports_line_number() {
        let epsg = "# WGS 84\n<4326> +proj=longlat <>\ngarbage here\n";
        let results: Vec<_> = EpsgFileParser::parse(epsg.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(ParseError::InvalidFormat { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_all_skips_bad_lines() {
        let epsg = "garbage\n<0> +proj=longlat <>\n<4326> +proj=longlat +datum=WGS84 <>\n";
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code().value(), 4326);
    }

    #[test]
    fn test_name_does_not_leak_past_bad_line() {
        let epsg = "# Orphan\ngarbage\n<4326> +proj=longlat <>\n";
        let entries = EpsgFileParser::parse_all(epsg.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), None);
    }
}
