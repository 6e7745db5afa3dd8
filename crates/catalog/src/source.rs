//! Backing stores the catalog is loaded from.

use crate::{Entry, Result};
use std::path::{Path, PathBuf};

/// Load-once source of catalog entries.
///
/// Sources are read exactly once when the catalog is built. There is no
/// write path.
pub trait EntrySource {
    fn load(&self) -> Result<Vec<Entry>>;
}

/// The built-in port table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl EntrySource for BuiltinSource {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(vec![
            Entry::new("US-NYC", "New York", "USA"),
            Entry::new("GB-LON", "London", "UK"),
            Entry::new("FR-PAR", "Paris", "France"),
            Entry::new("US-LAX", "Los Angeles", "USA"),
            Entry::new("DE-HAM", "Hamburg", "Germany"),
            Entry::new("DE-HRB", "Hamburg", "Germany"),
        ])
    }
}

/// A JSON file holding an array of `{id, name, country}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EntrySource for JsonFileSource {
    fn load(&self) -> Result<Vec<Entry>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// In-memory entries, mostly for fixtures.
impl EntrySource for Vec<Entry> {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_source_has_unique_ids() {
        let entries = BuiltinSource.load().unwrap();
        let mut ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn json_file_source_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"NL-RTM","name":"Rotterdam","country":"Netherlands"}}]"#
        )
        .unwrap();

        let entries = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(entries, vec![Entry::new("NL-RTM", "Rotterdam", "Netherlands")]);
    }

    #[test]
    fn json_file_source_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id":"NL-RTM"}}"#).unwrap();

        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }

    #[test]
    fn json_file_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new(dir.path().join("missing.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
