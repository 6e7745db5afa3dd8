//! Read-only entry catalog.

use crate::{CountryComparison, Entry, EntrySource, Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Fixed, read-only collection of entries.
///
/// Built once from an [`EntrySource`] and never mutated afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct EntryCatalog {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl EntryCatalog {
    /// Build a catalog from entries, rejecting empty and duplicate ids.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(Error::EmptyId(position));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(Error::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Load the catalog from a backing store.
    pub fn load(source: &impl EntrySource) -> Result<Self> {
        let catalog = Self::new(source.load()?)?;
        debug!(entries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Result<&Entry> {
        self.find(id).ok_or_else(|| Error::NotFound {
            ids: vec![id.to_string()],
        })
    }

    /// Case-insensitive substring search over name and country.
    ///
    /// Results keep catalog order. No match is an empty result, not an error.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Compare the countries of two entries.
    ///
    /// Missing ids are reported together in a single `NotFound`.
    pub fn same_country(&self, id1: &str, id2: &str) -> Result<CountryComparison> {
        match (self.find(id1), self.find(id2)) {
            (Some(first), Some(second)) => Ok(CountryComparison {
                same: first.country == second.country,
                country1: first.country.clone(),
                country2: second.country.clone(),
            }),
            (first, second) => {
                let ids = [(id1, first), (id2, second)]
                    .into_iter()
                    .filter(|(_, found)| found.is_none())
                    .map(|(id, _)| id.to_string())
                    .collect();
                Err(Error::NotFound { ids })
            }
        }
    }

    fn find(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinSource;

    fn catalog() -> EntryCatalog {
        EntryCatalog::load(&BuiltinSource).unwrap()
    }

    #[test]
    fn get_returns_exact_match() {
        let catalog = catalog();
        let entry = catalog.get("DE-HAM").unwrap();
        assert_eq!(entry.name, "Hamburg");
        assert_eq!(entry.country, "Germany");
    }

    #[test]
    fn get_is_case_sensitive() {
        assert!(catalog().get("de-ham").is_err());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = catalog().get("ZZ-999").unwrap_err();
        match err {
            Error::NotFound { ids } => assert_eq!(ids, vec!["ZZ-999".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn search_matches_country_case_insensitively() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.search("germany").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["DE-HAM", "DE-HRB"]);
    }

    #[test]
    fn search_matches_name_in_catalog_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.search("O").iter().map(|e| e.id.as_str()).collect();
        // New York, London, Los Angeles
        assert_eq!(ids, vec!["US-NYC", "GB-LON", "US-LAX"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(catalog().search("atlantis").is_empty());
    }

    #[test]
    fn same_country_true_for_hamburg_pair() {
        let result = catalog().same_country("DE-HAM", "DE-HRB").unwrap();
        assert!(result.same);
        assert_eq!(result.country1, "Germany");
        assert_eq!(result.country2, "Germany");
    }

    #[test]
    fn same_country_false_across_countries() {
        let result = catalog().same_country("US-NYC", "GB-LON").unwrap();
        assert!(!result.same);
        assert_eq!(result.country1, "USA");
        assert_eq!(result.country2, "UK");
    }

    #[test]
    fn same_country_compares_case_sensitively() {
        let catalog = EntryCatalog::new(vec![
            Entry::new("A-1", "One", "Germany"),
            Entry::new("A-2", "Two", "germany"),
        ])
        .unwrap();
        assert!(!catalog.same_country("A-1", "A-2").unwrap().same);
    }

    #[test]
    fn same_country_reports_both_missing_ids() {
        let err = catalog().same_country("XX-1", "XX-2").unwrap_err();
        match err {
            Error::NotFound { ids } => assert_eq!(ids, vec!["XX-1", "XX-2"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn same_country_reports_single_missing_id() {
        let err = catalog().same_country("US-NYC", "XX-2").unwrap_err();
        assert_eq!(err.to_string(), "entry not found: XX-2");
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = EntryCatalog::new(vec![
            Entry::new("A-1", "One", "X"),
            Entry::new("A-1", "Uno", "Y"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "A-1"));
    }

    #[test]
    fn new_rejects_empty_ids() {
        let err = EntryCatalog::new(vec![Entry::new(" ", "Blank", "X")]).unwrap_err();
        assert!(matches!(err, Error::EmptyId(0)));
    }

    #[test]
    fn repeated_reads_are_identical() {
        let catalog = catalog();
        assert_eq!(catalog.search("usa"), catalog.search("usa"));
        assert_eq!(
            catalog.same_country("US-NYC", "US-LAX").unwrap(),
            catalog.same_country("US-NYC", "US-LAX").unwrap()
        );
    }
}
