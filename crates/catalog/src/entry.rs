//! Catalog record types.

use serde::{Deserialize, Serialize};

/// A place in the catalog and the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
        }
    }

    /// Case-insensitive substring match against name and country.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.country.to_lowercase().contains(needle)
    }
}

/// Outcome of comparing the countries of two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryComparison {
    /// Exact (case-sensitive) equality of the two `country` fields.
    pub same: bool,
    pub country1: String,
    pub country2: String,
}
