//! Read-only catalog of ports and the countries that own them.
//!
//! # Overview
//!
//! The [`EntryCatalog`] is built once from an [`EntrySource`] and then only
//! read. It answers three questions:
//!
//! - `get` — the entry with an exact id
//! - `search` — entries whose name or country contains a query, case-insensitively
//! - `same_country` — whether two entries belong to the same country
//!
//! Lookups that reference unknown ids return [`Error::NotFound`] as an
//! ordinary value.
//!
//! # Example
//!
//! ```
//! use catalog::{BuiltinSource, EntryCatalog};
//!
//! let catalog = EntryCatalog::load(&BuiltinSource)?;
//! assert_eq!(catalog.get("DE-HAM")?.country, "Germany");
//! assert!(!catalog.same_country("US-NYC", "GB-LON")?.same);
//! # Ok::<(), catalog::Error>(())
//! ```

mod catalog;
mod entry;
mod error;
mod source;

pub use catalog::EntryCatalog;
pub use entry::{CountryComparison, Entry};
pub use error::{Error, Result};
pub use source::{BuiltinSource, EntrySource, JsonFileSource};
