//! Container ledger validation.
//!
//! A request is an ordered list of `(type, count)` lines. It is valid when
//! every type belongs to [`ContainerType`] and at least one count is positive.

mod container;
mod error;
mod ledger;

pub use container::{ContainerLine, ContainerType};
pub use error::{Error, Result};
pub use ledger::{LedgerSummary, VALID_MESSAGE, validate};
