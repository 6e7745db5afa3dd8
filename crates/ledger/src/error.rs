//! Ledger validation errors.

use crate::ContainerType;
use thiserror::Error;

/// Reasons a container configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more lines named a type outside the allowed set.
    #[error(
        "invalid container types: {}. valid types are: {}",
        .invalid.join(", "),
        ContainerType::allowed_names().join(", ")
    )]
    InvalidContainerType { invalid: Vec<String> },

    /// No line had a positive count.
    #[error("at least one container type must have a count greater than 0")]
    EmptyConfiguration,

    /// Summing the lines of one type overflowed.
    #[error("total count for {} does not fit in 64 bits", .container_type.as_str())]
    CountOverflow { container_type: ContainerType },
}

pub type Result<T> = std::result::Result<T, Error>;
