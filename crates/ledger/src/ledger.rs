//! Container configuration validation.

use crate::{ContainerLine, ContainerType, Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub const VALID_MESSAGE: &str = "Container configuration is valid";

/// Validated container configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub valid: bool,
    pub message: &'static str,
    /// Count for every allowed type; types not supplied are 0.
    pub totals: BTreeMap<ContainerType, u64>,
    pub has_containers: bool,
}

/// Validate a container request.
///
/// Checks run in order and stop at the first failure:
/// 1. every line names an allowed type
/// 2. at least one line has a positive count
///
/// Lines repeating a type have their counts summed. A sum that does not
/// fit in a `u64` is rejected with [`Error::CountOverflow`].
pub fn validate(lines: &[ContainerLine]) -> Result<LedgerSummary> {
    let invalid: BTreeSet<&str> = lines
        .iter()
        .map(|line| line.container_type.as_str())
        .filter(|name| name.parse::<ContainerType>().is_err())
        .collect();

    if !invalid.is_empty() {
        return Err(Error::InvalidContainerType {
            invalid: invalid.into_iter().map(str::to_string).collect(),
        });
    }

    if !lines.iter().any(|line| line.count > 0) {
        return Err(Error::EmptyConfiguration);
    }

    let mut totals: BTreeMap<ContainerType, u64> =
        ContainerType::ALL.into_iter().map(|t| (t, 0)).collect();
    for line in lines {
        if let Ok(kind) = line.container_type.parse::<ContainerType>() {
            let total = totals.entry(kind).or_default();
            *total = total
                .checked_add(line.count)
                .ok_or(Error::CountOverflow { container_type: kind })?;
        }
    }

    debug!(?totals, "container configuration accepted");

    Ok(LedgerSummary {
        valid: true,
        message: VALID_MESSAGE,
        totals,
        has_containers: true,
    })
}
