use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container types accepted by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    #[serde(rename = "HH42")]
    Hh42,
    #[serde(rename = "HH24")]
    Hh24,
    #[serde(rename = "HH12")]
    Hh12,
}

impl ContainerType {
    pub const ALL: [ContainerType; 3] = [Self::Hh42, Self::Hh24, Self::Hh12];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hh42 => "HH42",
            Self::Hh24 => "HH24",
            Self::Hh12 => "HH12",
        }
    }

    pub fn allowed_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// One requested line: a container type as supplied and its count.
///
/// The type stays a raw string until validation so that unknown types can be
/// reported back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerLine {
    #[serde(rename = "type")]
    pub container_type: String,
    pub count: u64,
}

impl ContainerLine {
    pub fn new(container_type: impl Into<String>, count: u64) -> Self {
        Self {
            container_type: container_type.into(),
            count,
        }
    }
}
