//! Resolve normalized fields into a validated request.

use crate::normalize::json_type;
use crate::{Fields, ToolError};
use ledger::ContainerLine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Field naming the requested operation.
pub const OPERATION_FIELD: &str = "operation";

/// Field holding the container lines of a container check.
pub const CONTAINERS_FIELD: &str = "containers";

/// Field holding the XML document of a port extraction.
pub const XML_CONTENT_FIELD: &str = "xml_content";

/// Optional field restricting a port extraction to one port type.
pub const PORT_TYPE_FIELD: &str = "port_type";

/// Separator that marks an exact entry id (`DE-HAM`).
pub const DEFAULT_ID_SEPARATOR: char = '-';

/// Operation names accepted by the country data tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationTag {
    GetEntry,
    Search,
    SameCountry,
}

impl OperationTag {
    pub const ALL: [OperationTag; 3] = [Self::GetEntry, Self::Search, Self::SameCountry];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetEntry => "get_entry",
            Self::Search => "search",
            Self::SameCountry => "same_country",
        }
    }

    /// Fields that must be present and non-empty for this operation.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::GetEntry => &["entry_id"],
            Self::Search => &["search_query"],
            Self::SameCountry => &["entry1_id", "entry2_id"],
        }
    }

    pub fn allowed_names() -> Vec<String> {
        Self::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationTag {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == name)
            .ok_or_else(|| ToolError::UnknownOperation {
                given: Some(s.to_string()),
                allowed: Self::allowed_names(),
            })
    }
}

/// A validated country data operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    GetEntry { entry_id: String },
    Search { search_query: String },
    SameCountry { entry1_id: String, entry2_id: String },
}

impl Operation {
    pub fn tag(&self) -> OperationTag {
        match self {
            Self::GetEntry { .. } => OperationTag::GetEntry,
            Self::Search { .. } => OperationTag::Search,
            Self::SameCountry { .. } => OperationTag::SameCountry,
        }
    }
}

/// Turns normalized fields into an [`Operation`].
///
/// Rules, in order:
/// 1. an `entry_id` containing the id separator forces `get_entry`
/// 2. otherwise the `operation` field must name a known operation
/// 3. the operation's required fields must be present and non-empty
///
/// Fields the resolved operation does not use are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    separator: char,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_ID_SEPARATOR)
    }
}

impl Resolver {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn resolve(&self, fields: &Fields) -> Result<Operation, ToolError> {
        let tag = self.resolve_tag(fields)?;
        let operation = match tag {
            OperationTag::GetEntry => Operation::GetEntry {
                entry_id: required(fields, "entry_id", tag)?,
            },
            OperationTag::Search => Operation::Search {
                search_query: required(fields, "search_query", tag)?,
            },
            OperationTag::SameCountry => Operation::SameCountry {
                entry1_id: required(fields, "entry1_id", tag)?,
                entry2_id: required(fields, "entry2_id", tag)?,
            },
        };
        debug!(operation = %tag, "operation resolved");
        Ok(operation)
    }

    fn resolve_tag(&self, fields: &Fields) -> Result<OperationTag, ToolError> {
        if let Some(Value::String(id)) = fields.get("entry_id") {
            if id.contains(self.separator) {
                debug!(entry_id = %id, "exact id given, forcing get_entry");
                return Ok(OperationTag::GetEntry);
            }
        }

        match fields.get(OPERATION_FIELD) {
            Some(Value::String(name)) => name.parse(),
            None | Some(Value::Null) => Err(ToolError::UnknownOperation {
                given: None,
                allowed: OperationTag::allowed_names(),
            }),
            Some(other) => Err(ToolError::UnknownOperation {
                given: Some(other.to_string()),
                allowed: OperationTag::allowed_names(),
            }),
        }
    }
}

/// Extract a required string field, trimmed.
fn required(fields: &Fields, field: &str, tag: OperationTag) -> Result<String, ToolError> {
    optional(fields, field)?.ok_or_else(|| ToolError::missing(field, tag.as_str()))
}

/// Extract an optional string field, trimmed; blank counts as absent.
fn optional(fields: &Fields, field: &str) -> Result<Option<String>, ToolError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => {
            let value = value.trim();
            Ok((!value.is_empty()).then(|| value.to_string()))
        }
        Some(other) => Err(ToolError::malformed_field(
            field,
            format!("field `{field}` must be a string, got {}", json_type(other)),
        )),
    }
}

/// A validated port extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortQuery {
    pub xml_content: String,
    pub port_type: Option<String>,
}

/// Extract the XML document and optional type filter of a port extraction.
pub fn port_query(fields: &Fields) -> Result<PortQuery, ToolError> {
    let xml_content = optional(fields, XML_CONTENT_FIELD)?
        .ok_or_else(|| ToolError::missing(XML_CONTENT_FIELD, "port_extractor"))?;
    Ok(PortQuery {
        xml_content,
        port_type: optional(fields, PORT_TYPE_FIELD)?,
    })
}

/// Extract the container lines of a container check.
pub fn container_lines(fields: &Fields) -> Result<Vec<ContainerLine>, ToolError> {
    match fields.get(CONTAINERS_FIELD) {
        None | Some(Value::Null) => Err(ToolError::missing(CONTAINERS_FIELD, "container_check")),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            ToolError::malformed_field(CONTAINERS_FIELD, format!("invalid `containers`: {e}"))
        }),
    }
}
