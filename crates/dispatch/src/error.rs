//! Error taxonomy shared by every tool.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Stable classification of a failed tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedPayload,
    UnknownOperation,
    MissingField,
    NotFound,
    InvalidContainerType,
    EmptyConfiguration,
    InternalError,
}

impl ErrorKind {
    /// Status class a transport should report for this kind.
    pub fn status(self) -> StatusClass {
        match self {
            Self::NotFound => StatusClass::NotFound,
            Self::InternalError => StatusClass::ServerError,
            Self::MalformedPayload
            | Self::UnknownOperation
            | Self::MissingField
            | Self::InvalidContainerType
            | Self::EmptyConfiguration => StatusClass::ClientError,
        }
    }
}

/// Transport-level outcome class of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    ClientError,
    NotFound,
    ServerError,
}

impl StatusClass {
    /// HTTP status code for this class.
    pub fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::ClientError => 400,
            Self::NotFound => 404,
            Self::ServerError => 500,
        }
    }
}

/// A failed tool call.
///
/// Every variant carries enough context for the caller to correct its
/// payload and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("malformed payload: {message}")]
    MalformedPayload {
        message: String,
        field: Option<String>,
    },

    #[error(
        "unknown operation {}; expected one of: {}",
        describe_given(.given.as_deref()),
        .allowed.join(", ")
    )]
    UnknownOperation {
        given: Option<String>,
        allowed: Vec<String>,
    },

    #[error("missing required field `{field}` for operation `{operation}`")]
    MissingField { field: String, operation: String },

    #[error("{}", not_found_message(.ids))]
    NotFound { ids: Vec<String> },

    #[error("invalid container types: {}. valid types are: {}", .invalid.join(", "), .allowed.join(", "))]
    InvalidContainerType {
        invalid: Vec<String>,
        allowed: Vec<String>,
    },

    #[error("at least one container type must have a count greater than 0")]
    EmptyConfiguration { allowed: Vec<String> },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
            field: None,
        }
    }

    pub fn malformed_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn missing(field: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            operation: operation.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidContainerType { .. } => ErrorKind::InvalidContainerType,
            Self::EmptyConfiguration { .. } => ErrorKind::EmptyConfiguration,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Structured fields describing what went wrong.
    pub fn context(&self) -> Map<String, Value> {
        let context = match self {
            Self::MalformedPayload { field: Some(field), .. } => json!({ "field": field }),
            Self::MalformedPayload { field: None, .. } | Self::Internal(_) => json!({}),
            Self::UnknownOperation { given, allowed } => json!({ "given": given, "allowed": allowed }),
            Self::MissingField { field, operation } => {
                json!({ "field": field, "operation": operation })
            }
            Self::NotFound { ids } => json!({ "ids": ids }),
            Self::InvalidContainerType { invalid, allowed } => {
                json!({ "invalid": invalid, "allowed": allowed })
            }
            Self::EmptyConfiguration { allowed } => json!({ "allowed": allowed }),
        };
        match context {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            kind: self.kind(),
            message: self.to_string(),
            context: self.context(),
        }
    }
}

impl From<catalog::Error> for ToolError {
    fn from(err: catalog::Error) -> Self {
        match err {
            catalog::Error::NotFound { ids } => Self::NotFound { ids },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ledger::Error> for ToolError {
    fn from(err: ledger::Error) -> Self {
        let allowed = ledger::ContainerType::allowed_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        match err {
            ledger::Error::InvalidContainerType { invalid } => {
                Self::InvalidContainerType { invalid, allowed }
            }
            ledger::Error::EmptyConfiguration => Self::EmptyConfiguration { allowed },
            overflow @ ledger::Error::CountOverflow { .. } => {
                Self::malformed_field(crate::CONTAINERS_FIELD, overflow.to_string())
            }
        }
    }
}

impl From<manifest::Error> for ToolError {
    fn from(err: manifest::Error) -> Self {
        Self::malformed_field(crate::XML_CONTENT_FIELD, err.to_string())
    }
}

/// Serializable form of a [`ToolError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind;
        let message = &self.message;
        write!(f, "[{kind:?}] {message}")
    }
}

impl std::error::Error for ErrorDetail {}

fn describe_given(given: Option<&str>) -> String {
    match given {
        Some(given) => format!("`{given}`"),
        None => "(none given)".to_string(),
    }
}

fn not_found_message(ids: &[String]) -> String {
    match ids {
        [id] => format!("entry not found: {id}"),
        _ => format!("entries not found: {}", ids.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_follow_kind() {
        assert_eq!(ErrorKind::MalformedPayload.status().code(), 400);
        assert_eq!(ErrorKind::NotFound.status().code(), 404);
        assert_eq!(ErrorKind::EmptyConfiguration.status().code(), 400);
        assert_eq!(ErrorKind::InternalError.status().code(), 500);
    }

    #[test]
    fn missing_field_detail_names_field_and_operation() {
        let detail = ToolError::missing("search_query", "search").detail();
        assert_eq!(detail.kind, ErrorKind::MissingField);
        assert_eq!(
            detail.message,
            "missing required field `search_query` for operation `search`"
        );
        assert_eq!(detail.context["field"], "search_query");
        assert_eq!(detail.context["operation"], "search");
    }

    #[test]
    fn unknown_operation_lists_allowed_set() {
        let err = ToolError::UnknownOperation {
            given: Some("delete".into()),
            allowed: vec!["get_entry".into(), "search".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown operation `delete`; expected one of: get_entry, search"
        );
        assert_eq!(err.context()["allowed"], json!(["get_entry", "search"]));
    }

    #[test]
    fn catalog_not_found_maps_to_not_found() {
        let err = ToolError::from(catalog::Error::NotFound {
            ids: vec!["ZZ-999".into()],
        });
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "entry not found: ZZ-999");
    }

    #[test]
    fn catalog_load_failure_is_internal() {
        let err = ToolError::from(catalog::Error::DuplicateId("A-1".into()));
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }

    #[test]
    fn ledger_errors_carry_allowed_types() {
        let err = ToolError::from(ledger::Error::InvalidContainerType {
            invalid: vec!["XL99".into()],
        });
        assert_eq!(err.kind(), ErrorKind::InvalidContainerType);
        assert_eq!(err.context()["invalid"], json!(["XL99"]));
        assert_eq!(err.context()["allowed"], json!(["HH42", "HH24", "HH12"]));
    }

    #[test]
    fn ledger_overflow_is_malformed_containers() {
        let err = ToolError::from(ledger::Error::CountOverflow {
            container_type: ledger::ContainerType::Hh12,
        });
        assert_eq!(err.kind(), ErrorKind::MalformedPayload);
        assert_eq!(err.context()["field"], "containers");
        assert_eq!(
            err.to_string(),
            "malformed payload: total count for HH12 does not fit in 64 bits"
        );
    }

    #[test]
    fn empty_context_is_not_serialized() {
        let detail = ToolError::Internal("boom".into()).detail();
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json, json!({ "kind": "internal_error", "message": "internal error: boom" }));
    }
}
