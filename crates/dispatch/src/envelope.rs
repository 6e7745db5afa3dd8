//! Uniform success/failure wrapper for tool responses.

use crate::{ErrorDetail, StatusClass, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Response of a tool call.
///
/// Exactly one of `data` and `error` is set, matching `ok`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ErrorDetail) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    pub fn status(&self) -> StatusClass {
        match &self.error {
            Some(error) => error.kind.status(),
            None => StatusClass::Success,
        }
    }

    /// Wire form: `{"data": ...}` on success, `{"error": {...}}` on failure.
    pub fn to_wire(&self) -> Value {
        match (&self.data, &self.error) {
            (_, Some(error)) => json!({ "error": error }),
            (data, None) => json!({ "data": data }),
        }
    }

    pub fn into_result(self) -> Result<Value, ErrorDetail> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (data, None) => Ok(data.unwrap_or(Value::Null)),
        }
    }
}

impl From<Result<Value, ToolError>> for ResponseEnvelope {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.detail()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn success_wire_shape() {
        let envelope = ResponseEnvelope::success(json!({ "id": "US-NYC" }));
        assert!(envelope.is_ok());
        assert_eq!(envelope.status(), StatusClass::Success);
        assert_eq!(envelope.to_wire(), json!({ "data": { "id": "US-NYC" } }));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "ok": true, "data": { "id": "US-NYC" } })
        );
    }

    #[test]
    fn failure_wire_shape() {
        let envelope = ResponseEnvelope::from(Err(ToolError::NotFound {
            ids: vec!["ZZ-999".into()],
        }));
        assert!(!envelope.is_ok());
        assert!(envelope.data().is_none());
        assert_eq!(envelope.status().code(), 404);
        assert_eq!(
            envelope.to_wire(),
            json!({
                "error": {
                    "kind": "not_found",
                    "message": "entry not found: ZZ-999",
                    "context": { "ids": ["ZZ-999"] }
                }
            })
        );
    }

    #[test]
    fn into_result_surfaces_error() {
        let envelope = ResponseEnvelope::from(Err(ToolError::Internal("boom".into())));
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);
    }

    #[test]
    fn envelope_roundtrips_through_json() {
        let envelope = ResponseEnvelope::failure(ToolError::missing("entry_id", "get_entry").detail());
        let text = serde_json::to_string(&envelope).unwrap();
        let back: ResponseEnvelope = serde_json::from_str(&text).unwrap();
        assert_eq!(back, envelope);
    }
}
