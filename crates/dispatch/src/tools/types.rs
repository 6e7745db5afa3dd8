//! Tool-call types exchanged with the agent loop.

use crate::{ErrorDetail, ResponseEnvelope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool call requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier used to correlate the result.
    pub id: String,
    pub name: String,
    /// Arguments in whatever shape the model produced.
    pub input: Value,
}

/// The result returned to the model after a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Success {
        tool_call_id: String,
        output: Value,
    },
    Failure {
        tool_call_id: String,
        error: ErrorDetail,
    },
}

impl ToolResult {
    pub fn from_envelope(tool_call_id: impl Into<String>, envelope: ResponseEnvelope) -> Self {
        let tool_call_id = tool_call_id.into();
        match envelope.into_result() {
            Ok(output) => Self::Success {
                tool_call_id,
                output,
            },
            Err(error) => Self::Failure {
                tool_call_id,
                error,
            },
        }
    }
}

/// A tool definition exposed to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments.
    pub input_schema: Value,
}
