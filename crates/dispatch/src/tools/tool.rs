//! Tool trait.

use super::ToolSpec;
use crate::ResponseEnvelope;
use serde_json::Value;

/// A tool the agent loop can call.
///
/// Implementations accept the raw payload in any supported wrapper shape
/// and never fail outside the returned envelope.
pub trait Tool: Send + Sync {
    fn spec(&self) -> &ToolSpec;

    fn invoke(&self, input: &Value) -> ResponseEnvelope;

    fn name(&self) -> &str {
        &self.spec().name
    }
}
