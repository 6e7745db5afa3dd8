//! `container_check` tool.

use super::{Tool, ToolSpec};
use crate::dispatcher::report;
use crate::{Dispatcher, Request, ResponseEnvelope, container_lines, normalize};
use ledger::ContainerType;
use serde_json::{Value, json};
use std::sync::Arc;

pub const CONTAINER_CHECK: &str = "container_check";

pub struct ContainerCheckTool {
    dispatcher: Arc<Dispatcher>,
    spec: ToolSpec,
}

impl ContainerCheckTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        let types = ContainerType::allowed_names();
        let spec = ToolSpec {
            name: CONTAINER_CHECK.to_string(),
            description: format!(
                "Validate a container configuration. Each line has a type (one of {}) \
                 and a count >= 0. At least one type must have a count greater than 0.",
                types.join(", ")
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "containers": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": { "type": "string", "enum": types },
                                "count": { "type": "integer", "minimum": 0 }
                            },
                            "required": ["type", "count"]
                        }
                    }
                },
                "required": ["containers"]
            }),
        };
        Self { dispatcher, spec }
    }
}

impl Tool for ContainerCheckTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, input: &Value) -> ResponseEnvelope {
        let lines = normalize(input).and_then(|fields| container_lines(&fields));
        match lines {
            Ok(lines) => self.dispatcher.dispatch(&Request::ContainerCheck(lines)),
            Err(err) => report(CONTAINER_CHECK, Err(err)),
        }
    }
}
