//! `port_extractor` tool.

use super::{Tool, ToolSpec};
use crate::dispatcher::report;
use crate::{Dispatcher, Request, ResponseEnvelope, normalize, port_query};
use serde_json::{Value, json};
use std::sync::Arc;

pub const PORT_EXTRACTOR: &str = "port_extractor";

const DESCRIPTION: &str = "Extract port names from an XML document with ISO port information.

Port elements (port, Port, PORT, portInfo or PortInfo) are named by a name \
attribute, a <name> child or a <portName> child. Pass port_type to keep only \
ports whose <type> child matches it (e.g. 'container', 'bulk', 'general').";

pub struct PortExtractorTool {
    dispatcher: Arc<Dispatcher>,
    spec: ToolSpec,
}

impl PortExtractorTool {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        let spec = ToolSpec {
            name: PORT_EXTRACTOR.to_string(),
            description: DESCRIPTION.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "xml_content": {
                        "type": "string",
                        "description": "The XML content containing port information"
                    },
                    "port_type": {
                        "type": "string",
                        "description": "Optional filter for a specific port type"
                    }
                },
                "required": ["xml_content"]
            }),
        };
        Self { dispatcher, spec }
    }
}

impl Tool for PortExtractorTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, input: &Value) -> ResponseEnvelope {
        match normalize(input).and_then(|fields| port_query(&fields)) {
            Ok(query) => self.dispatcher.dispatch(&Request::PortExtract(query)),
            Err(err) => report(PORT_EXTRACTOR, Err(err)),
        }
    }
}
