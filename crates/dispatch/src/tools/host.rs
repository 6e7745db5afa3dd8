//! Registry of the tools offered to the agent loop.

use super::{
    CONTAINER_CHECK, COUNTRY_DATA, ContainerCheckTool, CountryDataTool, PORT_EXTRACTOR,
    PortExtractorTool, Tool, ToolCall, ToolResult, ToolSpec,
};
use crate::dispatcher::report;
use crate::{Dispatcher, ErrorDetail, Resolver, ResponseEnvelope, ToolError};
use catalog::EntryCatalog;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Owns the registered tools and adapts their envelopes to caller conventions.
pub struct ToolHost {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolHost {
    /// Register `country_data`, `container_check` and `port_extractor`
    /// over a shared catalog.
    pub fn new(catalog: Arc<EntryCatalog>, resolver: Resolver) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(catalog));
        Self {
            tools: vec![
                Box::new(CountryDataTool::new(Arc::clone(&dispatcher), resolver)),
                Box::new(ContainerCheckTool::new(Arc::clone(&dispatcher))),
                Box::new(PortExtractorTool::new(dispatcher)),
            ],
        }
    }

    pub fn specs(&self) -> Vec<&ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// Invoke a tool by name with a raw payload.
    pub fn invoke(&self, name: &str, input: &Value) -> ResponseEnvelope {
        debug!(tool = name, "invoking tool");
        match self.get_tool(name) {
            Some(tool) => tool.invoke(input),
            None => report(
                name,
                Err(ToolError::UnknownOperation {
                    given: Some(name.to_string()),
                    allowed: self.tools.iter().map(|t| t.name().to_string()).collect(),
                }),
            ),
        }
    }

    pub fn country_data(&self, input: &Value) -> ResponseEnvelope {
        self.invoke(COUNTRY_DATA, input)
    }

    pub fn container_check(&self, input: &Value) -> ResponseEnvelope {
        self.invoke(CONTAINER_CHECK, input)
    }

    pub fn port_extractor(&self, input: &Value) -> ResponseEnvelope {
        self.invoke(PORT_EXTRACTOR, input)
    }

    /// Execute a model tool call, correlating the result with the call id.
    pub fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::from_envelope(&call.id, self.invoke(&call.name, &call.input))
    }

    /// Wire JSON for frameworks that pass values through.
    pub fn call_json(&self, name: &str, input: &Value) -> Value {
        self.invoke(name, input).to_wire()
    }

    /// Wire JSON as text for frameworks that only accept strings.
    pub fn call_text(&self, name: &str, input: &Value) -> String {
        self.call_json(name, input).to_string()
    }

    /// Failures as `Err` for frameworks that expect raised errors.
    pub fn call(&self, name: &str, input: &Value) -> Result<Value, ErrorDetail> {
        self.invoke(name, input).into_result()
    }
}
