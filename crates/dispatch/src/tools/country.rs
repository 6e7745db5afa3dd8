//! `country_data` tool.

use super::{Tool, ToolSpec};
use crate::dispatcher::report;
use crate::{Dispatcher, Request, Resolver, ResponseEnvelope, normalize};
use serde_json::{Value, json};
use std::sync::Arc;

pub const COUNTRY_DATA: &str = "country_data";

const DESCRIPTION: &str = "Look up ports and the countries they belong to.

Operations:
- get_entry: get a single entry by its exact ID (e.g. 'DE-HAM' for Hamburg)
- search: search entries by name or country (e.g. 'Hamburg' or 'Germany')
- same_country: check whether two entries are in the same country

When you have an exact ID (like 'DE-HAM'), always use get_entry.";

pub struct CountryDataTool {
    dispatcher: Arc<Dispatcher>,
    resolver: Resolver,
    spec: ToolSpec,
}

impl CountryDataTool {
    pub fn new(dispatcher: Arc<Dispatcher>, resolver: Resolver) -> Self {
        let spec = ToolSpec {
            name: COUNTRY_DATA.to_string(),
            description: DESCRIPTION.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "enum": ["get_entry", "search", "same_country"],
                        "description": "The operation to perform"
                    },
                    "entry_id": {
                        "type": "string",
                        "description": "Entry ID for get_entry"
                    },
                    "search_query": {
                        "type": "string",
                        "description": "Name or country to search for"
                    },
                    "entry1_id": {
                        "type": "string",
                        "description": "First entry ID for same_country"
                    },
                    "entry2_id": {
                        "type": "string",
                        "description": "Second entry ID for same_country"
                    }
                },
                "required": ["operation"]
            }),
        };
        Self {
            dispatcher,
            resolver,
            spec,
        }
    }
}

impl Tool for CountryDataTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, input: &Value) -> ResponseEnvelope {
        let resolved = normalize(input).and_then(|fields| self.resolver.resolve(&fields));
        match resolved {
            Ok(operation) => self.dispatcher.dispatch(&Request::CountryData(operation)),
            Err(err) => report(COUNTRY_DATA, Err(err)),
        }
    }
}
