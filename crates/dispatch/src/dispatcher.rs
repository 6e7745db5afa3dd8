//! Route validated requests to the catalog or the container ledger.

use crate::{Operation, PortQuery, ResponseEnvelope, ToolError};
use catalog::EntryCatalog;
use ledger::ContainerLine;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// A request that has passed normalization and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CountryData(Operation),
    ContainerCheck(Vec<ContainerLine>),
    PortExtract(PortQuery),
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CountryData(operation) => operation.tag().as_str(),
            Self::ContainerCheck(_) => "container_check",
            Self::PortExtract(_) => "port_extractor",
        }
    }
}

/// Routes requests and wraps outcomes in a [`ResponseEnvelope`].
///
/// Holds no mutable state; the catalog is shared read-only.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Arc<EntryCatalog>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<EntryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn dispatch(&self, request: &Request) -> ResponseEnvelope {
        let outcome = match request {
            Request::CountryData(operation) => self.country_data(operation),
            Request::ContainerCheck(lines) => self.container_check(lines),
            Request::PortExtract(query) => port_extract(query),
        };
        report(request.name(), outcome)
    }

    fn country_data(&self, operation: &Operation) -> Result<Value, ToolError> {
        match operation {
            Operation::GetEntry { entry_id } => to_data(self.catalog.get(entry_id)?),
            Operation::Search { search_query } => to_data(&self.catalog.search(search_query)),
            Operation::SameCountry {
                entry1_id,
                entry2_id,
            } => to_data(&self.catalog.same_country(entry1_id, entry2_id)?),
        }
    }

    fn container_check(&self, lines: &[ContainerLine]) -> Result<Value, ToolError> {
        to_data(&ledger::validate(lines)?)
    }
}

fn port_extract(query: &PortQuery) -> Result<Value, ToolError> {
    let names = manifest::extract_port_names(&query.xml_content, query.port_type.as_deref())?;
    to_data(&names)
}

/// Log a finished request and build its envelope.
pub(crate) fn report(name: &str, outcome: Result<Value, ToolError>) -> ResponseEnvelope {
    match &outcome {
        Ok(_) => info!(request = name, "request succeeded"),
        Err(ToolError::Internal(message)) => error!(request = name, %message, "request failed"),
        Err(err) => warn!(request = name, kind = ?err.kind(), %err, "request rejected"),
    }
    ResponseEnvelope::from(outcome)
}

fn to_data<T: Serialize + ?Sized>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::Internal(format!("serialize result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, StatusClass};
    use catalog::{BuiltinSource, Entry};
    use serde_json::json;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(EntryCatalog::load(&BuiltinSource).unwrap()))
    }

    fn get(id: &str) -> Request {
        Request::CountryData(Operation::GetEntry { entry_id: id.into() })
    }

    #[test]
    fn get_entry_returns_entry() {
        let envelope = dispatcher().dispatch(&get("DE-HAM"));
        assert_eq!(
            envelope.data(),
            Some(&json!({ "id": "DE-HAM", "name": "Hamburg", "country": "Germany" }))
        );
    }

    #[test]
    fn get_unknown_entry_is_not_found() {
        let envelope = dispatcher().dispatch(&get("ZZ-999"));
        let error = envelope.error().unwrap();
        assert_eq!(error.kind, ErrorKind::NotFound);
        assert_eq!(envelope.status(), StatusClass::NotFound);
    }

    #[test]
    fn search_returns_matches_in_catalog_order() {
        let envelope = dispatcher().dispatch(&Request::CountryData(Operation::Search {
            search_query: "germany".into(),
        }));
        let ids: Vec<_> = envelope
            .data()
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["DE-HAM", "DE-HRB"]);
    }

    #[test]
    fn search_without_match_is_empty_success() {
        let envelope = dispatcher().dispatch(&Request::CountryData(Operation::Search {
            search_query: "atlantis".into(),
        }));
        assert!(envelope.is_ok());
        assert_eq!(envelope.data(), Some(&json!([])));
    }

    #[test]
    fn same_country_reports_countries() {
        let envelope = dispatcher().dispatch(&Request::CountryData(Operation::SameCountry {
            entry1_id: "US-NYC".into(),
            entry2_id: "GB-LON".into(),
        }));
        assert_eq!(
            envelope.data(),
            Some(&json!({ "same": false, "country1": "USA", "country2": "UK" }))
        );
    }

    #[test]
    fn container_check_routes_to_ledger() {
        let dispatcher = dispatcher();
        let ok = dispatcher.dispatch(&Request::ContainerCheck(vec![ContainerLine::new("HH42", 2)]));
        assert_eq!(ok.data().unwrap()["totals"], json!({ "HH42": 2, "HH24": 0, "HH12": 0 }));

        let empty = dispatcher.dispatch(&Request::ContainerCheck(vec![
            ContainerLine::new("HH42", 0),
            ContainerLine::new("HH24", 0),
        ]));
        assert_eq!(empty.error().unwrap().kind, ErrorKind::EmptyConfiguration);
    }

    #[test]
    fn port_extract_returns_names_or_malformed_xml() {
        let dispatcher = dispatcher();
        let ok = dispatcher.dispatch(&Request::PortExtract(PortQuery {
            xml_content: r#"<ports><port name="Rotterdam"><type>bulk</type></port></ports>"#.into(),
            port_type: Some("bulk".into()),
        }));
        assert_eq!(ok.data(), Some(&json!(["Rotterdam"])));

        let bad = dispatcher.dispatch(&Request::PortExtract(PortQuery {
            xml_content: "<ports>".into(),
            port_type: None,
        }));
        let error = bad.error().unwrap();
        assert_eq!(error.kind, ErrorKind::MalformedPayload);
        assert_eq!(error.context["field"], "xml_content");
        assert_eq!(bad.status(), StatusClass::ClientError);
    }

    #[test]
    fn fixture_catalog_can_be_injected() {
        let catalog = EntryCatalog::new(vec![Entry::new("NL-RTM", "Rotterdam", "Netherlands")]).unwrap();
        let dispatcher = Dispatcher::new(Arc::new(catalog));
        assert!(dispatcher.dispatch(&get("NL-RTM")).is_ok());
        assert!(!dispatcher.dispatch(&get("DE-HAM")).is_ok());
    }

    #[test]
    fn repeated_dispatch_is_byte_identical() {
        let dispatcher = dispatcher();
        let requests = [
            get("US-LAX"),
            Request::CountryData(Operation::Search { search_query: "usa".into() }),
            Request::ContainerCheck(vec![ContainerLine::new("HH12", 1)]),
        ];
        for request in &requests {
            let first = serde_json::to_string(&dispatcher.dispatch(request)).unwrap();
            let second = serde_json::to_string(&dispatcher.dispatch(request)).unwrap();
            assert_eq!(first, second);
        }
    }
}
