//! Structured tool-call normalization, validation and dispatch.
//!
//! # Overview
//!
//! A tool call made by a model passes through these stages:
//!
//! 1. [`normalize`] reduces the payload, whatever wrapper it came in, to
//!    flat [`Fields`].
//! 2. [`Resolver`] turns the fields into a validated [`Operation`], while
//!    [`container_lines`] and [`port_query`] extract the other tools' requests.
//! 3. [`Dispatcher`] routes the [`Request`] to the entry catalog, the
//!    container ledger or the port extractor and wraps the outcome in a
//!    [`ResponseEnvelope`].
//! 4. [`ToolHost`] adapts the envelope to what the calling framework wants.
//!
//! Failures anywhere are [`ToolError`] values classified by [`ErrorKind`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use catalog::{BuiltinSource, EntryCatalog};
//! use dispatch::{Resolver, ToolHost};
//! use serde_json::json;
//!
//! let catalog = Arc::new(EntryCatalog::load(&BuiltinSource).unwrap());
//! let host = ToolHost::new(catalog, Resolver::default());
//!
//! let envelope = host.country_data(&json!({
//!     "args": { "operation": "same_country", "entry1_id": "US-NYC", "entry2_id": "GB-LON" }
//! }));
//! assert_eq!(envelope.data().unwrap()["same"], false);
//! ```

mod dispatcher;
mod envelope;
mod error;
mod normalize;
mod operation;
pub mod tools;

pub use dispatcher::{Dispatcher, Request};
pub use envelope::ResponseEnvelope;
pub use error::{ErrorDetail, ErrorKind, StatusClass, ToolError};
pub use normalize::{Fields, normalize, normalize_str};
pub use operation::{
    CONTAINERS_FIELD, DEFAULT_ID_SEPARATOR, OPERATION_FIELD, Operation, OperationTag,
    PORT_TYPE_FIELD, PortQuery, Resolver, XML_CONTENT_FIELD, container_lines, port_query,
};
pub use tools::{ToolCall, ToolHost, ToolResult, ToolSpec};
