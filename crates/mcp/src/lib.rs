//! MCP (Model Context Protocol) server for the port tools.
//!
//! Speaks line-delimited JSON-RPC 2.0 over any async reader/writer pair,
//! normally stdin/stdout, and forwards `tools/call` to a
//! [`dispatch::ToolHost`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use catalog::{BuiltinSource, EntryCatalog};
//! use dispatch::{Resolver, ToolHost};
//! use mcp::Server;
//!
//! # async fn example() -> mcp::Result<()> {
//! let catalog = Arc::new(EntryCatalog::load(&BuiltinSource).expect("catalog"));
//! let server = Server::new(ToolHost::new(catalog, Resolver::default()));
//! server.serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod protocol;
mod server;

pub use error::{Error, Result};
pub use protocol::{
    CallToolParams, CallToolResult, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, RequestId, ServerCapabilities, ServerInfo,
    Tool, ToolContent, ToolsCapability,
};
pub use server::Server;
