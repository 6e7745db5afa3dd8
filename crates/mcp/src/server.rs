//! Line-delimited JSON-RPC server exposing the tool host.

use dispatch::ToolHost;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::protocol::{
    CallToolParams, CallToolResult, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    METHOD_NOT_FOUND, PARSE_ERROR, Tool, ToolContent,
};

/// MCP server answering requests one line at a time.
pub struct Server {
    host: ToolHost,
}

impl Server {
    pub fn new(host: ToolHost) -> Self {
        Self { host }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn serve_stdio(&self) -> Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("MCP server started");
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(line) {
                let mut text = serde_json::to_string(&response)?;
                text.push('\n');
                writer.write_all(text.as_bytes()).await?;
                writer.flush().await?;
            }
        }
        info!("MCP server input closed");
        Ok(())
    }

    /// Handle one raw line. Notifications produce no response.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Some(JsonRpcResponse::failure(
                    None,
                    JsonRpcError::new(PARSE_ERROR, format!("parse error: {e}")),
                ));
            }
        };
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request),
            Err(e) => Some(JsonRpcResponse::failure(
                None,
                JsonRpcError::new(INVALID_REQUEST, format!("invalid request: {e}")),
            )),
        }
    }

    pub fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "handling request");

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                request.id,
                JsonRpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
            ));
        }

        let outcome = match request.method.as_str() {
            "initialize" => to_result(&InitializeResult::default()),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(&self.list_tools()),
            "tools/call" => self.call_tool(request.params.clone()),
            method if method.starts_with("notifications/") => Ok(Value::Null),
            method => Err(JsonRpcError::new(
                METHOD_NOT_FOUND,
                format!("method not found: {method}"),
            )),
        };

        if request.is_notification() {
            return None;
        }

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(error) => JsonRpcResponse::failure(request.id, error),
        })
    }

    fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.host.specs().into_iter().map(Tool::from).collect(),
        }
    }

    fn call_tool(&self, params: Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        let params = params.ok_or_else(|| JsonRpcError::new(INVALID_PARAMS, "missing params"))?;
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("invalid params: {e}")))?;

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let envelope = self.host.invoke(&params.name, &arguments);

        to_result(&CallToolResult {
            content: vec![ToolContent::Text {
                text: envelope.to_wire().to_string(),
            }],
            is_error: !envelope.is_ok(),
        })
    }
}

fn to_result<T: Serialize>(value: &T) -> std::result::Result<Value, JsonRpcError> {
    serde_json::to_value(value)
        .map_err(|e| JsonRpcError::new(INTERNAL_ERROR, format!("serialize result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{BuiltinSource, EntryCatalog};
    use dispatch::Resolver;
    use std::sync::Arc;

    fn server() -> Server {
        let catalog = Arc::new(EntryCatalog::load(&BuiltinSource).unwrap());
        Server::new(ToolHost::new(catalog, Resolver::default()))
    }

    fn respond(server: &Server, line: &str) -> Value {
        let response = server.handle_line(line).expect("expected a response");
        serde_json::to_value(response).unwrap()
    }

    fn tool_text(response: &Value) -> Value {
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn initialize_reports_tools_capability() {
        let response = respond(
            &server(),
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        );
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "portcheck");
    }

    #[test]
    fn notifications_get_no_response() {
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server().handle_line(line).is_none());
    }

    #[test]
    fn tools_list_returns_every_tool() {
        let response = respond(&server(), r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0]["name"], "country_data");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[test]
    fn tools_call_returns_wire_json() {
        let response = respond(
            &server(),
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"country_data","arguments":{"operation":"get_entry","entry_id":"GB-LON"}}}"#,
        );
        assert_eq!(response["result"]["isError"], false);
        assert_eq!(tool_text(&response)["data"]["name"], "London");
    }

    #[test]
    fn tools_call_failure_sets_is_error() {
        let response = respond(
            &server(),
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"container_check","arguments":{"containers":[{"type":"HH42","count":0}]}}}"#,
        );
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(tool_text(&response)["error"]["kind"], "empty_configuration");
    }

    #[test]
    fn tools_call_without_params_is_invalid() {
        let response = respond(&server(), r#"{"jsonrpc":"2.0","id":5,"method":"tools/call"}"#);
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn unknown_method_is_reported() {
        let response = respond(&server(), r#"{"jsonrpc":"2.0","id":6,"method":"resources/list"}"#);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let response = respond(&server(), "{nope");
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert!(response["id"].is_null());
    }

    #[test]
    fn json_that_is_not_a_request_is_invalid() {
        let response = respond(&server(), r#"{"jsonrpc":"2.0","id":7}"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
    }

    #[tokio::test]
    async fn serve_answers_each_request_line() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let mut output = Vec::new();
        server().serve(input.as_bytes(), &mut output).await.unwrap();

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"], json!({}));
    }
}
