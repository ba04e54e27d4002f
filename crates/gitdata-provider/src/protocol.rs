//! Protocol message types
//!
//! JSON-RPC 2.0 message structures, one message per line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostic::Diagnostic;
use crate::schema::Schema;

pub const PROTOCOL_VERSION: &str = "1";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    /// Serialized as `null` when the request id could not be read.
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Initialize response result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    pub data_sources: Vec<String>,
    pub configure: bool,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// One entry of `datasources/list`
#[derive(Debug, Serialize)]
pub struct DataSourceDescriptor {
    pub name: String,
    pub description: String,
    pub schema: Schema,
}

/// `datasources/read` params
#[derive(Debug, Deserialize)]
pub struct ReadParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// `datasources/read` result: either a state or the reasons there is none
#[derive(Debug, Serialize)]
pub struct ReadResult {
    pub state: Option<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReadResult {
    pub fn state(state: Value) -> Self {
        Self {
            state: Some(state),
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_string_id() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "abc-123",
            "method": "datasources/list",
            "params": {}
        }"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, Some(Value::String("abc-123".to_string())));
        assert_eq!(request.method, "datasources/list");
    }

    #[test]
    fn test_request_without_id_is_notification() {
        let json = r#"{"jsonrpc": "2.0", "method": "initialized"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(request.id.is_none());
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn test_read_params_without_arguments() {
        let params: ReadParams = serde_json::from_str(r#"{"name": "git_remotes"}"#).unwrap();
        assert_eq!(params.name, "git_remotes");
        assert_eq!(params.arguments, Value::Null);
    }

    #[test]
    fn test_success_response_has_no_error() {
        let response =
            JsonRpcResponse::success(Some(Value::Number(1.into())), serde_json::json!({"ok": true}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("result"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_error_response_has_no_result() {
        let response = JsonRpcResponse::error(Some(Value::Number(1.into())), METHOD_NOT_FOUND, "x");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("-32601"));
        assert!(!json.contains("result"));
    }

    #[test]
    fn test_unknown_id_is_serialized_as_null() {
        let response = JsonRpcResponse::error(None, PARSE_ERROR, "x");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value.get("id"), Some(&Value::Null));
    }

    #[test]
    fn test_read_result_keeps_null_state() {
        let result = ReadResult::diagnostics(vec![Diagnostic::missing_argument("directory")]);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["state"], Value::Null);
        assert_eq!(value["diagnostics"][0]["attribute"], "directory");
    }

    #[test]
    fn test_initialize_result_is_camel_case() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                data_sources: vec!["git_branch".into()],
                configure: true,
            },
            server_info: ServerInfo {
                name: "gitdata-provider".to_string(),
                version: "0.1.0".to_string(),
            },
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("protocolVersion"));
        assert!(json.contains("dataSources"));
        assert!(json.contains("serverInfo"));
    }
}
