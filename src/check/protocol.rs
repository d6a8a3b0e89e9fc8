//! Line-delimited JSON-RPC 2.0 messages exchanged with the server under test.
use rmcp::model::{ErrorData, ProtocolVersion};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lib::errors::CheckError;

pub const JSONRPC_VERSION: &str = "2.0";
pub const INITIALIZE: &str = "initialize";
pub const TOOLS_LIST: &str = "tools/list";

pub const INITIALIZE_ID: u64 = 1;
pub const TOOLS_LIST_ID: u64 = 2;

const CLIENT_NAME: &str = "test-client";
const CLIENT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P: Serialize> JsonRpcRequest<P> {
    pub fn new(id: u64, method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }

    /// Serialize as one newline-terminated line.
    pub fn to_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: ProtocolVersion,
    pub capabilities: Map<String, Value>,
    pub client_info: ClientIdentity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientIdentity {
    pub name: &'static str,
    pub version: &'static str,
}

pub fn initialize_request() -> JsonRpcRequest<InitializeParams> {
    JsonRpcRequest::new(
        INITIALIZE_ID,
        INITIALIZE,
        InitializeParams {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: Map::new(),
            client_info: ClientIdentity {
                name: CLIENT_NAME,
                version: CLIENT_VERSION,
            },
        },
    )
}

pub fn tools_list_request() -> JsonRpcRequest<Map<String, Value>> {
    JsonRpcRequest::new(TOOLS_LIST_ID, TOOLS_LIST, Map::new())
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ErrorData>,
}

/// One line read from the server, decoded.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    /// Server-initiated message without an id; not an answer to anything.
    Notification { method: String },
    Response(RpcReply),
}

/// A response kept both raw (for printing) and split into result/error.
#[derive(Debug, Clone)]
pub struct RpcReply {
    pub raw: Value,
    pub id: Option<Value>,
    pub result: Option<Value>,
    pub error: Option<ErrorData>,
}

impl RpcReply {
    /// Matches `id`, or is an error the server could not attribute (`"id": null`).
    pub fn answers(&self, id: u64) -> bool {
        match self.id.as_ref().filter(|value| !value.is_null()) {
            Some(value) => value.as_u64() == Some(id),
            None => self.error.is_some(),
        }
    }

    /// Turn a JSON-RPC error object into a `CheckError`.
    pub fn into_result(self, method: &'static str) -> Result<Self, CheckError> {
        match self.error {
            Some(error) => Err(CheckError::Rpc { method, error }),
            None => Ok(self),
        }
    }
}

pub fn decode_line(line: &str, method: &'static str) -> Result<IncomingMessage, CheckError> {
    let raw: Value = serde_json::from_str(line)
        .map_err(|source| CheckError::MalformedResponse { method, source })?;
    let envelope: ResponseEnvelope = serde_json::from_value(raw.clone())
        .map_err(|source| CheckError::MalformedResponse { method, source })?;

    match (envelope.id, envelope.method) {
        (None, Some(method)) => Ok(IncomingMessage::Notification { method }),
        (id, _) => Ok(IncomingMessage::Response(RpcReply {
            raw,
            id,
            result: envelope.result,
            error: envelope.error,
        })),
    }
}

/// A tool entry from `result.tools`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisedTool {
    pub name: String,
    #[serde(default, rename = "inputSchema")]
    pub input_schema: Option<Value>,
}

impl AdvertisedTool {
    /// Names listed under `inputSchema.required`, if any.
    pub fn required_arguments(&self) -> Vec<String> {
        self.input_schema
            .as_ref()
            .and_then(|schema| schema.get("required"))
            .and_then(Value::as_array)
            .map(|required| {
                required
                    .iter()
                    .filter_map(|name| name.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Extract `result.tools`; `Ok(None)` when the response has no tool list.
pub fn advertised_tools(reply: &RpcReply) -> Result<Option<Vec<AdvertisedTool>>, CheckError> {
    let Some(tools) = reply.result.as_ref().and_then(|result| result.get("tools")) else {
        return Ok(None);
    };
    if !tools.is_array() {
        return Err(CheckError::MissingField {
            method: TOOLS_LIST,
            field: "result.tools[]",
        });
    }
    serde_json::from_value(tools.clone())
        .map(Some)
        .map_err(|source| CheckError::MalformedResponse {
            method: TOOLS_LIST,
            source,
        })
}
