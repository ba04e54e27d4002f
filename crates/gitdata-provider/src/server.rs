//! Provider server
//!
//! Reads one JSON-RPC message per line and writes one response per line.
//! Repository reads are blocking and run on the blocking thread pool.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use gitdata_core::{Backend, Git2Backend, Inspector};

use crate::config::ProviderConfig;
use crate::datasource::DataSource;
use crate::diagnostic::Diagnostic;
use crate::protocol::{
    DataSourceDescriptor, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeResult,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
    ReadParams, ReadResult, ServerCapabilities, ServerInfo,
};
use crate::{Error, Result};

/// Serves the data sources to a host tool.
///
/// # Example
///
/// ```ignore
/// use gitdata_provider::{ProviderConfig, ProviderServer};
///
/// #[tokio::main]
/// async fn main() -> gitdata_provider::Result<()> {
///     let mut server = ProviderServer::new(ProviderConfig::default());
///     server.run().await
/// }
/// ```
pub struct ProviderServer<B = Git2Backend> {
    inspector: Inspector<B>,
    config: ProviderConfig,
}

impl ProviderServer<Git2Backend> {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_inspector(Inspector::new(), config)
    }
}

impl<B> ProviderServer<B>
where
    B: Backend + Clone + Send + 'static,
{
    pub fn with_inspector(inspector: Inspector<B>, config: ProviderConfig) -> Self {
        Self { inspector, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("Provider ready, listening on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve one message per line from `reader`, answering on `writer`.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let response = match self.handle_message(&line).await {
                Ok(Some(response)) => response,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "Request failed");
                    let response =
                        JsonRpcResponse::error(None, INTERNAL_ERROR, format!("Internal error: {e}"));
                    serde_json::to_string(&response)?
                }
            };
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single message.
    ///
    /// Returns the serialized response, or `None` for notifications.
    pub async fn handle_message(&mut self, message: &str) -> Result<Option<String>> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                let response = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"));
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };
        let id = value.get("id").filter(|id| !id.is_null()).cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                let response =
                    JsonRpcResponse::error(id, INVALID_REQUEST, format!("Invalid Request: {e}"));
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };

        if request.jsonrpc != "2.0" {
            let response = JsonRpcResponse::error(
                request.id,
                INVALID_REQUEST,
                "Invalid Request: jsonrpc must be \"2.0\"",
            );
            return Ok(Some(serde_json::to_string(&response)?));
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(None),
            "datasources/list" => self.handle_list(request.id)?,
            "datasources/read" => self.handle_read(request.id, request.params).await?,
            "configure" => self.handle_configure(request.id, request.params)?,
            _ if request.id.is_none() => {
                tracing::debug!(method = %request.method, "Ignoring unknown notification");
                return Ok(None);
            }
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map(Some).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                data_sources: DataSource::ALL
                    .iter()
                    .map(|ds| ds.name().to_string())
                    .collect(),
                configure: true,
            },
            server_info: ServerInfo {
                name: "gitdata-provider".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let data_sources: Vec<DataSourceDescriptor> = DataSource::ALL
            .iter()
            .map(|ds| DataSourceDescriptor {
                name: ds.name().to_string(),
                description: ds.description().to_string(),
                schema: ds.schema(),
            })
            .collect();

        Ok(JsonRpcResponse::success(
            id,
            json!({ "data_sources": data_sources }),
        ))
    }

    async fn handle_read(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: ReadParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let result = match DataSource::from_name(&params.name) {
            None => ReadResult::diagnostics(vec![Diagnostic::unknown_data_source(&params.name)]),
            Some(data_source) => {
                let inspector = self.inspector.clone();
                let config = self.config.clone();
                let arguments = params.arguments;
                let read = match tokio::task::spawn_blocking(move || {
                    data_source.read(&inspector, &arguments, &config)
                })
                .await
                {
                    Ok(read) => read,
                    Err(e) => {
                        let e = Error::from(e);
                        tracing::warn!(data_source = data_source.name(), error = %e, "Read failed");
                        return Ok(JsonRpcResponse::error(
                            id,
                            INTERNAL_ERROR,
                            format!("Internal error: {e}"),
                        ));
                    }
                };
                match read {
                    Ok(state) => ReadResult::state(state),
                    Err(diagnostics) => {
                        for d in &diagnostics {
                            tracing::info!(
                                data_source = data_source.name(),
                                summary = %d.summary,
                                detail = %d.detail,
                                "Read returned a diagnostic"
                            );
                        }
                        ReadResult::diagnostics(diagnostics)
                    }
                }
            }
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_configure(&mut self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let config: ProviderConfig = match serde_json::from_value(params) {
            Ok(config) => config,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        if config.log_filter != self.config.log_filter {
            tracing::info!("log_filter changes apply on the next start");
        }
        tracing::info!(
            include_untracked = config.include_untracked,
            include_ignored = config.include_ignored,
            "Provider configured"
        );
        self.config = config;

        Ok(JsonRpcResponse::success(id, serde_json::to_value(&self.config)?))
    }
}
