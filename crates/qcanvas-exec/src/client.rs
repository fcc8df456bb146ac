//! HTTP execution client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ExecConfig;
use crate::error::{ExecError, ExecResult};
use crate::executor::{ExecutionResponse, Executor};
use crate::payload::ExecutionPayload;

/// POSTs the payload JSON to a configured endpoint.
pub struct HttpExecutor {
    /// HTTP client with timeouts configured.
    client: Client,
    endpoint: String,
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpExecutor {
    pub fn new(config: &ExecConfig) -> ExecResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ExecError::Http)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a response into its `result` field or an error.
    async fn handle_response(&self, response: reqwest::Response) -> ExecResult<ExecutionResponse> {
        let status = response.status();

        if status.is_success() {
            let body: serde_json::Value = response.json().await?;
            extract_result(body)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ExecError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(
        skip(self, payload),
        fields(registers = payload.register_count, layers = payload.layer_count)
    )]
    async fn execute(&self, payload: &ExecutionPayload) -> ExecResult<ExecutionResponse> {
        debug!("POST {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        self.handle_response(resp).await
    }
}

/// Pull `result` out of a successful response body.
pub fn extract_result(body: serde_json::Value) -> ExecResult<ExecutionResponse> {
    match body {
        serde_json::Value::Object(mut map) => map
            .remove("result")
            .map(ExecutionResponse::new)
            .ok_or(ExecError::MissingResult),
        _ => Err(ExecError::MissingResult),
    }
}
