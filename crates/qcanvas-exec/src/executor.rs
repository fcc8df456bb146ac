//! Execution backend trait.
//!
//! ```text
//!   CircuitModel ──→ ExecutionPayload::from_circuit ──→ Executor::execute
//!                       (sync, pure)                     (async, I/O)
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExecResult;
use crate::payload::ExecutionPayload;

/// Backend answer. `result` is passed through to the user verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub result: serde_json::Value,
}

impl ExecutionResponse {
    pub fn new(result: serde_json::Value) -> Self {
        Self { result }
    }

    /// Text shown to the user: strings without quotes, anything else as JSON.
    pub fn display_text(&self) -> String {
        match &self.result {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Something that can run an exported circuit.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Run `payload` and return the backend's result.
    async fn execute(&self, payload: &ExecutionPayload) -> ExecResult<ExecutionResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text() {
        assert_eq!(ExecutionResponse::new(json!("done")).display_text(), "done");
        assert_eq!(
            ExecutionResponse::new(json!({"00": 0.5})).display_text(),
            r#"{"00":0.5}"#
        );
    }
}
