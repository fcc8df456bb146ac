//! Export and execution tests against an in-process executor.

use std::sync::Mutex;

use async_trait::async_trait;
use proptest::prelude::*;
use qcanvas_exec::{
    ExecError, ExecResult, ExecutionPayload, ExecutionResponse, Executor, normalize,
};
use qcanvas_ir::{CircuitModel, GateId, Qubit, mutation};
use serde_json::json;

/// Records every payload it is given and answers with a fixed result.
struct RecordingExecutor {
    seen: Mutex<Vec<ExecutionPayload>>,
    fail: bool,
}

impl RecordingExecutor {
    fn new(fail: bool) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            fail,
        }
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    fn name(&self) -> &str {
        "recording"
    }

    async fn execute(&self, payload: &ExecutionPayload) -> ExecResult<ExecutionResponse> {
        self.seen.lock().unwrap().push(payload.clone());
        if self.fail {
            return Err(ExecError::ApiError {
                status: 500,
                message: "simulator crashed".into(),
            });
        }
        Ok(ExecutionResponse::new(json!({"00": 0.5, "11": 0.5})))
    }
}

fn bell_like() -> CircuitModel {
    let mut circuit = CircuitModel::with_size(2, 2);
    let h = GateId::new("gate-h");
    let x = GateId::new("gate-x");
    mutation::add_gate(&mut circuit, h, "H", 0, 0).unwrap();
    mutation::add_gate(&mut circuit, x.clone(), "X", 1, 1).unwrap();
    mutation::add_control(&mut circuit, &x, 1, 1, 0).unwrap();
    circuit
}

#[tokio::test]
async fn test_executor_receives_payload() {
    let executor = RecordingExecutor::new(false);
    let payload = ExecutionPayload::from_circuit(&bell_like());

    let response = executor.execute(&payload).await.unwrap();
    assert_eq!(response.result, json!({"00": 0.5, "11": 0.5}));

    let seen = executor.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0].layers,
        vec![
            vec!["H".to_string(), "NONE".to_string()],
            vec!["c1".to_string(), "X".to_string()],
        ]
    );
}

#[tokio::test]
async fn test_executor_failure_is_typed() {
    let executor: Box<dyn Executor> = Box::new(RecordingExecutor::new(true));
    let payload = ExecutionPayload::from_circuit(&bell_like());

    let err = executor.execute(&payload).await.unwrap_err();
    assert!(matches!(err, ExecError::ApiError { status: 500, .. }));
}

#[test]
fn test_payload_json_round_trips() {
    let payload = ExecutionPayload::from_circuit(&bell_like());
    let json = payload.to_json_pretty().unwrap();
    let back: ExecutionPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

proptest! {
    #[test]
    fn prop_normalized_qubit_has_unit_norm(
        re0 in -1e3f64..1e3,
        im0 in -1e3f64..1e3,
        re1 in -1e3f64..1e3,
        im1 in -1e3f64..1e3,
    ) {
        let q = Qubit::from_components(re0, im0, re1, im1);
        prop_assume!(q.norm() > 1e-9);
        let n = normalize(&q);
        prop_assert!((n.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_rows_match_register_count(qubits in 0usize..6, layers in 0usize..6) {
        let payload = ExecutionPayload::from_circuit(&CircuitModel::with_size(qubits, layers));
        prop_assert_eq!(payload.register_count, qubits);
        prop_assert_eq!(payload.layer_count, layers);
        prop_assert_eq!(payload.registers.len(), qubits);
        for row in &payload.layers {
            prop_assert_eq!(row.len(), qubits);
            prop_assert!(row.iter().all(|e| e == "NONE"));
        }
    }
}
