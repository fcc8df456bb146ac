//! Export command implementation.

use anyhow::{Context, Result};
use console::style;

use super::common::{Settings, replay_script, write_output};

/// Replay a script and print or write the execution payload.
pub fn execute(script: &str, output: Option<&str>, settings: &Settings) -> Result<()> {
    let replay = replay_script(script, settings)?;
    let circuit = replay.canvas.circuit();
    let json = replay
        .canvas
        .export_json()
        .context("Failed to serialize payload")?;

    write_output(&json, output)?;

    if let Some(path) = output {
        println!(
            "{} Exported {} qubits, {} layers, {} gates to {}",
            style("✓").green().bold(),
            circuit.num_qubits(),
            circuit.num_layers(),
            circuit.num_gates(),
            style(path).cyan()
        );
    }
    Ok(())
}
