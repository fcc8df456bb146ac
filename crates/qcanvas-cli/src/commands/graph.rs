//! Graph command implementation.

use anyhow::{Context, Result};

use super::common::{Settings, replay_script, write_output};

/// Replay a script and print the visual graph as `{nodes, edges}` JSON.
pub fn execute(script: &str, output: Option<&str>, settings: &Settings) -> Result<()> {
    let replay = replay_script(script, settings)?;
    let json = serde_json::to_string_pretty(replay.canvas.graph())
        .context("Failed to serialize graph")?;
    write_output(&json, output)
}
