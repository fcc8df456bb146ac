//! Run command implementation.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use qcanvas_exec::{Executor, HttpExecutor};

use super::common::{Settings, replay_script};

/// Replay a script, export it, and send it to the execution endpoint.
pub async fn execute(
    script: &str,
    endpoint: Option<&str>,
    timeout: Option<u64>,
    settings: &Settings,
) -> Result<()> {
    let mut config = settings.exec.clone();
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(secs);
    }

    println!(
        "{} Running {} on {}",
        style("→").cyan().bold(),
        style(script).green(),
        style(&config.endpoint).yellow()
    );

    let replay = replay_script(script, settings)?;
    let payload = replay.canvas.export();
    println!(
        "  Exported: {} qubits, {} layers",
        payload.register_count, payload.layer_count
    );

    let executor = HttpExecutor::new(&config).context("Invalid execution settings")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Executing circuit...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = executor.execute(&payload).await;
    spinner.finish_and_clear();

    let response = result.context("Execution request failed")?;
    println!("\n{} Result:", style("✓").green().bold());
    println!("  {}", response.display_text());
    Ok(())
}
