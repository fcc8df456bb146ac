//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use qcanvas_canvas::{CanvasConfig, Replay, Script};
use qcanvas_exec::ExecConfig;

/// Contents of `~/.qcanvas/config.yaml` (or `--config`).
///
/// ```yaml
/// canvas:
///   palette: [X, H]
/// exec:
///   endpoint: http://127.0.0.1:8000/run
///   timeout_secs: 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas: CanvasConfig,
    pub exec: ExecConfig,
}

/// `~/.qcanvas/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qcanvas").join("config.yaml"))
}

/// Load settings from `explicit`, else from the default path if it exists,
/// else defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Settings::default()),
        },
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let settings: Settings = serde_yaml_ng::from_str(&source)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    settings
        .canvas
        .validate()
        .with_context(|| format!("Invalid canvas section in {}", path.display()))?;
    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load an event script and replay it.
pub fn replay_script(path: &str, settings: &Settings) -> Result<Replay> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    let script =
        Script::from_file(path).with_context(|| format!("Failed to load script: {path}"))?;
    let replay = script.replay_with(&settings.canvas);
    tracing::info!(
        "Replayed {} events ({} without effect)",
        replay.applied + replay.ignored,
        replay.ignored
    );
    Ok(replay)
}

/// Write `text` to `output`, or to stdout when no path is given.
pub fn write_output(text: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {path}"))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
