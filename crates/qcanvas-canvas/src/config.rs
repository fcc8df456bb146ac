//! Canvas configuration.
//!
//! ```yaml
//! stride: 120
//! snap_threshold: 20
//! drop_offset: 16
//! connect_offset: 32
//! palette: [X, H, Z]
//! ```
//!
//! Every field is optional; missing ones take the defaults above
//! (`palette` defaults to `[X]`).

use std::path::Path;

use qcanvas_graph::GraphProjector;
use qcanvas_ir::{PlacementEngine, SNAP_THRESHOLD, STRIDE};
use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Grid pitch between layer columns and register rows.
    #[serde(default = "default_stride")]
    pub stride: f64,

    /// Largest pointer-to-slot distance that still snaps.
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f64,

    /// Pointer shift applied to drag-over and drop events.
    #[serde(default = "default_drop_offset")]
    pub drop_offset: f64,

    /// Pointer shift applied to connect events.
    #[serde(default = "default_connect_offset")]
    pub connect_offset: f64,

    /// Gate names that can be dragged onto the canvas.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_stride() -> f64 {
    STRIDE
}

fn default_snap_threshold() -> f64 {
    SNAP_THRESHOLD
}

fn default_drop_offset() -> f64 {
    16.0
}

fn default_connect_offset() -> f64 {
    32.0
}

fn default_palette() -> Vec<String> {
    vec!["X".to_string()]
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stride: default_stride(),
            snap_threshold: default_snap_threshold(),
            drop_offset: default_drop_offset(),
            connect_offset: default_connect_offset(),
            palette: default_palette(),
        }
    }
}

impl CanvasConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScriptResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml_str(contents: &str) -> ScriptResult<Self> {
        let config: CanvasConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ScriptResult<()> {
        if !(self.stride.is_finite() && self.stride > 0.0) {
            return Err(ScriptError::Invalid(format!(
                "stride must be positive, got {}",
                self.stride
            )));
        }
        if !(self.snap_threshold.is_finite() && self.snap_threshold >= 0.0) {
            return Err(ScriptError::Invalid(format!(
                "snap_threshold must be non-negative, got {}",
                self.snap_threshold
            )));
        }
        if !self.drop_offset.is_finite() || !self.connect_offset.is_finite() {
            return Err(ScriptError::Invalid("pointer offsets must be finite".into()));
        }
        if self.palette.iter().any(|name| name.trim().is_empty()) {
            return Err(ScriptError::Invalid("palette entries must be non-empty".into()));
        }
        Ok(())
    }

    pub fn placement(&self) -> PlacementEngine {
        PlacementEngine::new(self.stride, self.snap_threshold)
    }

    pub fn projector(&self) -> GraphProjector {
        GraphProjector::new(self.stride)
    }
}
