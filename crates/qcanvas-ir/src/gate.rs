//! Gate placement records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every generated gate id.
pub const GATE_ID_PREFIX: &str = "gate";

/// Stable identity of a placed gate.
///
/// The id doubles as the gate's visual node id, so it survives moves between
/// layers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(String);

impl GateId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A gate living inside exactly one layer.
///
/// The gate records its own target register but not its layer; the layer is
/// whichever [`Layer`](crate::Layer) holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Stable identity.
    pub id: GateId,
    /// Operation label, e.g. `"X"`.
    pub name: String,
    /// Target register.
    pub register: usize,
    /// Control registers in the order they were attached.
    pub controls: Vec<usize>,
}

impl Gate {
    /// Create an uncontrolled gate.
    pub fn new(id: GateId, name: impl Into<String>, register: usize) -> Self {
        Self {
            id,
            name: name.into(),
            register,
            controls: Vec::new(),
        }
    }

    /// Whether any control is attached.
    pub fn is_controlled(&self) -> bool {
        !self.controls.is_empty()
    }

    /// Every register this gate touches: target first, then controls.
    pub fn registers(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.register).chain(self.controls.iter().copied())
    }

    /// Whether the gate touches `register` as target or control.
    pub fn references(&self, register: usize) -> bool {
        self.register == register || self.controls.contains(&register)
    }
}
