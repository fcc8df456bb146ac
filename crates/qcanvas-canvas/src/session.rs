//! Pending drag and connect interactions.
//!
//! A drag starts at the [`Palette`], which hands out a [`DragSession`]. The
//! session is neither `Clone` nor `Copy`: [`Canvas::drop`] and
//! [`Canvas::cancel_drag`] take it by value, so a drag completes at most
//! once and two drags cannot share state.
//!
//! [`Canvas::drop`]: crate::Canvas::drop
//! [`Canvas::cancel_drag`]: crate::Canvas::cancel_drag

use qcanvas_ir::GateId;
use tracing::debug;

/// Gate names available for dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    items: Vec<String>,
}

impl Palette {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Start dragging `name`. Returns `None` for names not in the palette.
    pub fn begin_drag(&self, name: &str) -> Option<DragSession> {
        if !self.contains(name) {
            debug!("Drag of unknown palette item '{name}' ignored");
            return None;
        }
        Some(DragSession {
            item: name.to_string(),
        })
    }
}

/// An in-flight palette drag.
#[derive(Debug, PartialEq, Eq)]
pub struct DragSession {
    item: String,
}

impl DragSession {
    /// Name of the gate being dragged.
    pub fn item(&self) -> &str {
        &self.item
    }

    pub(crate) fn into_item(self) -> String {
        self.item
    }
}

/// A control wire being drawn from a placed gate.
#[derive(Debug, PartialEq, Eq)]
pub struct ConnectSession {
    pub(crate) gate_id: GateId,
    pub(crate) layer: usize,
    pub(crate) register: usize,
}

impl ConnectSession {
    pub fn gate_id(&self) -> &GateId {
        &self.gate_id
    }

    /// Layer of the source gate. Controls can only land in this layer.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Target register of the source gate.
    pub fn register(&self) -> usize {
        self.register
    }
}
