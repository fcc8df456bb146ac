//! Gate placement, control links and moves.
//!
//! These are the only operations that touch gates. Each one either commits
//! completely or returns an [`IrError`] with the circuit left as it was, so
//! the occupancy invariant holds after every call:
//!
//! ```text
//!   layer.occupied == ⋃ { gate.register } ∪ gate.controls   (for every layer)
//! ```

use tracing::debug;

use crate::circuit::CircuitModel;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateId};
use crate::layer::Slot;
use crate::placement::{PlacementEngine, Position};

/// What a move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The gate now lives at `to`.
    Moved { from: Slot, to: Slot },
    /// The target resolved to the gate's current slot.
    Unchanged,
    /// Nothing free within the snap radius.
    NoSnap,
}

impl MoveOutcome {
    /// Whether the circuit changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Place an uncontrolled gate at `(layer, register)`.
///
/// The slot is assumed free (callers resolve it through
/// [`PlacementEngine::resolve_index`]); only the bounds are checked.
pub fn add_gate(
    circuit: &mut CircuitModel,
    id: GateId,
    name: impl Into<String>,
    layer: usize,
    register: usize,
) -> IrResult<()> {
    circuit.check_register(register)?;
    let gate = Gate::new(id, name, register);
    debug!("Placing gate '{}' ({}) at {}", gate.id, gate.name, Slot::new(layer, register));
    circuit.layer_mut(layer)?.insert(gate);
    Ok(())
}

/// Attach `control` to the gate `id` sitting on `gate_register` in `layer`.
///
/// Matching on both id and register guards against a stale or duplicated
/// id. The control must be a different, free, in-range register.
pub fn add_control(
    circuit: &mut CircuitModel,
    id: &GateId,
    layer: usize,
    gate_register: usize,
    control: usize,
) -> IrResult<()> {
    circuit.check_register(control)?;
    let target = circuit.layer_mut(layer)?;

    if target.gate_mut_at(id, gate_register).is_none() {
        return Err(IrError::GateNotFound {
            id: id.clone(),
            slot: Some(Slot::new(layer, gate_register)),
        });
    }
    if control == gate_register {
        return Err(IrError::SelfControl {
            id: id.clone(),
            register: gate_register,
        });
    }
    if target.is_occupied(control) {
        return Err(IrError::RegisterOccupied {
            layer,
            register: control,
        });
    }

    if let Some(gate) = target.gate_mut_at(id, gate_register) {
        gate.controls.push(control);
    }
    target.occupy(control);
    debug!("Gate '{id}' in layer {layer} now controlled by register {control}");
    Ok(())
}

/// Move gate `id` to the free slot nearest `to`.
///
/// The gate keeps its id, name and controls. The move is refused when a
/// carried control would land on the new target register or on a register
/// another gate already holds in the destination layer.
pub fn move_gate(
    circuit: &mut CircuitModel,
    placement: &PlacementEngine,
    id: &GateId,
    to: Position,
) -> IrResult<MoveOutcome> {
    let (origin_layer, register) = circuit
        .find_gate(id)
        .map(|(layer, gate)| (layer, gate.register))
        .ok_or_else(|| IrError::GateNotFound {
            id: id.clone(),
            slot: None,
        })?;
    let from = Slot::new(origin_layer, register);

    let Some(dest) = placement.resolve_index(circuit, to) else {
        debug!("Move of '{id}' found no slot near ({}, {})", to.x, to.y);
        return Ok(MoveOutcome::NoSnap);
    };
    if dest == from {
        return Ok(MoveOutcome::Unchanged);
    }
    check_controls_fit(circuit, id, dest)?;

    let origin = circuit.layer_mut(origin_layer)?;
    let index = origin.position_of(id).ok_or_else(|| IrError::GateNotFound {
        id: id.clone(),
        slot: Some(from),
    })?;
    let mut gate = origin.take(index);
    gate.register = dest.register;

    // Resolved slots always index an existing layer.
    circuit.layer_mut(dest.layer)?.insert(gate);
    debug!("Moved gate '{id}' from {from} to {dest}");
    Ok(MoveOutcome::Moved { from, to: dest })
}

/// Refuse a move whose carried controls would double-book `dest.layer`.
fn check_controls_fit(circuit: &CircuitModel, id: &GateId, dest: Slot) -> IrResult<()> {
    let Some((_, gate)) = circuit.find_gate(id) else {
        return Ok(());
    };
    let Some(layer) = circuit.layer(dest.layer) else {
        return Ok(());
    };

    for &control in &gate.controls {
        if control == dest.register {
            return Err(IrError::SelfControl {
                id: id.clone(),
                register: control,
            });
        }
        let taken = layer
            .gates()
            .iter()
            .filter(|g| &g.id != id)
            .any(|g| g.references(control));
        if taken {
            return Err(IrError::RegisterOccupied {
                layer: dest.layer,
                register: control,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(circuit: &CircuitModel, layer: usize) -> Vec<usize> {
        circuit.layers()[layer].occupied().iter().copied().collect()
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = CircuitModel::with_size(1, 2);
        add_gate(&mut circuit, GateId::new("g1"), "X", 0, 0).unwrap();

        let layer = &circuit.layers()[0];
        assert_eq!(layer.gates().len(), 1);
        assert_eq!(layer.gates()[0].name, "X");
        assert!(layer.gates()[0].controls.is_empty());
        assert_eq!(occupied(&circuit, 0), vec![0]);
        assert!(circuit.layers()[1].is_empty());
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = CircuitModel::with_size(1, 1);
        let before = circuit.clone();
        assert!(matches!(
            add_gate(&mut circuit, GateId::new("g"), "X", 4, 0),
            Err(IrError::LayerNotFound { index: 4, .. })
        ));
        assert!(matches!(
            add_gate(&mut circuit, GateId::new("g"), "X", 0, 1),
            Err(IrError::QubitNotFound { index: 1, .. })
        ));
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_add_control() {
        let mut circuit = CircuitModel::with_size(2, 1);
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "X", 0, 0).unwrap();
        add_control(&mut circuit, &id, 0, 0, 1).unwrap();

        assert_eq!(circuit.layers()[0].gates()[0].controls, vec![1]);
        assert_eq!(occupied(&circuit, 0), vec![0, 1]);
    }

    #[test]
    fn test_add_control_requires_matching_register() {
        let mut circuit = CircuitModel::with_size(3, 1);
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "X", 0, 0).unwrap();
        let before = circuit.clone();

        let err = add_control(&mut circuit, &id, 0, 1, 2).unwrap_err();
        assert!(matches!(err, IrError::GateNotFound { slot: Some(_), .. }));
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_add_control_rejects_self_and_occupied() {
        let mut circuit = CircuitModel::with_size(3, 1);
        let a = GateId::new("a");
        let b = GateId::new("b");
        add_gate(&mut circuit, a.clone(), "X", 0, 0).unwrap();
        add_gate(&mut circuit, b, "H", 0, 2).unwrap();
        let before = circuit.clone();

        assert!(matches!(
            add_control(&mut circuit, &a, 0, 0, 0),
            Err(IrError::SelfControl { register: 0, .. })
        ));
        assert!(matches!(
            add_control(&mut circuit, &a, 0, 0, 2),
            Err(IrError::RegisterOccupied { register: 2, .. })
        ));
        assert!(matches!(
            add_control(&mut circuit, &a, 0, 0, 9),
            Err(IrError::QubitNotFound { index: 9, .. })
        ));
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_move_gate_between_layers() {
        let mut circuit = CircuitModel::with_size(2, 2);
        let placement = PlacementEngine::default();
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "X", 0, 0).unwrap();
        add_control(&mut circuit, &id, 0, 0, 1).unwrap();

        // Layer 1 is empty; aim near the center of (1, 0).
        let outcome = move_gate(&mut circuit, &placement, &id, Position::new(243.0, 2.0)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Slot::new(0, 0),
                to: Slot::new(1, 0),
            }
        );

        assert!(circuit.layers()[0].is_empty());
        assert!(occupied(&circuit, 0).is_empty());

        let moved = &circuit.layers()[1].gates()[0];
        assert_eq!(moved.id, id);
        assert_eq!(moved.register, 0);
        assert_eq!(moved.controls, vec![1]);
        assert_eq!(occupied(&circuit, 1), vec![0, 1]);
    }

    #[test]
    fn test_move_gate_within_layer() {
        let mut circuit = CircuitModel::with_size(3, 1);
        let placement = PlacementEngine::default();
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "H", 0, 0).unwrap();

        let outcome = move_gate(&mut circuit, &placement, &id, Position::new(120.0, 240.0)).unwrap();
        assert!(outcome.is_moved());
        assert_eq!(circuit.gate_at(Slot::new(0, 2)).map(|g| &g.id), Some(&id));
        assert_eq!(occupied(&circuit, 0), vec![2]);
    }

    #[test]
    fn test_move_gate_without_snap_is_noop() {
        let mut circuit = CircuitModel::with_size(2, 2);
        let placement = PlacementEngine::default();
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "X", 0, 0).unwrap();
        let before = circuit.clone();

        let outcome = move_gate(&mut circuit, &placement, &id, Position::new(500.0, 500.0)).unwrap();
        assert_eq!(outcome, MoveOutcome::NoSnap);
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_move_gate_onto_itself_is_noop() {
        let mut circuit = CircuitModel::with_size(2, 2);
        let placement = PlacementEngine::default();
        let id = GateId::new("g1");
        add_gate(&mut circuit, id.clone(), "X", 0, 0).unwrap();
        let before = circuit.clone();

        // The gate's own slot is occupied, so nothing resolves there.
        let outcome = move_gate(&mut circuit, &placement, &id, Position::new(120.0, 0.0)).unwrap();
        assert!(!outcome.is_moved());
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_move_refused_when_control_collides() {
        let mut circuit = CircuitModel::with_size(2, 2);
        let placement = PlacementEngine::default();
        let a = GateId::new("a");
        add_gate(&mut circuit, a.clone(), "X", 0, 0).unwrap();
        add_control(&mut circuit, &a, 0, 0, 1).unwrap();
        add_gate(&mut circuit, GateId::new("b"), "H", 1, 1).unwrap();
        let before = circuit.clone();

        // (1, 0) is free, but the control on register 1 would collide with "b".
        let err = move_gate(&mut circuit, &placement, &a, Position::new(240.0, 0.0)).unwrap_err();
        assert!(matches!(err, IrError::RegisterOccupied { layer: 1, register: 1 }));
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_move_unknown_gate() {
        let mut circuit = CircuitModel::with_size(1, 1);
        let placement = PlacementEngine::default();
        let err = move_gate(&mut circuit, &placement, &GateId::new("nope"), Position::new(120.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, IrError::GateNotFound { slot: None, .. }));
    }
}
