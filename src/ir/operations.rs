use super::gates::GateKind;
use serde::{Deserialize, Serialize};

/// One gate application: which gate, where it acts, and its angle if any.
///
/// Values are never mutated after construction; the history engine relies on
/// replaying them byte-for-byte as recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateApp {
    /// The gate to apply.
    pub gate: GateKind,
    /// Indices of the target qubits.
    pub targets: Vec<usize>,
    /// Indices of the control qubits (empty for uncontrolled gates).
    pub controls: Vec<usize>,
    /// Rotation angle in radians, for RX/RY/RZ.
    pub angle: Option<f64>,
}

impl GateApp {
    /// A single-qubit gate on `target`.
    pub fn single(gate: GateKind, target: usize) -> Self {
        Self {
            gate,
            targets: vec![target],
            controls: Vec::new(),
            angle: None,
        }
    }

    /// A rotation gate on `target` with the given angle in radians.
    pub fn rotation(gate: GateKind, target: usize, angle: f64) -> Self {
        Self {
            gate,
            targets: vec![target],
            controls: Vec::new(),
            angle: Some(angle),
        }
    }

    /// A controlled gate with explicit control and target lists.
    pub fn controlled(gate: GateKind, controls: Vec<usize>, target: usize) -> Self {
        Self {
            gate,
            targets: vec![target],
            controls,
            angle: None,
        }
    }
}

/// Represents a single recorded edit to the circuit.
///
/// The operation log is a sequence of these; replaying it from a fresh
/// model reconstructs the circuit exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditOp {
    /// Append one qubit and its paired classical bit.
    AddQubit,
    /// Apply a gate to the circuit.
    AddGate(GateApp),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_app_constructors() {
        let h = GateApp::single(GateKind::H, 0);
        assert_eq!(h.targets, vec![0]);
        assert!(h.controls.is_empty());
        assert_eq!(h.angle, None);

        let rx = GateApp::rotation(GateKind::RX, 1, 0.5);
        assert_eq!(rx.angle, Some(0.5));

        let ccx = GateApp::controlled(GateKind::CCX, vec![0, 1], 2);
        assert_eq!(ccx.controls, vec![0, 1]);
        assert_eq!(ccx.targets, vec![2]);
    }

    #[test]
    fn test_edit_op_equality_is_by_value() {
        let a = EditOp::AddGate(GateApp::rotation(GateKind::RZ, 0, 1.25));
        let b = EditOp::AddGate(GateApp::rotation(GateKind::RZ, 0, 1.25));
        assert_eq!(a, b);
        assert_ne!(a, EditOp::AddQubit);
    }
}
