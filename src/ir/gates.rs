use crate::error::BuildError;
use serde::{Deserialize, Serialize};

/// Quantum Gate Vocabulary
///
/// This enum is the closed set of gates the builder can apply.
/// It covers the standard single-qubit gates (H, X, Y, Z, S, T),
/// parameterized rotations (RX, RY, RZ), controlled gates
/// (CX, CY, CZ, Swap, CCX) and measurement.
///
/// Gate names are resolved to variants up front, so an unrecognized
/// name is rejected when an operation is constructed rather than
/// when the log is replayed.
///
/// # Examples
///
/// ```
/// use q_forge::ir::GateKind;
/// let h = GateKind::from_name("H").unwrap();
/// assert_eq!(h, GateKind::H);
/// assert!(GateKind::from_name("FOO").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate
    H,
    /// Pauli-X gate (NOT)
    X,
    /// Pauli-Y gate
    Y,
    /// Pauli-Z gate
    Z,
    /// S gate (sqrt(Z))
    S,
    /// T gate (sqrt(S))
    T,
    /// Rotation around the X-axis
    RX,
    /// Rotation around the Y-axis
    RY,
    /// Rotation around the Z-axis
    RZ,
    /// Controlled-NOT gate
    CX,
    /// Controlled-Y gate
    CY,
    /// Controlled-Z gate
    CZ,
    /// Swap gate
    Swap,
    /// Toffoli gate (double-controlled NOT)
    CCX,
    /// Measurement into the paired classical bit
    Measure,
}

impl GateKind {
    /// Resolves a user-facing gate name to its variant.
    ///
    /// Fails with [`BuildError::UnknownGate`] for any name outside the
    /// supported vocabulary.
    pub fn from_name(name: &str) -> Result<Self, BuildError> {
        match name {
            "H" => Ok(GateKind::H),
            "X" => Ok(GateKind::X),
            "Y" => Ok(GateKind::Y),
            "Z" => Ok(GateKind::Z),
            "S" => Ok(GateKind::S),
            "T" => Ok(GateKind::T),
            "RX" => Ok(GateKind::RX),
            "RY" => Ok(GateKind::RY),
            "RZ" => Ok(GateKind::RZ),
            "CX" => Ok(GateKind::CX),
            "CY" => Ok(GateKind::CY),
            "CZ" => Ok(GateKind::CZ),
            "Swap" => Ok(GateKind::Swap),
            "CCX" => Ok(GateKind::CCX),
            "Measure" => Ok(GateKind::Measure),
            _ => Err(BuildError::UnknownGate {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::RX => "RX",
            GateKind::RY => "RY",
            GateKind::RZ => "RZ",
            GateKind::CX => "CX",
            GateKind::CY => "CY",
            GateKind::CZ => "CZ",
            GateKind::Swap => "Swap",
            GateKind::CCX => "CCX",
            GateKind::Measure => "Measure",
        }
    }

    /// Resolves an OpenQASM 2.0 mnemonic to its variant.
    pub fn from_qasm_name(name: &str) -> Result<Self, BuildError> {
        match name {
            "h" => Ok(GateKind::H),
            "x" => Ok(GateKind::X),
            "y" => Ok(GateKind::Y),
            "z" => Ok(GateKind::Z),
            "s" => Ok(GateKind::S),
            "t" => Ok(GateKind::T),
            "rx" => Ok(GateKind::RX),
            "ry" => Ok(GateKind::RY),
            "rz" => Ok(GateKind::RZ),
            "cx" => Ok(GateKind::CX),
            "cy" => Ok(GateKind::CY),
            "cz" => Ok(GateKind::CZ),
            "swap" => Ok(GateKind::Swap),
            "ccx" => Ok(GateKind::CCX),
            "measure" => Ok(GateKind::Measure),
            _ => Err(BuildError::UnknownGate {
                name: name.to_string(),
            }),
        }
    }

    /// OpenQASM 2.0 mnemonic for this gate.
    pub fn qasm_name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::RX => "rx",
            GateKind::RY => "ry",
            GateKind::RZ => "rz",
            GateKind::CX => "cx",
            GateKind::CY => "cy",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::CCX => "ccx",
            GateKind::Measure => "measure",
        }
    }

    /// Number of control qubits the gate requires.
    ///
    /// Swap takes its first operand through the control slot, matching the
    /// two-operand flow it shares with CX/CY/CZ.
    pub fn required_controls(&self) -> usize {
        match self {
            GateKind::CX | GateKind::CY | GateKind::CZ | GateKind::Swap => 1,
            GateKind::CCX => 2,
            _ => 0,
        }
    }

    /// Whether the gate carries a rotation angle.
    pub fn takes_angle(&self) -> bool {
        matches!(self, GateKind::RX | GateKind::RY | GateKind::RZ)
    }
}
