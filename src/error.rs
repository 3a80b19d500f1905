use crate::ir::GateKind;
use std::fmt;

/// Error type covering every recoverable failure the builder can report.
///
/// All variants are conditions returned to the caller; none of them ends the
/// editing session. UI layers are expected to surface the `Display` text.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A gate name could not be resolved to a supported [`GateKind`].
    UnknownGate {
        /// The name as supplied by the caller.
        name: String,
    },

    /// A controlled gate was given fewer control qubits than it needs.
    InsufficientControls {
        /// The gate being applied.
        gate: GateKind,
        /// Number of controls the gate requires.
        required: usize,
        /// Number of controls actually supplied.
        supplied: usize,
    },

    /// A rotation gate was applied without its angle.
    MissingAngle {
        /// The gate being applied.
        gate: GateKind,
    },

    /// A gate application named no target qubit.
    MissingTarget {
        /// The gate being applied.
        gate: GateKind,
    },

    /// A target or control index is outside the circuit's qubit range.
    QubitOutOfRange {
        /// The offending qubit index.
        index: usize,
        /// Number of qubits currently in the circuit.
        num_qubits: usize,
    },

    /// Undo was requested with no applied operations left.
    NothingToUndo,

    /// Redo was requested with no undone operations pending.
    NothingToRedo,

    /// Rebuilding the model from the operation log failed partway through.
    ///
    /// The recorded log and the live model are left exactly as they were
    /// before the replay started.
    ReplayFailed {
        /// The collaborator error that aborted the replay.
        cause: Box<BuildError>,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnknownGate { name } => {
                write!(f, "unknown gate '{}'", name)
            }
            BuildError::InsufficientControls {
                gate,
                required,
                supplied,
            } => write!(
                f,
                "{} gate requires {} control qubit(s), got {}",
                gate.name(),
                required,
                supplied
            ),
            BuildError::MissingAngle { gate } => {
                write!(f, "{} gate requires a rotation angle", gate.name())
            }
            BuildError::MissingTarget { gate } => {
                write!(f, "{} gate requires a target qubit", gate.name())
            }
            BuildError::QubitOutOfRange { index, num_qubits } => write!(
                f,
                "qubit index {} out of range for a {}-qubit circuit",
                index, num_qubits
            ),
            BuildError::NothingToUndo => write!(f, "no actions to undo"),
            BuildError::NothingToRedo => write!(f, "no actions to redo"),
            BuildError::ReplayFailed { cause } => {
                write!(f, "replay of the operation log failed: {}", cause)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::ReplayFailed { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
