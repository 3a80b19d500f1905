use crate::error::BuildError;
use crate::history::{ActionHistory, ReplayTarget};
use crate::ir::{Circuit, EditOp};

/// One circuit-editing session: the live circuit plus its edit history.
///
/// All mutation goes through [`Session::apply`], which validates the edit
/// against the live circuit before recording it. A rejected edit therefore
/// never enters the history, and the invariant "replaying the applied log
/// reconstructs the live circuit" holds at every step.
///
/// # Examples
///
/// ```
/// use q_forge::{EditOp, GateApp, GateKind, Session};
///
/// let mut session = Session::new();
/// session.apply(EditOp::AddQubit).unwrap();
/// session.apply(EditOp::AddGate(GateApp::single(GateKind::H, 0))).unwrap();
/// session.apply(EditOp::AddGate(GateApp::controlled(GateKind::CX, vec![0], 1))).unwrap();
/// assert_eq!(session.circuit().applied().len(), 2);
///
/// let undone = session.undo().unwrap();
/// assert_eq!(session.circuit().applied().len(), 1);
/// session.redo().unwrap();
/// assert_eq!(session.log().len(), 3);
/// # let _ = undone;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    circuit: Circuit,
    history: ActionHistory,
}

impl Session {
    /// Starts a session on the canonical one-qubit circuit.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::initial(),
            history: ActionHistory::new(),
        }
    }

    /// Reconstructs a session by replaying a stored operation log.
    ///
    /// The rebuilt session carries the full log, so every operation in it
    /// can be undone. Fails with [`BuildError::ReplayFailed`] if the log
    /// does not apply cleanly.
    pub fn from_log(ops: Vec<EditOp>) -> Result<Self, BuildError> {
        let history = ActionHistory::with_applied(ops);
        let circuit = history.replay()?;
        Ok(Self { circuit, history })
    }

    /// Applies one edit to the live circuit and records it.
    ///
    /// On failure the circuit and the history are both unchanged.
    pub fn apply(&mut self, op: EditOp) -> Result<(), BuildError> {
        self.circuit.apply(&op)?;
        self.history.record(op);
        Ok(())
    }

    /// Rolls back the most recent edit, returning it for UI feedback.
    pub fn undo(&mut self) -> Result<EditOp, BuildError> {
        self.history.undo(&mut self.circuit)
    }

    /// Reapplies the most recently undone edit.
    pub fn redo(&mut self) -> Result<EditOp, BuildError> {
        self.history.redo(&mut self.circuit)
    }

    /// Discards the circuit and its history, returning to the initial state.
    pub fn clear(&mut self) {
        self.history.clear(&mut self.circuit);
    }

    /// The live circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The edit history.
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// The applied operation log, oldest first.
    pub fn log(&self) -> &[EditOp] {
        self.history.applied()
    }

    /// Serializes the operation log to a JSON string.
    ///
    /// Callers own persistence; this crate never touches the filesystem.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.log())
    }

    /// Reconstructs a session from a JSON operation log produced by
    /// [`Session::to_json`].
    pub fn from_json(text: &str) -> Result<Self, String> {
        let ops: Vec<EditOp> = serde_json::from_str(text).map_err(|err| err.to_string())?;
        Self::from_log(ops).map_err(|err| err.to_string())
    }
}
