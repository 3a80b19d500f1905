use crate::error::BuildError;
use crate::ir::{Circuit, EditOp};

/// The replay engine's view of the circuit model.
///
/// `fresh` produces the canonical initial state and `apply` maps one
/// recorded edit onto the model. The history engine never inspects the
/// model beyond this contract.
pub trait ReplayTarget: Sized {
    /// Produces a model in the canonical initial state.
    fn fresh() -> Self;

    /// Applies one recorded edit to the model.
    fn apply(&mut self, op: &EditOp) -> Result<(), BuildError>;
}

impl ReplayTarget for Circuit {
    fn fresh() -> Self {
        Circuit::initial()
    }

    fn apply(&mut self, op: &EditOp) -> Result<(), BuildError> {
        match op {
            EditOp::AddQubit => {
                self.add_qubit();
                Ok(())
            }
            EditOp::AddGate(app) => self.apply_gate(app),
        }
    }
}

/// Linear undo/redo history over recorded circuit edits.
///
/// `applied` holds the operations currently reflected in the live model,
/// oldest first; `undone` holds operations popped off by undo, most
/// recently undone last. Undo and redo rebuild the model by replaying the
/// full `applied` log against a fresh instance. Replay-from-scratch costs
/// O(n) work per step; in exchange it needs neither invertible gates nor
/// removal of an interior operation from the model, and it stays exact for
/// the interactively built circuits this crate targets.
///
/// Redo reapplies the stored operation value, angle and control lists
/// included; nothing is re-derived from a textual description of the edit.
#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    applied: Vec<EditOp>,
    undone: Vec<EditOp>,
}

impl ActionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a history whose `applied` log is already known, e.g. when
    /// reconstructing a session from a stored log.
    pub(crate) fn with_applied(applied: Vec<EditOp>) -> Self {
        Self {
            applied,
            undone: Vec::new(),
        }
    }

    /// Records an operation the caller has already applied to the live
    /// model. Clears any pending redo future.
    pub fn record(&mut self, op: EditOp) {
        self.applied.push(op);
        self.undone.clear();
    }

    /// Rolls back the most recent operation.
    ///
    /// Pops the last applied operation, rebuilds the model by replaying the
    /// shortened log, and returns the popped operation for UI feedback.
    /// Fails with [`BuildError::NothingToUndo`] when the log is empty, and
    /// with [`BuildError::ReplayFailed`] if the rebuild aborts; in both
    /// cases the log and the live model are left unchanged.
    pub fn undo<T: ReplayTarget>(&mut self, model: &mut T) -> Result<EditOp, BuildError> {
        let op = self.applied.pop().ok_or(BuildError::NothingToUndo)?;
        match self.replay() {
            Ok(rebuilt) => {
                *model = rebuilt;
                self.undone.push(op.clone());
                Ok(op)
            }
            Err(err) => {
                self.applied.push(op);
                Err(err)
            }
        }
    }

    /// Reapplies the most recently undone operation.
    ///
    /// Fails with [`BuildError::NothingToRedo`] when no undone operation is
    /// pending, and with [`BuildError::ReplayFailed`] if the rebuild aborts;
    /// in both cases the log and the live model are left unchanged.
    pub fn redo<T: ReplayTarget>(&mut self, model: &mut T) -> Result<EditOp, BuildError> {
        let op = self.undone.pop().ok_or(BuildError::NothingToRedo)?;
        self.applied.push(op.clone());
        match self.replay() {
            Ok(rebuilt) => {
                *model = rebuilt;
                Ok(op)
            }
            Err(err) => {
                self.applied.pop();
                self.undone.push(op);
                Err(err)
            }
        }
    }

    /// Empties both stacks and resets the model to its initial state.
    pub fn clear<T: ReplayTarget>(&mut self, model: &mut T) {
        self.applied.clear();
        self.undone.clear();
        *model = T::fresh();
    }

    /// Rebuilds a model from scratch by applying `applied` oldest-first.
    ///
    /// The result replaces the live model only on success, so an aborted
    /// replay leaves no partial state behind.
    pub(crate) fn replay<T: ReplayTarget>(&self) -> Result<T, BuildError> {
        let mut model = T::fresh();
        for op in &self.applied {
            model.apply(op).map_err(|err| BuildError::ReplayFailed {
                cause: Box::new(err),
            })?;
        }
        Ok(model)
    }

    /// Operations currently reflected in the live model, oldest first.
    pub fn applied(&self) -> &[EditOp] {
        &self.applied
    }

    /// Whether an undo is possible.
    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Whether a redo is possible.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of applied operations.
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    /// Whether the applied log is empty.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
