//! `q-forge` - an interactive quantum circuit builder core.
//!
//! The crate models circuit editing as a log of recorded operations:
//! every edit (adding a qubit, applying a gate) is an [`EditOp`] value,
//! and undo/redo work by replaying the retained log against a fresh
//! [`Circuit`]. On top of the log it provides OpenQASM 2.0 import/export
//! and JSON serialization of editing sessions. Simulation and matrix
//! math are deliberately out of scope.
//!
//! # Examples
//!
//! ```
//! use q_forge::{CodeGenerator, EditOp, GateApp, GateKind, Session};
//!
//! // Build a bell pair interactively.
//! let mut session = Session::new();
//! session.apply(EditOp::AddQubit).unwrap();
//! session.apply(EditOp::AddGate(GateApp::single(GateKind::H, 0))).unwrap();
//! session.apply(EditOp::AddGate(GateApp::controlled(GateKind::CX, vec![0], 1))).unwrap();
//!
//! // Second thoughts about the entangler...
//! let undone = session.undo().unwrap();
//! assert_eq!(undone, EditOp::AddGate(GateApp::controlled(GateKind::CX, vec![0], 1)));
//! // ...no, it was fine.
//! session.redo().unwrap();
//!
//! let qasm = CodeGenerator::new(session.circuit()).generate();
//! assert!(qasm.contains("cx q[0], q[1];"));
//! ```

pub mod codegen;
pub mod error;
pub mod history;
pub mod ir;
pub mod parser;
pub mod session;

// Re-export the most common types for easier top-level use
pub use codegen::CodeGenerator;
pub use error::BuildError;
pub use history::{ActionHistory, ReplayTarget};
pub use ir::{Circuit, EditOp, GateApp, GateKind};
pub use parser::parse_qasm;
pub use session::Session;
