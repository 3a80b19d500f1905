use super::gates::GateKind;
use super::operations::GateApp;
use crate::error::BuildError;
use std::fmt;

/// The live quantum circuit being edited.
///
/// A `Circuit` tracks its register sizes and the ordered record of gate
/// applications. It validates the structure of each application (control
/// arity, angle presence, index bounds) but knows nothing about gate
/// semantics; simulation and matrix math live elsewhere.
///
/// Classical bits are paired one-to-one with qubits: adding a qubit adds
/// its classical bit, and `Measure` on qubit `i` reads out into bit `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    num_cbits: usize,
    applied: Vec<GateApp>,
}

impl Circuit {
    /// Creates an empty circuit with the given register sizes.
    ///
    /// # Arguments
    ///
    /// * `num_qubits` - The number of qubits to allocate.
    /// * `num_cbits` - The number of classical bits to allocate.
    pub fn new(num_qubits: usize, num_cbits: usize) -> Self {
        Self {
            num_qubits,
            num_cbits,
            applied: Vec::new(),
        }
    }

    /// The canonical starting point for an editing session: one qubit, one
    /// classical bit, no gates.
    pub fn initial() -> Self {
        Self::new(1, 1)
    }

    /// Total number of qubits in the circuit.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Total number of classical bits in the circuit.
    pub fn num_cbits(&self) -> usize {
        self.num_cbits
    }

    /// The ordered record of gate applications.
    pub fn applied(&self) -> &[GateApp] {
        &self.applied
    }

    /// Appends one qubit and its paired classical bit.
    ///
    /// The new qubit's index is the previous qubit count.
    pub fn add_qubit(&mut self) -> usize {
        let index = self.num_qubits;
        self.num_qubits += 1;
        self.num_cbits += 1;
        index
    }

    /// Validates and records one gate application.
    ///
    /// Checks are structural only: control arity, angle presence, a named
    /// target, and index bounds. Any failure leaves the circuit unchanged.
    pub fn apply_gate(&mut self, app: &GateApp) -> Result<(), BuildError> {
        let required = app.gate.required_controls();
        if app.controls.len() < required {
            return Err(BuildError::InsufficientControls {
                gate: app.gate,
                required,
                supplied: app.controls.len(),
            });
        }
        if app.gate.takes_angle() && app.angle.is_none() {
            return Err(BuildError::MissingAngle { gate: app.gate });
        }
        if app.targets.is_empty() {
            return Err(BuildError::MissingTarget { gate: app.gate });
        }
        for &index in app.targets.iter().chain(app.controls.iter()) {
            if index >= self.num_qubits {
                return Err(BuildError::QubitOutOfRange {
                    index,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.applied.push(app.clone());
        Ok(())
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::initial()
    }
}

const GATE_WIDTH: usize = 7;

fn wire_segment(symbol: &str) -> String {
    let len = symbol.chars().count();
    if len >= GATE_WIDTH {
        return symbol.chars().take(GATE_WIDTH).collect();
    }
    let dashes = GATE_WIDTH - len;
    let before = dashes / 2;
    let after = dashes - before;
    format!("{}{}{}", "─".repeat(before), symbol, "─".repeat(after))
}

/// Symbol drawn on the target wire.
fn target_symbol(gate: GateKind) -> &'static str {
    match gate {
        GateKind::H => "H",
        GateKind::X | GateKind::CX | GateKind::CCX => "X",
        GateKind::Y | GateKind::CY => "Y",
        GateKind::Z | GateKind::CZ => "Z",
        GateKind::S => "S",
        GateKind::T => "T",
        GateKind::RX => "RX",
        GateKind::RY => "RY",
        GateKind::RZ => "RZ",
        GateKind::Swap => "x",
        GateKind::Measure => "M",
    }
}

impl fmt::Display for Circuit {
    /// Renders the circuit as a text wire diagram, one row per qubit and one
    /// column per applied gate, with `●` on control wires and vertical bars
    /// linking controls to their targets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit[{} qubit(s), {} gate(s)]",
            self.num_qubits,
            self.applied.len()
        )?;
        if self.num_qubits == 0 {
            return Ok(());
        }

        let cols = self.applied.len();
        let mut grid = vec![vec![wire_segment(""); cols]; self.num_qubits];
        // link[r][t] set when a vertical connector runs below row r at column t
        let mut link = vec![vec![false; cols]; self.num_qubits];

        for (t, app) in self.applied.iter().enumerate() {
            for &q in &app.targets {
                grid[q][t] = wire_segment(target_symbol(app.gate));
            }
            let control_symbol = if app.gate == GateKind::Swap { "x" } else { "●" };
            for &c in &app.controls {
                grid[c][t] = wire_segment(control_symbol);
            }
            let involved = app.targets.iter().chain(app.controls.iter());
            if let (Some(min), Some(max)) = (involved.clone().min(), involved.max()) {
                for row in link.iter_mut().take(*max).skip(*min) {
                    row[t] = true;
                }
            }
        }

        let label_width = format!("q{}", self.num_qubits - 1).len() + 2;
        for r in 0..self.num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = label_width)?;
            writeln!(f, "{}", grid[r].join(""))?;

            if r + 1 < self.num_qubits {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..cols {
                    let pad = GATE_WIDTH - 1;
                    let before = pad / 2;
                    let after = pad - before;
                    let connector = if link[r][t] { '│' } else { ' ' };
                    write!(f, "{}{}{}", " ".repeat(before), connector, " ".repeat(after))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
