use crate::ir::{Circuit, GateApp, GateKind};

/// Emits OpenQASM 2.0 source for a circuit.
///
/// The output is a complete program (header, register declarations, one
/// statement per applied gate) and round-trips through
/// [`crate::parser::parse_qasm`]. Writing it to disk is the caller's
/// business.
pub struct CodeGenerator<'a> {
    circuit: &'a Circuit,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(circuit: &'a Circuit) -> Self {
        Self { circuit }
    }

    /// Generates the QASM source as a string.
    pub fn generate(&self) -> String {
        let mut qasm = String::new();
        qasm.push_str("OPENQASM 2.0;\n");
        qasm.push_str("include \"qelib1.inc\";\n");
        qasm.push_str(&format!("qreg q[{}];\n", self.circuit.num_qubits()));
        qasm.push_str(&format!("creg c[{}];\n", self.circuit.num_cbits()));
        for app in self.circuit.applied() {
            qasm.push_str(&statement(app));
        }
        qasm
    }
}

fn statement(app: &GateApp) -> String {
    // Applications recorded by a Circuit always name a target.
    let target = match app.targets.first() {
        Some(&t) => t,
        None => return String::new(),
    };
    match app.gate {
        GateKind::Measure => format!("measure q[{0}] -> c[{0}];\n", target),
        gate if gate.takes_angle() => {
            let angle = app.angle.unwrap_or(0.0);
            format!("{}({}) q[{}];\n", gate.qasm_name(), angle, target)
        }
        gate => {
            let mut operands: Vec<String> =
                app.controls.iter().map(|c| format!("q[{}]", c)).collect();
            operands.push(format!("q[{}]", target));
            format!("{} {};\n", gate.qasm_name(), operands.join(", "))
        }
    }
}
