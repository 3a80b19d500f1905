//! OpenQASM 2.0 import.
//!
//! Parses a QASM source string into the operation log that rebuilds the
//! circuit, so an imported file arrives as a fully undoable editing session.
//! The accepted grammar is the subset the builder itself emits: the version
//! header, `include` (ignored), `qreg`/`creg` declarations, calls to the
//! supported gates, and `measure`.

use crate::ir::{EditOp, GateApp, GateKind};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0, space0, space1},
    combinator::{map, map_res, opt, recognize, value},
    multi::{many0, separated_list1},
    number::complete::double,
    sequence::{delimited, pair, tuple},
    IResult,
};
use std::collections::HashMap;

/// One parsed QASM statement, before lowering to edit operations.
#[derive(Debug, Clone, PartialEq)]
enum Statement {
    QReg(String, usize),
    CReg(String, usize),
    Gate(String, Vec<f64>, Vec<(String, usize)>), // Name, Params, Operands
    Measure((String, usize), (String, usize)),    // Qubit -> Cbit
    Ignore,
}

// --- Grammar ---

fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

fn usize_parser(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(tag("//"), take_while(|c| c != '\n')))(input)
}

fn openqasm_version(input: &str) -> IResult<&str, String> {
    map(
        tuple((
            tag("OPENQASM"),
            space1,
            take_while1(|c: char| c != ';'),
            tag(";"),
        )),
        |(_, _, version, _): (&str, &str, &str, &str)| version.to_string(),
    )(input)
}

fn include(input: &str) -> IResult<&str, Statement> {
    value(
        Statement::Ignore,
        tuple((
            tag("include"),
            space1,
            delimited(char('"'), take_while1(|c| c != '"'), char('"')),
            space0,
            tag(";"),
        )),
    )(input)
}

fn qreg(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("qreg"),
            space1,
            identifier,
            delimited(char('['), usize_parser, char(']')),
            space0,
            tag(";"),
        )),
        |(_, _, name, size, _, _)| Statement::QReg(name, size),
    )(input)
}

fn creg(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("creg"),
            space1,
            identifier,
            delimited(char('['), usize_parser, char(']')),
            space0,
            tag(";"),
        )),
        |(_, _, name, size, _, _)| Statement::CReg(name, size),
    )(input)
}

fn bit_ref(input: &str) -> IResult<&str, (String, usize)> {
    pair(identifier, delimited(char('['), usize_parser, char(']')))(input)
}

fn measure(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("measure"),
            space1,
            bit_ref,
            space0,
            tag("->"),
            space0,
            bit_ref,
            space0,
            tag(";"),
        )),
        |(_, _, qubit, _, _, _, cbit, _, _)| Statement::Measure(qubit, cbit),
    )(input)
}

fn gate_call(input: &str) -> IResult<&str, Statement> {
    let (input, name) = identifier(input)?;
    let (input, params) = opt(delimited(
        char('('),
        separated_list1(tuple((space0, char(','), space0)), double),
        char(')'),
    ))(input)?;
    let (input, _) = space1(input)?;
    let (input, operands) =
        separated_list1(tuple((space0, char(','), space0)), bit_ref)(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = tag(";")(input)?;

    Ok((
        input,
        Statement::Gate(name, params.unwrap_or_default(), operands),
    ))
}

// --- Lowering ---

#[derive(Default)]
struct ImportContext {
    /// Register name -> (global start index, size).
    qregs: HashMap<String, (usize, usize)>,
    /// Total qubits declared so far.
    declared: usize,
}

fn resolve(ctx: &ImportContext, reg: &str, index: usize) -> Result<usize, String> {
    let &(start, size) = ctx
        .qregs
        .get(reg)
        .ok_or_else(|| format!("undefined quantum register: {}", reg))?;
    if index >= size {
        return Err(format!("qubit index out of bounds: {}[{}]", reg, index));
    }
    Ok(start + index)
}

fn arrange(gate: GateKind, name: &str, params: &[f64], qubits: Vec<usize>) -> Result<GateApp, String> {
    if gate == GateKind::Measure {
        return Err("measure must be written as 'measure q[i] -> c[i];'".to_string());
    }
    let control_count = gate.required_controls();
    let expected = control_count + 1;
    if qubits.len() != expected {
        return Err(format!(
            "{} expects {} qubit operand(s), got {}",
            name,
            expected,
            qubits.len()
        ));
    }
    let angle = if gate.takes_angle() {
        match params.first() {
            Some(&angle) => Some(angle),
            None => return Err(format!("{} requires an angle parameter", name)),
        }
    } else if params.is_empty() {
        None
    } else {
        return Err(format!("{} takes no parameters", name));
    };
    let (controls, targets) = qubits.split_at(control_count);
    Ok(GateApp {
        gate,
        targets: targets.to_vec(),
        controls: controls.to_vec(),
        angle,
    })
}

fn lower(
    statement: Statement,
    ctx: &mut ImportContext,
    ops: &mut Vec<EditOp>,
) -> Result<(), String> {
    match statement {
        Statement::QReg(name, size) => {
            if ctx.qregs.contains_key(&name) {
                return Err(format!("duplicate quantum register: {}", name));
            }
            ctx.qregs.insert(name, (ctx.declared, size));
            for _ in 0..size {
                // The session starts with one qubit; only the rest are edits.
                if ctx.declared > 0 {
                    ops.push(EditOp::AddQubit);
                }
                ctx.declared += 1;
            }
            Ok(())
        }
        // Classical bits mirror qubits one-to-one in this model.
        Statement::CReg(_, _) | Statement::Ignore => Ok(()),
        Statement::Measure((reg, index), _) => {
            let qubit = resolve(ctx, &reg, index)?;
            ops.push(EditOp::AddGate(GateApp::single(GateKind::Measure, qubit)));
            Ok(())
        }
        Statement::Gate(name, params, operands) => {
            let gate = GateKind::from_qasm_name(&name).map_err(|err| err.to_string())?;
            let qubits = operands
                .iter()
                .map(|(reg, index)| resolve(ctx, reg, *index))
                .collect::<Result<Vec<_>, _>>()?;
            let app = arrange(gate, &name, &params, qubits)?;
            ops.push(EditOp::AddGate(app));
            Ok(())
        }
    }
}

fn context_snippet(input: &str) -> String {
    input.chars().take(24).collect()
}

/// Parses an OpenQASM 2.0 program into the operation log that rebuilds it.
///
/// The log is relative to the canonical initial session state (one qubit),
/// so a `qreg` of size `n` contributes `n - 1` [`EditOp::AddQubit`] edits.
pub fn parse_qasm(input: &str) -> Result<Vec<EditOp>, String> {
    let mut current_input = input;

    // 1. Skip initial comments/whitespace and parse the header
    loop {
        let (rem, _) = multispace0::<&str, nom::error::Error<&str>>(current_input)
            .map_err(|e| e.to_string())?;
        current_input = rem;

        if current_input.is_empty() {
            return Err("Empty file or missing OPENQASM header".to_string());
        }
        if let Ok((rem, _)) = comment(current_input) {
            current_input = rem;
            continue;
        }
        break;
    }

    let (rem, version) = openqasm_version(current_input).map_err(|_| {
        "Missing or invalid OPENQASM header. File must start with 'OPENQASM 2.0;'".to_string()
    })?;
    if version != "2.0" {
        return Err(format!(
            "Unsupported OpenQASM version: '{}'. Only '2.0' is supported.",
            version
        ));
    }
    current_input = rem;

    // 2. Parse and lower the remaining statements
    let mut ctx = ImportContext::default();
    let mut ops = Vec::new();
    loop {
        let (rem, _) = multispace0::<&str, nom::error::Error<&str>>(current_input)
            .map_err(|e| e.to_string())?;
        current_input = rem;

        if current_input.is_empty() {
            break;
        }
        if let Ok((rem, _)) = comment(current_input) {
            current_input = rem;
            continue;
        }

        let (rem, statement) = alt((include, qreg, creg, measure, gate_call))(current_input)
            .map_err(|_| {
                format!(
                    "Unrecognized statement near '{}'",
                    context_snippet(current_input)
                )
            })?;
        current_input = rem;
        lower(statement, &mut ctx, &mut ops)?;
    }

    if ctx.declared == 0 {
        return Err("No quantum register declared".to_string());
    }
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_required() {
        assert!(parse_qasm("qreg q[1];").is_err());
        assert!(parse_qasm("OPENQASM 3.0;\nqreg q[1];").is_err());
    }

    #[test]
    fn test_parse_minimal_program() {
        let qasm = r#"
            OPENQASM 2.0;
            include "qelib1.inc";
            qreg q[1];
            creg c[1];
            h q[0];
        "#;
        let ops = parse_qasm(qasm).expect("valid program");
        assert_eq!(
            ops,
            vec![EditOp::AddGate(GateApp::single(GateKind::H, 0))]
        );
    }

    #[test]
    fn test_parse_register_growth_beyond_initial_qubit() {
        let qasm = "OPENQASM 2.0;\nqreg q[3];\ncreg c[3];\n";
        let ops = parse_qasm(qasm).expect("valid program");
        assert_eq!(ops, vec![EditOp::AddQubit, EditOp::AddQubit]);
    }

    #[test]
    fn test_parse_controlled_and_rotation_gates() {
        let qasm = r#"
            OPENQASM 2.0;
            qreg q[3];
            creg c[3];
            rx(0.25) q[0];
            cx q[0], q[1];
            ccx q[0], q[1], q[2];
            swap q[2], q[0];
        "#;
        let ops = parse_qasm(qasm).expect("valid program");
        let gates: Vec<&GateApp> = ops
            .iter()
            .filter_map(|op| match op {
                EditOp::AddGate(app) => Some(app),
                EditOp::AddQubit => None,
            })
            .collect();
        assert_eq!(gates.len(), 4);
        assert_eq!(gates[0].angle, Some(0.25));
        assert_eq!(gates[1].controls, vec![0]);
        assert_eq!(gates[1].targets, vec![1]);
        assert_eq!(gates[2].controls, vec![0, 1]);
        assert_eq!(gates[2].targets, vec![2]);
        assert_eq!(gates[3].gate, GateKind::Swap);
        assert_eq!(gates[3].controls, vec![2]);
        assert_eq!(gates[3].targets, vec![0]);
    }

    #[test]
    fn test_parse_measure_statement() {
        let qasm = "OPENQASM 2.0;\nqreg q[2];\ncreg c[2];\nmeasure q[1] -> c[1];\n";
        let ops = parse_qasm(qasm).expect("valid program");
        assert_eq!(
            ops,
            vec![
                EditOp::AddQubit,
                EditOp::AddGate(GateApp::single(GateKind::Measure, 1)),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_gate() {
        let qasm = "OPENQASM 2.0;\nqreg q[1];\nfoo q[0];\n";
        let err = parse_qasm(qasm).expect_err("unsupported gate");
        assert!(err.contains("foo"));
    }

    #[test]
    fn test_parse_rejects_undefined_register() {
        let qasm = "OPENQASM 2.0;\nqreg q[1];\nh r[0];\n";
        let err = parse_qasm(qasm).expect_err("undefined register");
        assert!(err.contains("undefined quantum register"));
    }

    #[test]
    fn test_parse_rejects_out_of_bounds_index() {
        let qasm = "OPENQASM 2.0;\nqreg q[2];\nh q[5];\n";
        let err = parse_qasm(qasm).expect_err("bad index");
        assert!(err.contains("out of bounds"));
    }

    #[test]
    fn test_parse_rejects_missing_angle() {
        let qasm = "OPENQASM 2.0;\nqreg q[1];\nrx q[0];\n";
        let err = parse_qasm(qasm).expect_err("missing angle");
        assert!(err.contains("angle"));
    }

    #[test]
    fn test_parse_rejects_wrong_operand_count() {
        let qasm = "OPENQASM 2.0;\nqreg q[2];\ncx q[0];\n";
        let err = parse_qasm(qasm).expect_err("missing operand");
        assert!(err.contains("expects 2"));
    }

    #[test]
    fn test_parse_skips_comments() {
        let qasm = "// a bell pair\nOPENQASM 2.0;\nqreg q[2];\n// entangle\nh q[0];\ncx q[0], q[1];\n";
        let ops = parse_qasm(qasm).expect("valid program");
        assert_eq!(ops.len(), 3);
    }
}
