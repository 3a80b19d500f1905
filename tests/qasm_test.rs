use q_forge::{parse_qasm, CodeGenerator, EditOp, GateKind, Session};

#[test]
fn test_import_teleportation_circuit() {
    let qasm = r#"
        OPENQASM 2.0;
        include "qelib1.inc";
        qreg q[3];
        creg c[3];

        // Bell pair
        h q[1];
        cx q[1], q[2];

        // Prepare payload
        rx(0.5) q[0];

        // Teleportation
        cx q[0], q[1];
        h q[0];
        measure q[0] -> c[0];
        measure q[1] -> c[1];

        // Correction
        z q[2];
        x q[2];
    "#;

    let ops = parse_qasm(qasm).expect("Failed to parse teleportation circuit");
    let session = Session::from_log(ops).expect("log replays cleanly");

    let circuit = session.circuit();
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.num_cbits(), 3);
    // 9 gate applications; the 2 qubit additions live only in the log.
    assert_eq!(circuit.applied().len(), 9);
    assert_eq!(session.log().len(), 11);

    // Every imported edit is undoable, down to the initial single qubit.
    let mut session = session;
    while session.history().can_undo() {
        session.undo().expect("imported log unwinds");
    }
    assert_eq!(session.circuit().num_qubits(), 1);
    assert!(session.circuit().applied().is_empty());
}

#[test]
fn test_whitespace_tolerance() {
    let qasm = r#"
        OPENQASM 2.0;

        qreg    q[2]   ;
          creg  c[2];

        h   q[0]  ; // Comment

        cx q[0] ,  q[1];
    "#;
    let ops = parse_qasm(qasm).expect("Failed to parse whitespace");
    let session = Session::from_log(ops).expect("log replays cleanly");
    assert_eq!(session.circuit().num_qubits(), 2);
    assert_eq!(session.circuit().applied().len(), 2);
}

#[test]
fn test_export_then_import_rebuilds_circuit() {
    let mut session = Session::new();
    session.apply(EditOp::AddQubit).unwrap();
    session.apply(EditOp::AddQubit).unwrap();
    session
        .apply(EditOp::AddGate(q_forge::GateApp::single(GateKind::H, 0)))
        .unwrap();
    session
        .apply(EditOp::AddGate(q_forge::GateApp::rotation(
            GateKind::RX,
            1,
            std::f64::consts::FRAC_PI_4,
        )))
        .unwrap();
    session
        .apply(EditOp::AddGate(q_forge::GateApp::controlled(
            GateKind::CCX,
            vec![0, 1],
            2,
        )))
        .unwrap();
    session
        .apply(EditOp::AddGate(q_forge::GateApp::single(
            GateKind::Measure,
            2,
        )))
        .unwrap();

    let qasm = CodeGenerator::new(session.circuit()).generate();
    let reimported = Session::from_log(parse_qasm(&qasm).expect("generated QASM parses"))
        .expect("generated log replays");

    assert_eq!(reimported.circuit(), session.circuit());
}

#[test]
fn test_import_checks_indices_against_declared_registers() {
    // Overlapping operands are structurally fine and survive replay.
    let qasm = "OPENQASM 2.0;\nqreg q[1];\nccx q[0], q[0], q[0];\n";
    let ops = parse_qasm(qasm).expect("parses");
    assert!(Session::from_log(ops).is_ok());

    // References outside a declared register fail at import.
    let qasm = "OPENQASM 2.0;\nqreg q[1];\nh q[0];\ncx q[0], q[1];\n";
    assert!(parse_qasm(qasm).is_err());
}
