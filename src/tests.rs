//! End-to-end conversion tests.
//!
//! These walk the full prover/consumer round: incoming connection values
//! land in a protoboard, the solved board is read out as wire messages,
//! and the messages are checked from the consumer's side against a
//! reconstructed global assignment.

#[cfg(test)]
mod integration_tests {
    use crate::codec::encode_elements;
    use crate::constraints::{deserialize_constraints, serialize_constraints};
    use crate::protoboard::{Constraint, PbConstraint, PbLinearCombination, Protoboard};
    use crate::translate::PbIndex;
    use crate::wire::{CircuitHeader, Message, Variables};
    use crate::witness::{deserialize_assignment, deserialize_witness, serialize_local_assignment};
    use ark_bn254::Fr;

    /// Two connections with ids 1 and 2, locals from id 3.
    /// Gates: x1 * x2 = x3 and x3 * x1 = x4.
    fn example_circuit(x1: u64, x2: u64) -> CircuitHeader {
        CircuitHeader {
            connections: Variables {
                variable_ids: vec![1, 2],
                values: encode_elements(&[Fr::from(x1), Fr::from(x2)]),
            },
            free_variable_id: 3,
            output_count: 0,
        }
    }

    fn solve(circuit: &CircuitHeader) -> Protoboard<Fr> {
        let mut pb: Protoboard<Fr> = Protoboard::new(4);
        deserialize_assignment(&circuit.connections, &mut pb).unwrap();

        let one = Fr::from(1u64);
        pb.add_constraint(PbConstraint::new(
            PbLinearCombination::from_terms(&[(PbIndex(1), one)]),
            PbLinearCombination::from_terms(&[(PbIndex(2), one)]),
            PbLinearCombination::from_terms(&[(PbIndex(3), one)]),
        ));
        pb.add_constraint(PbConstraint::new(
            PbLinearCombination::from_terms(&[(PbIndex(3), one)]),
            PbLinearCombination::from_terms(&[(PbIndex(1), one)]),
            PbLinearCombination::from_terms(&[(PbIndex(4), one)]),
        ));

        let x1 = pb.val(PbIndex(1)).unwrap();
        let x2 = pb.val(PbIndex(2)).unwrap();
        pb.set_val(PbIndex(3), x1 * x2).unwrap();
        pb.set_val(PbIndex(4), x1 * x2 * x1).unwrap();
        pb
    }

    #[test]
    fn prover_to_consumer_round_trip() {
        let circuit = example_circuit(3, 5);
        let pb = solve(&circuit);
        assert!(pb.is_satisfied().unwrap());

        // Prover side: read the board out as framed messages.
        let mut stream = Vec::new();
        Message::ConstraintSystem(serialize_constraints(&circuit, &pb))
            .write_into(&mut stream)
            .unwrap();
        Message::Witness(serialize_local_assignment(&circuit, &pb).unwrap())
            .write_into(&mut stream)
            .unwrap();

        // Consumer side: reassemble the global view.
        let (first, consumed) = Message::read_from(&stream).unwrap();
        let (second, _) = Message::read_from(&stream[consumed..]).unwrap();
        let system = match first {
            Message::ConstraintSystem(system) => system,
            other => panic!("expected a constraint system, got {other:?}"),
        };
        let witness = match second {
            Message::Witness(witness) => witness,
            other => panic!("expected a witness, got {other:?}"),
        };

        // Global assignment indexed by id: constant, connections, locals.
        let mut assignment = vec![Fr::from(1u64); 5];
        for (id, value) in circuit.connection_values::<Fr>().unwrap() {
            assignment[id.0 as usize] = value;
        }
        for (id, value) in witness.assigned_variables.get::<Fr>().unwrap() {
            assignment[id.0 as usize] = value;
        }

        let constraints: Vec<Constraint<Fr>> = deserialize_constraints(&system).unwrap();
        assert_eq!(constraints.len(), 2);
        for constraint in &constraints {
            assert!(constraint.is_satisfied(&assignment).unwrap());
        }
        assert_eq!(assignment[3], Fr::from(15u64));
        assert_eq!(assignment[4], Fr::from(45u64));
    }

    #[test]
    fn tampered_witness_fails_the_consumer_check() {
        let circuit = example_circuit(3, 5);
        let pb = solve(&circuit);

        let system = serialize_constraints(&circuit, &pb);
        let witness = serialize_local_assignment(&circuit, &pb).unwrap();

        let mut assignment = vec![Fr::from(1u64); 5];
        for (id, value) in circuit.connection_values::<Fr>().unwrap() {
            assignment[id.0 as usize] = value;
        }
        for (id, value) in witness.assigned_variables.get::<Fr>().unwrap() {
            assignment[id.0 as usize] = value;
        }
        assignment[4] += Fr::from(1u64);

        let constraints: Vec<Constraint<Fr>> = deserialize_constraints(&system).unwrap();
        assert!(constraints[0].is_satisfied(&assignment).unwrap());
        assert!(!constraints[1].is_satisfied(&assignment).unwrap());
    }

    #[test]
    fn reloading_a_witness_reproduces_the_board() {
        let circuit = example_circuit(7, 11);
        let pb = solve(&circuit);
        let witness = serialize_local_assignment(&circuit, &pb).unwrap();

        let mut rebuilt: Protoboard<Fr> = Protoboard::new(4);
        deserialize_assignment(&circuit.connections, &mut rebuilt).unwrap();
        deserialize_witness(&witness, &mut rebuilt).unwrap();

        for position in 0..=4u64 {
            assert_eq!(
                rebuilt.val(PbIndex(position)).unwrap(),
                pb.val(PbIndex(position)).unwrap()
            );
        }
    }

    #[test]
    fn system_digest_is_stable_across_framing() {
        let circuit = example_circuit(3, 5);
        let pb = solve(&circuit);
        let system = serialize_constraints(&circuit, &pb);
        let digest = system.digest();

        let mut stream = Vec::new();
        Message::ConstraintSystem(system)
            .write_into(&mut stream)
            .unwrap();
        let (message, _) = Message::read_from(&stream).unwrap();
        match message {
            Message::ConstraintSystem(reloaded) => assert_eq!(reloaded.digest(), digest),
            other => panic!("expected a constraint system, got {other:?}"),
        }
    }
}
