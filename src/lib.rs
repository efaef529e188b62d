//! zkbridge: bidirectional codec between an R1CS wire format and an
//! in-memory protoboard.
//!
//! This crate bridges two representations of an arithmetic-circuit proof
//! problem:
//!
//! 1. **Wire form**: self-describing, size-prefixed messages carrying a
//!    constraint system `(A·x)(B·x)=(C·x)` or a partial witness, with
//!    field elements packed as fixed-width little-endian bytes.
//! 2. **Protoboard form**: the solver's flat assignment table and its
//!    accumulated constraints, addressed by positional indices.
//!
//! The two sides number variables independently. On the wire every
//! variable carries a global id issued by the surrounding orchestration;
//! on the protoboard a variable is just a position, with the circuit's
//! declared connections sitting first and its local variables after them.
//! [`translate::to_global_id`] reconciles the two schemes, and the
//! transcoders in [`constraints`] and [`witness`] apply it in both
//! directions.
//!
//! ```rust
//! use zkbridge::{
//!     serialize_constraints, CircuitHeader, PbConstraint, PbIndex,
//!     PbLinearCombination, Protoboard, Variables,
//! };
//! use ark_bn254::Fr;
//!
//! // A circuit computing x5 * x6 = x10 over two connections and one local.
//! let circuit = CircuitHeader {
//!     connections: Variables { variable_ids: vec![5, 6], values: vec![] },
//!     free_variable_id: 10,
//!     output_count: 0,
//! };
//! let mut pb: Protoboard<Fr> = Protoboard::new(3);
//! pb.add_constraint(PbConstraint::new(
//!     PbLinearCombination::from_terms(&[(PbIndex(1), Fr::from(1u64))]),
//!     PbLinearCombination::from_terms(&[(PbIndex(2), Fr::from(1u64))]),
//!     PbLinearCombination::from_terms(&[(PbIndex(3), Fr::from(1u64))]),
//! ));
//! let system = serialize_constraints(&circuit, &pb);
//! assert_eq!(system.constraints[0].c.variable_ids, vec![10]);
//! ```

pub mod codec;
pub mod constraints;
pub mod errors;
pub mod protoboard;
pub mod translate;
pub mod wire;
pub mod witness;

#[cfg(test)]
mod tests;

// Re-export core types for convenience
pub use codec::{decode_elements, element_byte_width, encode_elements, field_to_le, le_to_field};
pub use constraints::{deserialize_constraints, serialize_constraints};
pub use errors::{BridgeError, BridgeResult};
pub use protoboard::{
    Constraint, LinearCombination, PbConstraint, PbLinearCombination, PbTerm, Protoboard,
};
pub use translate::{to_global_id, PbIndex, VariableId};
pub use wire::{BilinearConstraint, CircuitHeader, ConstraintSystem, Message, Variables, Witness};
pub use witness::{deserialize_assignment, deserialize_witness, serialize_local_assignment};
