//! Translation between the protoboard's positional numbering and the
//! global variable ids carried on the wire.
//!
//! The two numbering schemes are deliberately kept as distinct newtypes:
//! a [`PbIndex`] only means something relative to one protoboard, while a
//! [`VariableId`] is issued by the surrounding orchestration and is valid
//! across circuit boundaries. Mixing them up silently corrupts a
//! constraint system, so the type system keeps them apart.

use crate::wire::CircuitHeader;
use serde::{Deserialize, Serialize};

/// Position in a protoboard's flat assignment table. Position 0 is the
/// constant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PbIndex(pub u64);

/// Global variable id as it appears on the wire. Id 0 is the constant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariableId(pub u64);

/// Map a protoboard position to its global id.
///
/// Positions `1..=k` are the circuit's declared connections, in order;
/// they keep the ids the orchestration assigned them. Every position past
/// the connections is a circuit-local variable numbered upward from
/// `free_variable_id`. Declared outputs get no distinct range here: a
/// collaborator that needs stable output ids must list them among the
/// connections. The mapping is total; whether the resulting id is
/// meaningful is the solver's concern.
pub fn to_global_id(circuit: &CircuitHeader, index: PbIndex) -> VariableId {
    // Constant one?
    if index.0 == 0 {
        return VariableId(0);
    }
    let mut offset = index.0 - 1;

    // A declared connection?
    let connection_ids = &circuit.connections.variable_ids;
    if (offset as usize) < connection_ids.len() {
        return VariableId(connection_ids[offset as usize]);
    }
    offset -= connection_ids.len() as u64;

    // A local variable.
    VariableId(circuit.free_variable_id + offset)
}
