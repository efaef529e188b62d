//! Witness transcoding.
//!
//! The serialization direction reads the solver's computed values for the
//! circuit's local variables out of the protoboard; the deserialization
//! direction writes a wire assignment (incoming connection values or
//! recovered locals) into the table.

use crate::codec::{element_byte_width, field_to_le};
use crate::errors::{BridgeError, BridgeResult};
use crate::protoboard::Protoboard;
use crate::translate::PbIndex;
use crate::wire::{CircuitHeader, Variables, Witness};
use ark_ff::PrimeField;

/// Serialize the values of the circuit's local variables.
///
/// Connections and declared outputs are shared with the orchestration and
/// reported through other channels; they occupy the table positions right
/// after the constant slot. Everything past them is local and is emitted
/// here, numbered upward from `free_variable_id`.
pub fn serialize_local_assignment<F: PrimeField>(
    circuit: &CircuitHeader,
    pb: &Protoboard<F>,
) -> BridgeResult<Witness> {
    let total = pb.num_variables();
    let shared = circuit.connection_count() + circuit.output_count as usize;
    if shared > total {
        return Err(BridgeError::local_count_underflow(total, shared));
    }
    let local = total - shared;

    let width = element_byte_width::<F>();
    let mut variable_ids = Vec::with_capacity(local);
    let mut values = Vec::with_capacity(width * local);
    for offset in 0..local {
        variable_ids.push(circuit.free_variable_id + offset as u64);
        let value = pb.val(PbIndex((1 + shared + offset) as u64))?;
        values.extend_from_slice(&field_to_le(&value, width));
    }

    Ok(Witness {
        assigned_variables: Variables {
            variable_ids,
            values,
        },
    })
}

/// Write a term list into the protoboard's table.
///
/// This is the load path for both witness messages and a circuit
/// header's connection values; the latter may use a narrower element
/// encoding, so the width is derived from the blob. The list is decoded
/// and validated in full before the first write, so a malformed list
/// never leaves the table partially updated. Id 0 is the constant and is
/// skipped. Ids address the table directly; one that falls outside it
/// surfaces as the protoboard's bounds error.
pub fn deserialize_assignment<F: PrimeField>(
    variables: &Variables,
    pb: &mut Protoboard<F>,
) -> BridgeResult<()> {
    for (id, value) in variables.get::<F>()? {
        if id.0 == 0 {
            continue;
        }
        pb.set_val(PbIndex(id.0), value)?;
    }
    Ok(())
}

/// Write a witness message into the protoboard's table.
///
/// Witness blobs carry the fixed element width, so this additionally
/// enforces `element_byte_width::<F>()` before loading.
pub fn deserialize_witness<F: PrimeField>(
    witness: &Witness,
    pb: &mut Protoboard<F>,
) -> BridgeResult<()> {
    witness.assigned_variables.check_fixed_width::<F>()?;
    deserialize_assignment(&witness.assigned_variables, pb)
}
