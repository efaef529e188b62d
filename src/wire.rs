//! Wire message structures.
//!
//! A message is a size-prefixed, self-describing container holding either
//! a constraint system or a witness. Field-element blobs inside a message
//! keep the fixed-width little-endian packing of [`crate::codec`]; serde
//! and bincode only provide the framing around them.

use crate::codec::{decode_elements, element_byte_width, encode_elements};
use crate::errors::{BridgeError, BridgeResult};
use crate::translate::VariableId;
use ark_ff::PrimeField;
use bincode::Options;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::Write;

/// A term list: global variable ids paired with a flat coefficient blob.
///
/// The two sides must agree in length, `variable_ids.len()` elements of
/// equal width packed back to back in `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variables {
    pub variable_ids: Vec<u64>,
    pub values: Vec<u8>,
}

impl Variables {
    pub fn from_terms<F: PrimeField>(terms: &[(VariableId, F)]) -> Self {
        let variable_ids = terms.iter().map(|(id, _)| id.0).collect();
        let elements: Vec<F> = terms.iter().map(|(_, value)| *value).collect();
        Variables {
            variable_ids,
            values: encode_elements(&elements),
        }
    }

    pub fn value_count(&self) -> usize {
        self.variable_ids.len()
    }

    /// Decode the coefficient blob, enforcing the length-match rule.
    ///
    /// The element width is derived from the blob length and the declared
    /// id count; a blob that does not split evenly, or whose elements
    /// would be wider than the field allows, is malformed and rejected
    /// before anything is decoded.
    pub fn decode_values<F: PrimeField>(&self) -> BridgeResult<Vec<F>> {
        let count = self.variable_ids.len();
        if count == 0 && !self.values.is_empty() {
            return Err(BridgeError::malformed_message(
                "value bytes present but no variable ids declared",
            ));
        }
        if count > 0 {
            if self.values.len() % count != 0 {
                return Err(BridgeError::inexact_element_width(self.values.len(), count));
            }
            let width = self.values.len() / count;
            if width > element_byte_width::<F>() {
                return Err(BridgeError::malformed_message(
                    "element width exceeds the field's limb capacity",
                ));
            }
        }
        decode_elements(&self.values, count)
    }

    /// Enforce the fixed-width rule of constraint and witness messages:
    /// the blob must hold exactly one `element_byte_width::<F>()`-sized
    /// coefficient per declared id. Connection values inside a circuit
    /// header are exempt; their width may be narrower and is derived.
    pub fn check_fixed_width<F: PrimeField>(&self) -> BridgeResult<()> {
        let width = element_byte_width::<F>();
        let ids = self.variable_ids.len();
        if self.values.len() % width != 0 {
            return Err(BridgeError::inexact_element_width(self.values.len(), ids));
        }
        if self.values.len() / width != ids {
            return Err(BridgeError::length_mismatch(ids, self.values.len() / width));
        }
        Ok(())
    }

    /// Decode into ordered (id, element) pairs.
    pub fn get<F: PrimeField>(&self) -> BridgeResult<Vec<(VariableId, F)>> {
        let elements = self.decode_values::<F>()?;
        Ok(self
            .variable_ids
            .iter()
            .zip(elements)
            .map(|(id, value)| (VariableId(*id), value))
            .collect())
    }
}

/// Descriptor of one circuit's boundary: its declared connections with
/// their assigned values, the first global id free for locals, and how
/// many of the protoboard's variables are declared outputs.
///
/// Built by the surrounding orchestration; read-only during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitHeader {
    pub connections: Variables,
    pub free_variable_id: u64,
    pub output_count: u64,
}

impl CircuitHeader {
    pub fn connection_count(&self) -> usize {
        self.connections.variable_ids.len()
    }

    /// The incoming connection values as field elements.
    pub fn connection_values<F: PrimeField>(&self) -> BridgeResult<Vec<(VariableId, F)>> {
        self.connections.get()
    }
}

/// One R1CS constraint `<a, x> * <b, x> = <c, x>` in wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilinearConstraint {
    pub a: Variables,
    pub b: Variables,
    pub c: Variables,
}

/// An ordered list of constraints. Order is part of the contract:
/// constraint indices may be referenced elsewhere, so a round trip must
/// reproduce it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSystem {
    pub constraints: Vec<BilinearConstraint>,
}

impl ConstraintSystem {
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// SHA-256 transcript of the ordered constraint records.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.constraints.len() as u64).to_le_bytes());
        for constraint in &self.constraints {
            for terms in [&constraint.a, &constraint.b, &constraint.c] {
                hasher.update((terms.variable_ids.len() as u64).to_le_bytes());
                for id in &terms.variable_ids {
                    hasher.update(id.to_le_bytes());
                }
                hasher.update((terms.values.len() as u64).to_le_bytes());
                hasher.update(&terms.values);
            }
        }
        hasher.finalize().into()
    }
}

/// A partial assignment: values for a subset of the global variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub assigned_variables: Variables,
}

/// The closed set of message variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    ConstraintSystem(ConstraintSystem),
    Witness(Witness),
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

impl Message {
    /// Write this message as a size-prefixed frame.
    pub fn write_into(&self, writer: &mut impl Write) -> BridgeResult<()> {
        let payload = bincode_options().serialize(self)?;
        writer.write_all(&(payload.len() as u32).to_le_bytes())?;
        writer.write_all(&payload)?;
        Ok(())
    }

    /// Read one size-prefixed frame from the front of `buffer`.
    ///
    /// Returns the message and the number of bytes consumed, so several
    /// frames can be read back to back.
    pub fn read_from(buffer: &[u8]) -> BridgeResult<(Message, usize)> {
        if buffer.len() < 4 {
            return Err(BridgeError::malformed_message("truncated size prefix"));
        }
        let size = u32::from_le_bytes(buffer[..4].try_into().unwrap()) as usize;
        let end = 4 + size;
        if buffer.len() < end {
            return Err(BridgeError::malformed_message("truncated message body"));
        }
        let message = bincode_options().deserialize(&buffer[4..end])?;
        Ok((message, end))
    }
}
