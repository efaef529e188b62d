//! Constraint system transcoding.
//!
//! Serialization walks the protoboard's accumulated constraints, rewrites
//! every term's position as a global id and packs its coefficient at the
//! fixed element width. Deserialization rebuilds global-id linear
//! combinations from the wire records. Constraint order and term order
//! survive both directions unchanged.

use crate::codec::{element_byte_width, field_to_le};
use crate::errors::BridgeResult;
use crate::protoboard::{Constraint, LinearCombination, PbLinearCombination, Protoboard};
use crate::translate::to_global_id;
use crate::wire::{BilinearConstraint, CircuitHeader, ConstraintSystem, Variables};
use ark_ff::PrimeField;

fn serialize_lincomb<F: PrimeField>(
    circuit: &CircuitHeader,
    lincomb: &PbLinearCombination<F>,
) -> Variables {
    let width = element_byte_width::<F>();
    let mut variable_ids = Vec::with_capacity(lincomb.terms.len());
    let mut values = Vec::with_capacity(width * lincomb.terms.len());
    for term in &lincomb.terms {
        variable_ids.push(to_global_id(circuit, term.index).0);
        values.extend_from_slice(&field_to_le(&term.coeff, width));
    }
    Variables {
        variable_ids,
        values,
    }
}

/// Serialize the protoboard's constraints against the circuit's numbering.
pub fn serialize_constraints<F: PrimeField>(
    circuit: &CircuitHeader,
    pb: &Protoboard<F>,
) -> ConstraintSystem {
    ConstraintSystem {
        constraints: pb
            .constraints()
            .iter()
            .map(|constraint| BilinearConstraint {
                a: serialize_lincomb(circuit, &constraint.a),
                b: serialize_lincomb(circuit, &constraint.b),
                c: serialize_lincomb(circuit, &constraint.c),
            })
            .collect(),
    }
}

fn deserialize_lincomb<F: PrimeField>(terms: &Variables) -> BridgeResult<LinearCombination<F>> {
    terms.check_fixed_width::<F>()?;
    Ok(LinearCombination {
        terms: terms.get()?,
    })
}

/// Rebuild the ordered constraint list from a wire message.
///
/// Each term list must be internally consistent (id count matching the
/// coefficient blob); the first malformed record aborts the whole
/// conversion so no partial system is ever handed to the solver.
pub fn deserialize_constraints<F: PrimeField>(
    system: &ConstraintSystem,
) -> BridgeResult<Vec<Constraint<F>>> {
    system
        .constraints
        .iter()
        .map(|record| {
            Ok(Constraint {
                a: deserialize_lincomb(&record.a)?,
                b: deserialize_lincomb(&record.b)?,
                c: deserialize_lincomb(&record.c)?,
            })
        })
        .collect()
}
