//! In-memory model of the solver's protoboard: a flat assignment table
//! plus the ordered constraint list accumulated while building a circuit.
//!
//! Constraints held here reference [`PbIndex`] positions; the wire only
//! ever carries [`VariableId`]s. The transcoders in [`crate::constraints`]
//! and [`crate::witness`] move between the two.

use crate::errors::{BridgeError, BridgeResult};
use crate::translate::{PbIndex, VariableId};
use ark_ff::PrimeField;

/// One weighted term over a protoboard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PbTerm<F: PrimeField> {
    pub index: PbIndex,
    pub coeff: F,
}

/// Sparse linear combination over protoboard positions.
///
/// Terms stay in insertion order; repeated positions are not merged.
/// Both properties are required for byte-exact serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbLinearCombination<F: PrimeField> {
    pub terms: Vec<PbTerm<F>>,
}

impl<F: PrimeField> PbLinearCombination<F> {
    pub fn new() -> Self {
        PbLinearCombination { terms: Vec::new() }
    }

    pub fn from_terms(terms: &[(PbIndex, F)]) -> Self {
        PbLinearCombination {
            terms: terms
                .iter()
                .map(|(index, coeff)| PbTerm {
                    index: *index,
                    coeff: *coeff,
                })
                .collect(),
        }
    }

    pub fn add_term(&mut self, index: PbIndex, coeff: F) {
        self.terms.push(PbTerm { index, coeff });
    }

    fn evaluate(&self, pb: &Protoboard<F>) -> BridgeResult<F> {
        let mut acc = F::zero();
        for term in &self.terms {
            acc += term.coeff * pb.val(term.index)?;
        }
        Ok(acc)
    }
}

impl<F: PrimeField> Default for PbLinearCombination<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A bilinear constraint over protoboard positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbConstraint<F: PrimeField> {
    pub a: PbLinearCombination<F>,
    pub b: PbLinearCombination<F>,
    pub c: PbLinearCombination<F>,
}

impl<F: PrimeField> PbConstraint<F> {
    pub fn new(
        a: PbLinearCombination<F>,
        b: PbLinearCombination<F>,
        c: PbLinearCombination<F>,
    ) -> Self {
        PbConstraint { a, b, c }
    }
}

/// Sparse linear combination over global variable ids, as produced by
/// constraint deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<F: PrimeField> {
    pub terms: Vec<(VariableId, F)>,
}

impl<F: PrimeField> LinearCombination<F> {
    /// Evaluate against a full assignment vector indexed by global id.
    pub fn evaluate(&self, assignment: &[F]) -> BridgeResult<F> {
        let mut acc = F::zero();
        for (id, coeff) in &self.terms {
            let value = assignment
                .get(id.0 as usize)
                .ok_or_else(|| BridgeError::variable_out_of_range(id.0, assignment.len()))?;
            acc += *coeff * value;
        }
        Ok(acc)
    }
}

/// A bilinear constraint over global variable ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<F: PrimeField> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
}

impl<F: PrimeField> Constraint<F> {
    /// Check `<a, x> * <b, x> == <c, x>` for the given assignment.
    pub fn is_satisfied(&self, assignment: &[F]) -> BridgeResult<bool> {
        let a = self.a.evaluate(assignment)?;
        let b = self.b.evaluate(assignment)?;
        let c = self.c.evaluate(assignment)?;
        Ok(a * b == c)
    }
}

/// The solver's assignment table and constraint collection.
///
/// Slot 0 of the table holds the constant one; `num_variables` counts
/// everything but that slot. Accessors are bounds-checked so an
/// out-of-range index surfaces as an error instead of a silent
/// mis-assignment.
#[derive(Debug, Clone)]
pub struct Protoboard<F: PrimeField> {
    values: Vec<F>,
    constraints: Vec<PbConstraint<F>>,
}

impl<F: PrimeField> Protoboard<F> {
    pub fn new(num_variables: usize) -> Self {
        let mut values = vec![F::zero(); 1 + num_variables];
        values[0] = F::one();
        Protoboard {
            values,
            constraints: Vec::new(),
        }
    }

    /// Variable count, excluding the constant slot.
    pub fn num_variables(&self) -> usize {
        self.values.len() - 1
    }

    pub fn val(&self, index: PbIndex) -> BridgeResult<F> {
        self.values
            .get(index.0 as usize)
            .copied()
            .ok_or_else(|| BridgeError::variable_out_of_range(index.0, self.values.len()))
    }

    pub fn set_val(&mut self, index: PbIndex, value: F) -> BridgeResult<()> {
        let table_size = self.values.len();
        let slot = self
            .values
            .get_mut(index.0 as usize)
            .ok_or(BridgeError::VariableOutOfRange {
                index: index.0,
                table_size,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: PbConstraint<F>) {
        self.constraints.push(constraint);
    }

    pub fn constraints(&self) -> &[PbConstraint<F>] {
        &self.constraints
    }

    /// Check every accumulated constraint against the current table.
    pub fn is_satisfied(&self) -> BridgeResult<bool> {
        for constraint in &self.constraints {
            let a = constraint.a.evaluate(self)?;
            let b = constraint.b.evaluate(self)?;
            let c = constraint.c.evaluate(self)?;
            if a * b != c {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    fn multiplication_board() -> Protoboard<Fr> {
        // x1 * x2 = x3
        let mut pb = Protoboard::new(3);
        pb.set_val(PbIndex(1), Fr::from(3u64)).unwrap();
        pb.set_val(PbIndex(2), Fr::from(5u64)).unwrap();
        pb.set_val(PbIndex(3), Fr::from(15u64)).unwrap();
        pb.add_constraint(PbConstraint::new(
            PbLinearCombination::from_terms(&[(PbIndex(1), Fr::from(1u64))]),
            PbLinearCombination::from_terms(&[(PbIndex(2), Fr::from(1u64))]),
            PbLinearCombination::from_terms(&[(PbIndex(3), Fr::from(1u64))]),
        ));
        pb
    }

    #[test]
    fn constant_slot_holds_one() {
        let pb: Protoboard<Fr> = Protoboard::new(2);
        assert_eq!(pb.num_variables(), 2);
        assert_eq!(pb.val(PbIndex(0)).unwrap(), Fr::from(1u64));
        assert_eq!(pb.val(PbIndex(2)).unwrap(), Fr::from(0u64));
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut pb: Protoboard<Fr> = Protoboard::new(2);
        assert!(pb.val(PbIndex(3)).is_err());
        let err = pb.set_val(PbIndex(3), Fr::from(1u64)).unwrap_err();
        assert!(matches!(err, BridgeError::VariableOutOfRange { .. }));
    }

    #[test]
    fn satisfaction_check() {
        let mut pb = multiplication_board();
        assert!(pb.is_satisfied().unwrap());
        pb.set_val(PbIndex(3), Fr::from(16u64)).unwrap();
        assert!(!pb.is_satisfied().unwrap());
    }

    #[test]
    fn global_constraint_evaluation() {
        let constraint = Constraint {
            a: LinearCombination {
                terms: vec![(VariableId(1), Fr::from(1u64))],
            },
            b: LinearCombination {
                terms: vec![(VariableId(2), Fr::from(1u64))],
            },
            c: LinearCombination {
                terms: vec![(VariableId(3), Fr::from(1u64))],
            },
        };
        let assignment = [
            Fr::from(1u64),
            Fr::from(3u64),
            Fr::from(5u64),
            Fr::from(15u64),
        ];
        assert!(constraint.is_satisfied(&assignment).unwrap());
        // A table too small for the referenced ids propagates the error.
        assert!(constraint.is_satisfied(&assignment[..3]).is_err());
    }
}
