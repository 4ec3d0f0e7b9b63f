use super::{distinct_vars, Aig, AigAnd, AigLit};

/// The logical function an and gate implements once its two inner and gates
/// are taken into account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateShape {
    /// `lhs = rhs0 & rhs1`
    And(AigLit, AigLit),
    /// `lhs = rhs0 ^ rhs1`
    Xor(AigLit, AigLit),
    /// `lhs = cond ? then : els`
    Ite {
        cond: AigLit,
        then: AigLit,
        els: AigLit,
    },
}

/// Which shapes the recognizer may report. A disabled shape is encoded as
/// plain and gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detection {
    pub xor: bool,
    pub ite: bool,
}

impl Default for Detection {
    fn default() -> Self {
        Self {
            xor: true,
            ite: true,
        }
    }
}

impl Detection {
    #[inline]
    pub fn none() -> Self {
        Self {
            xor: false,
            ite: false,
        }
    }
}

impl Aig {
    /// Classifies `gate`. Xor is tried first, a gate recognized as xor is never
    /// offered to the ite matcher, and everything else is a plain and.
    pub fn classify(&self, gate: &AigAnd, detect: Detection) -> GateShape {
        if detect.xor {
            if let Some((rhs0, rhs1)) = self.xor_operands(gate) {
                return GateShape::Xor(rhs0, rhs1);
            }
        }
        if detect.ite {
            if let Some((cond, then, els)) = self.ite_operands(gate) {
                return GateShape::Ite { cond, then, els };
            }
        }
        GateShape::And(gate.rhs0, gate.rhs1)
    }

    /// both inputs must be negated and gates
    fn inner_ands(&self, gate: &AigAnd) -> Option<(&AigAnd, &AigAnd)> {
        if !gate.rhs0.is_compl() || !gate.rhs1.is_compl() {
            return None;
        }
        Some((self.and_of(gate.rhs0)?, self.and_of(gate.rhs1)?))
    }

    //      (!l0 | !l1) & (!r0 | !r1)
    // (A): ( r0 |  r1) & (!r0 | !r1)  with l0 = !r0, l1 = !r1
    // (B): ( r1 |  r0) & (!r0 | !r1)  with l0 = !r1, l1 = !r0
    //        l0 ^ l1
    pub fn xor_operands(&self, gate: &AigAnd) -> Option<(AigLit, AigLit)> {
        let (left, right) = self.inner_ands(gate)?;
        let (l0, l1) = (left.rhs0, left.rhs1);
        let (r0, r1) = (right.rhs0, right.rhs1);
        if !((l0 == !r0 && l1 == !r1) || (l0 == !r1 && l1 == !r0)) {
            return None;
        }
        if l0.same_var(l1) {
            return None;
        }
        Some((l0, l1))
    }

    /// Returns `(cond, then, els)`. The condition is the literal shared, with
    /// opposite polarity, by the two inner gates.
    pub fn ite_operands(&self, gate: &AigAnd) -> Option<(AigLit, AigLit, AigLit)> {
        let (left, right) = self.inner_ands(gate)?;
        let (l0, l1) = (left.rhs0, left.rhs1);
        let (r0, r1) = (right.rhs0, right.rhs1);
        let (cond, then, els) = if l0 == !r0 {
            // (!l0 | !l1) & (l0 | !r1): l0 ? !l1 : !r1
            (l0, !l1, !r1)
        } else if l0 == !r1 {
            // (!l0 | !l1) & (!r0 | l0): l0 ? !l1 : !r0
            (l0, !l1, !r0)
        } else if l1 == !r0 {
            // (!l0 | !l1) & (l1 | !r1): l1 ? !l0 : !r1
            (l1, !l0, !r1)
        } else if l1 == !r1 {
            // (!l0 | !l1) & (!r0 | l1): l1 ? !l0 : !r0
            (l1, !l0, !r0)
        } else {
            return None;
        };
        if cond.is_constant() || then.is_constant() || els.is_constant() {
            return None;
        }
        if !distinct_vars(cond, then, els) {
            return None;
        }
        Some((cond, then, els))
    }
}
