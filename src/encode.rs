use crate::{
    aig::{Aig, AigLit, Detection, GateShape},
    unroll::Unroll,
};
use log::debug;

/// Emits the clauses of `lhs <-> shape`.
pub fn gate_clauses(lhs: AigLit, shape: GateShape, mut emit: impl FnMut(&[AigLit])) {
    match shape {
        GateShape::And(a, b) => {
            emit(&[!lhs, a]);
            emit(&[!lhs, b]);
            emit(&[lhs, !a, !b]);
        }
        GateShape::Xor(a, b) => {
            emit(&[!lhs, a, b]);
            emit(&[!lhs, !a, !b]);
            emit(&[lhs, a, !b]);
            emit(&[lhs, !a, b]);
        }
        GateShape::Ite { cond, then, els } => {
            emit(&[!lhs, !cond, then]);
            emit(&[!lhs, cond, els]);
            emit(&[lhs, !cond, !then]);
            emit(&[lhs, cond, !els]);
        }
    }
}

/// Encodes the transition relation of an aig frame by frame. Gates are
/// classified once, the shapes are the same in every frame.
pub struct Encoder {
    shapes: Vec<(AigLit, GateShape)>,
}

impl Encoder {
    pub fn new(aig: &Aig, detect: Detection) -> Self {
        let shapes = aig
            .ands
            .iter()
            .map(|g| (g.lhs, aig.classify(g, detect)))
            .collect();
        Self { shapes }
    }

    #[inline]
    pub fn shapes(&self) -> &[(AigLit, GateShape)] {
        &self.shapes
    }

    /// Initialized latches equal their reset in frame 0, the others are free.
    pub fn encode_init(&self, aig: &Aig, unroll: &mut Unroll) {
        for l in aig.latchs.iter().filter(|l| l.is_initialized()) {
            unroll.clause(0, &[!l.lit, l.reset]);
            unroll.clause(0, &[!l.reset, l.lit]);
        }
    }

    /// Gates and invariant constraints of frame `k`, and the latch
    /// transitions from frame `k` to frame `k + 1`.
    pub fn encode_frame(&self, aig: &Aig, unroll: &mut Unroll, k: usize) {
        assert!(unroll.num_frames() > k + 1);
        let before = unroll.num_clause();
        for (lhs, shape) in self.shapes.iter() {
            gate_clauses(*lhs, *shape, |cls| unroll.clause(k, cls));
        }
        for c in aig.constraints.iter() {
            unroll.clause(k, &[*c]);
        }
        for l in aig.latchs.iter() {
            unroll.equal_next(k, l.next, l.lit);
        }
        debug!(
            "frame {k}: {} clauses, {} variables",
            unroll.num_clause() - before,
            unroll.num_var()
        );
    }
}
