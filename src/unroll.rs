use crate::{aig::AigLit, solver::IncrementalSolver};
use logic_form::{Lit, Var};

/// Solver literals of one time frame, indexed by aiger literal.
#[derive(Clone, Debug)]
pub struct Frame {
    lits: Vec<Lit>,
}

impl Frame {
    #[inline]
    pub fn lit(&self, lit: AigLit) -> Lit {
        self.lits[lit.raw() as usize]
    }

    #[inline]
    pub fn num_lits(&self) -> usize {
        self.lits.len()
    }
}

/// The unrolled transition relation: the solver together with the literal
/// tables of every frame created so far. Frames are only ever appended, and
/// every frame gets fresh variables, so clauses of earlier frames stay valid
/// while the problem grows.
pub struct Unroll {
    solver: Box<dyn IncrementalSolver>,
    frames: Vec<Frame>,
    reserved: usize,
    num_clause: usize,
    buf: Vec<Lit>,
}

impl Unroll {
    pub fn new(solver: Box<dyn IncrementalSolver>) -> Self {
        let reserved = solver.num_var();
        Self {
            solver,
            frames: Vec::new(),
            reserved,
            num_clause: 0,
            buf: Vec::new(),
        }
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn frame(&self, k: usize) -> &Frame {
        &self.frames[k]
    }

    /// variables that existed before the first frame
    #[inline]
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    #[inline]
    pub fn num_var(&self) -> usize {
        self.solver.num_var()
    }

    #[inline]
    pub fn num_clause(&self) -> usize {
        self.num_clause
    }

    /// Appends a frame with one fresh variable per aiger variable and forces
    /// its true constant. Returns the index of the new frame.
    pub fn extend(&mut self, num_lits: usize) -> usize {
        assert!(num_lits >= 2 && num_lits % 2 == 0);
        let base = self.solver.num_var();
        let mut lits = Vec::with_capacity(num_lits);
        for i in 0..num_lits / 2 {
            let l = Var::new(base + i).lit();
            lits.push(l);
            lits.push(!l);
        }
        self.solver.reserve(base + num_lits / 2);
        self.frames.push(Frame { lits });
        let k = self.frames.len() - 1;
        self.clause(k, &[AigLit::TRUE]);
        k
    }

    /// adds a clause over aiger literals of frame `k`
    pub fn clause(&mut self, k: usize, lits: &[AigLit]) {
        let frame = &self.frames[k];
        self.buf.clear();
        self.buf.extend(lits.iter().map(|l| frame.lit(*l)));
        self.solver.add_clause(&self.buf);
        self.num_clause += 1;
    }

    /// `now` of frame `k` is equal to `next` of frame `k + 1`
    pub fn equal_next(&mut self, k: usize, now: AigLit, next: AigLit) {
        let n = self.frames[k].lit(now);
        let l = self.frames[k + 1].lit(next);
        self.solver.add_clause(&[!l, n]);
        self.solver.add_clause(&[l, !n]);
        self.num_clause += 2;
    }

    #[inline]
    pub fn assume(&mut self, k: usize, lit: AigLit) {
        let lit = self.frames[k].lit(lit);
        self.solver.assume(lit);
    }

    #[inline]
    pub fn solve(&mut self) -> bool {
        self.solver.solve()
    }

    /// value of `lit` in frame `k` under the last model
    #[inline]
    pub fn value(&mut self, k: usize, lit: AigLit) -> bool {
        let lit = self.frames[k].lit(lit);
        self.solver.value(lit)
    }
}
