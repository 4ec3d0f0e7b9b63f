mod lit;
mod pattern;
mod simulate;

pub use lit::*;
pub use pattern::*;
pub use simulate::Valuation;

use log::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AigAnd {
    pub lhs: AigLit,
    pub rhs0: AigLit,
    pub rhs1: AigLit,
}

impl AigAnd {
    #[inline]
    pub fn new(lhs: AigLit, rhs0: AigLit, rhs1: AigLit) -> Self {
        Self { lhs, rhs0, rhs1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AigLatch {
    pub lit: AigLit,
    pub next: AigLit,
    pub reset: AigLit,
}

impl AigLatch {
    #[inline]
    pub fn new(lit: AigLit, next: AigLit, reset: AigLit) -> Self {
        Self { lit, next, reset }
    }

    /// a latch whose reset is its own literal starts with an arbitrary value
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.reset != self.lit
    }
}

/// Read only and-inverter graph in aiger numbering.
#[derive(Clone, Debug, Default)]
pub struct Aig {
    pub max_var: u32,
    pub inputs: Vec<AigLit>,
    pub latchs: Vec<AigLatch>,
    pub outputs: Vec<AigLit>,
    pub bads: Vec<AigLit>,
    pub constraints: Vec<AigLit>,
    pub justice: Vec<Vec<AigLit>>,
    pub fairness: Vec<AigLit>,
    pub ands: Vec<AigAnd>,
    and_map: Vec<Option<usize>>,
}

impl Aig {
    pub fn new(max_var: u32) -> Self {
        Self {
            max_var,
            and_map: vec![None; max_var as usize + 1],
            ..Default::default()
        }
    }

    #[inline]
    pub(crate) fn add_and(&mut self, and: AigAnd) {
        self.and_map[and.lhs.var() as usize] = Some(self.ands.len());
        self.ands.push(and);
    }

    /// number of literals of a single frame, `2 * (max_var + 1)`
    #[inline]
    pub fn num_lits(&self) -> usize {
        (self.max_var as usize + 1) * 2
    }

    /// the and gate defining the variable of `lit`, if there is one
    #[inline]
    pub fn and_of(&self, lit: AigLit) -> Option<&AigAnd> {
        self.and_map
            .get(lit.var() as usize)
            .copied()
            .flatten()
            .map(|i| &self.ands[i])
    }

    /// The single property checked: the first bad state property, otherwise the
    /// first output, otherwise constant false.
    pub fn property(&self) -> AigLit {
        self.bads
            .first()
            .or(self.outputs.first())
            .copied()
            .unwrap_or(AigLit::FALSE)
    }

    /// Warns about the parts of the model that are not checked.
    pub fn diagnose(&self, name: &str) {
        if !self.justice.is_empty() || !self.fairness.is_empty() {
            warn!("justice and fairness are not supported in {name}");
        }
        if self.bads.len() + self.outputs.len() > 1 {
            let kind = if self.bads.is_empty() { "output" } else { "bad" };
            warn!("multiple properties, using {kind}0 of {name}");
        }
    }
}
