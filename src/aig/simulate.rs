use super::{Aig, AigLit};

/// Values of every variable of one step, indexed by variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation(Vec<bool>);

impl Valuation {
    #[inline]
    pub fn lit(&self, lit: AigLit) -> bool {
        self.0[lit.var() as usize] ^ lit.is_compl()
    }
}

impl Aig {
    /// Evaluates the combinational logic under the given latch and input
    /// values. Gates are evaluated in dependency order, not file order.
    pub fn simulate(&self, latchs: &[bool], inputs: &[bool]) -> Valuation {
        assert_eq!(latchs.len(), self.latchs.len());
        assert_eq!(inputs.len(), self.inputs.len());
        let mut value: Vec<Option<bool>> = vec![None; self.max_var as usize + 1];
        value[0] = Some(false);
        for (i, v) in self.inputs.iter().zip(inputs) {
            value[i.var() as usize] = Some(*v);
        }
        for (l, v) in self.latchs.iter().zip(latchs) {
            value[l.lit.var() as usize] = Some(*v);
        }
        let lit_value = |value: &[Option<bool>], lit: AigLit| {
            value[lit.var() as usize].map(|v| v ^ lit.is_compl())
        };
        let mut stack = Vec::new();
        for and in self.ands.iter() {
            stack.push(and.lhs);
            while let Some(lit) = stack.last().copied() {
                if value[lit.var() as usize].is_some() {
                    stack.pop();
                    continue;
                }
                let Some(and) = self.and_of(lit) else {
                    value[lit.var() as usize] = Some(false);
                    stack.pop();
                    continue;
                };
                match (lit_value(&value, and.rhs0), lit_value(&value, and.rhs1)) {
                    (Some(x), Some(y)) => {
                        value[lit.var() as usize] = Some(x && y);
                        stack.pop();
                    }
                    (x, y) => {
                        if x.is_none() {
                            stack.push(and.rhs0);
                        }
                        if y.is_none() {
                            stack.push(and.rhs1);
                        }
                    }
                }
            }
        }
        Valuation(value.into_iter().map(|v| v.unwrap_or(false)).collect())
    }

    /// latch values of the successor step
    pub fn next_state(&self, valuation: &Valuation) -> Vec<bool> {
        self.latchs.iter().map(|l| valuation.lit(l.next)).collect()
    }

    /// latch values forced by the resets, `None` for uninitialized latches
    pub fn init_state(&self) -> Vec<Option<bool>> {
        self.latchs
            .iter()
            .map(|l| l.is_initialized().then(|| l.reset == AigLit::TRUE))
            .collect()
    }
}
