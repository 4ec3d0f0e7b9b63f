use crate::{aig::Aig, unroll::Unroll};
use std::{
    fmt::{self, Display},
    io::{self, Write},
};

/// Counterexample trace in aiger witness format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    /// latch values of frame 0, in circuit order
    pub init: Vec<bool>,
    /// input values of frames `0..=depth`, in circuit order
    pub inputs: Vec<Vec<bool>>,
}

impl Witness {
    /// Decodes the last model of `unroll` for a violation in frame `depth`.
    pub fn from_model(aig: &Aig, unroll: &mut Unroll, depth: usize) -> Self {
        assert!(unroll.num_frames() > depth);
        let init = aig.latchs.iter().map(|l| unroll.value(0, l.lit)).collect();
        let inputs = (0..=depth)
            .map(|k| aig.inputs.iter().map(|i| unroll.value(k, *i)).collect())
            .collect();
        Self { init, inputs }
    }

    /// frame of the violation, `None` for a trace without frames
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        self.inputs.len().checked_sub(1)
    }

    pub fn write(&self, mut w: impl Write) -> io::Result<()> {
        write!(w, "{self}")?;
        w.flush()
    }

    /// Simulates the trace on `aig`: the resets and invariant constraints
    /// must be respected and the property must hold in the last frame.
    pub fn replay(&self, aig: &Aig) -> bool {
        let Some(depth) = self.depth() else {
            return false;
        };
        if self.init.len() != aig.latchs.len()
            || self.inputs.iter().any(|i| i.len() != aig.inputs.len())
        {
            return false;
        }
        let reset_respected = aig
            .init_state()
            .iter()
            .zip(self.init.iter())
            .all(|(r, v)| r.is_none_or(|r| r == *v));
        if !reset_respected {
            return false;
        }
        let property = aig.property();
        let mut state = self.init.clone();
        for (k, inputs) in self.inputs.iter().enumerate() {
            let v = aig.simulate(&state, inputs);
            if !aig.constraints.iter().all(|c| v.lit(*c)) {
                return false;
            }
            if k == depth {
                return v.lit(property);
            }
            state = aig.next_state(&v);
        }
        false
    }
}

fn bits(f: &mut fmt::Formatter<'_>, values: &[bool]) -> fmt::Result {
    for v in values {
        write!(f, "{}", *v as u8)?;
    }
    writeln!(f)
}

impl Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1")?;
        writeln!(f, "b0")?;
        bits(f, &self.init)?;
        for inputs in self.inputs.iter() {
            bits(f, inputs)?;
        }
        writeln!(f, ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// latch 4 toggles when input 2 is set, bad when the latch is set
    const TOGGLE: &[u8] = b"aag 5 1 1 0 3 1\n2\n4 10\n4\n6 4 2\n8 5 3\n10 7 9\n";

    #[test]
    fn format() {
        let w = Witness {
            init: vec![false, true],
            inputs: vec![vec![true], vec![false]],
        };
        assert_eq!(w.to_string(), "1\nb0\n01\n1\n0\n.\n");
        assert_eq!(w.depth(), Some(1));
        let mut out = Vec::new();
        w.write(&mut out).unwrap();
        assert_eq!(out, w.to_string().into_bytes());
    }

    #[test]
    fn empty_vectors() {
        let w = Witness {
            init: vec![],
            inputs: vec![vec![]],
        };
        assert_eq!(w.to_string(), "1\nb0\n\n\n.\n");
        assert_eq!(w.depth(), Some(0));
    }

    #[test]
    fn no_frames() {
        let w = Witness {
            init: vec![false],
            inputs: vec![],
        };
        assert_eq!(w.depth(), None);
        assert!(!w.replay(&crate::frontend::from_text(TOGGLE)));
        assert_eq!(w.to_string(), "1\nb0\n0\n.\n");
    }

    #[test]
    fn replay_toggle() {
        let aig = crate::frontend::from_text(TOGGLE);
        let good = Witness {
            init: vec![false],
            inputs: vec![vec![true], vec![false]],
        };
        assert!(good.replay(&aig));
        let no_toggle = Witness {
            init: vec![false],
            inputs: vec![vec![false], vec![true]],
        };
        assert!(!no_toggle.replay(&aig));
        let bad_reset = Witness {
            init: vec![true],
            inputs: vec![vec![false]],
        };
        assert!(!bad_reset.replay(&aig));
        let wrong_width = Witness {
            init: vec![false],
            inputs: vec![vec![true, true], vec![false]],
        };
        assert!(!wrong_width.replay(&aig));
    }
}
