use crate::aig::GateShape;
use giputils::statistic::{CountedDuration, RunningTime};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Statistic {
    time: RunningTime,

    pub num_and: usize,
    pub num_xor: usize,
    pub num_ite: usize,

    pub num_frame: usize,
    pub num_var: usize,
    pub num_clause: usize,

    pub encode: CountedDuration,
    pub solve: CountedDuration,
}

impl Statistic {
    pub fn new<'a>(shapes: impl Iterator<Item = &'a GateShape>) -> Self {
        let mut res = Self::default();
        for s in shapes {
            match s {
                GateShape::And(..) => res.num_and += 1,
                GateShape::Xor(..) => res.num_xor += 1,
                GateShape::Ite { .. } => res.num_ite += 1,
            }
        }
        res
    }

    /// time since the checker was created
    #[inline]
    pub fn time(&self) -> Duration {
        self.time.time()
    }

    #[inline]
    pub fn label(&self) -> Duration {
        self.time.label()
    }

    #[inline]
    pub fn from_label(&self, start: Duration) -> Duration {
        self.time.from_label(start)
    }

    #[inline]
    pub fn num_query(&self) -> usize {
        self.solve.count()
    }
}
