use crate::{
    aig::{Aig, Detection},
    encode::Encoder,
    solver::IncrementalSolver,
    statistic::Statistic,
    unroll::Unroll,
    witness::Witness,
};
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmcConfig {
    pub max_bound: usize,
    pub detect: Detection,
    pub verbose: usize,
}

impl Default for BmcConfig {
    fn default() -> Self {
        Self {
            max_bound: crate::options::DEFAULT_MAX_BOUND,
            detect: Detection::default(),
            verbose: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmcResult {
    /// the property is reachable in frame `k`
    Violated(usize),
    /// no violation in frames `0..max_bound`
    BoundExhausted(usize),
}

pub struct Bmc {
    aig: Aig,
    cfg: BmcConfig,
    encoder: Encoder,
    unroll: Unroll,
    statistic: Statistic,
    result: Option<BmcResult>,
}

impl Bmc {
    pub fn new(aig: Aig, cfg: BmcConfig, solver: Box<dyn IncrementalSolver>) -> Self {
        let encoder = Encoder::new(&aig, cfg.detect);
        let statistic = Statistic::new(encoder.shapes().iter().map(|(_, s)| s));
        let mut unroll = Unroll::new(solver);
        unroll.extend(aig.num_lits());
        encoder.encode_init(&aig, &mut unroll);
        Self {
            aig,
            cfg,
            encoder,
            unroll,
            statistic,
            result: None,
        }
    }

    #[inline]
    pub fn aig(&self) -> &Aig {
        &self.aig
    }

    #[inline]
    pub fn unroll(&self) -> &Unroll {
        &self.unroll
    }

    /// Searches frames `0..max_bound` in order, one solver query each.
    pub fn check(&mut self) -> BmcResult {
        if let Some(res) = self.result {
            return res;
        }
        let property = self.aig.property();
        let mut res = BmcResult::BoundExhausted(self.cfg.max_bound);
        for k in 0..self.cfg.max_bound {
            let start = self.statistic.label();
            self.unroll.extend(self.aig.num_lits());
            self.encoder.encode_frame(&self.aig, &mut self.unroll, k);
            self.statistic.encode += self.statistic.from_label(start);
            self.unroll.assume(k, property);
            let start = self.statistic.label();
            let sat = self.unroll.solve();
            self.statistic.solve += self.statistic.from_label(start);
            if self.cfg.verbose > 0 {
                println!("{k} {:.2}", self.statistic.time().as_secs_f64());
            }
            if sat {
                info!("property violated in frame {k}");
                res = BmcResult::Violated(k);
                break;
            }
        }
        self.statistic.num_frame = self.unroll.num_frames();
        self.statistic.num_var = self.unroll.num_var();
        self.statistic.num_clause = self.unroll.num_clause();
        self.result = Some(res);
        res
    }

    /// The counterexample of the last `check`, if it found one.
    pub fn witness(&mut self) -> Option<Witness> {
        match self.result? {
            BmcResult::Violated(k) => Some(Witness::from_model(&self.aig, &mut self.unroll, k)),
            BmcResult::BoundExhausted(_) => None,
        }
    }

    #[inline]
    pub fn statistic(&self) -> &Statistic {
        &self.statistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverOptions;

    fn bmc(aag: &str, max_bound: usize) -> Bmc {
        let cfg = BmcConfig {
            max_bound,
            ..Default::default()
        };
        Bmc::new(
            crate::frontend::from_text(aag.as_bytes()),
            cfg,
            SolverOptions::default().create(),
        )
    }

    #[test]
    fn violated_in_frame_zero() {
        // the input is the output
        let mut bmc = bmc("aag 1 1 0 1 0\n2\n2\n", 3);
        assert_eq!(bmc.check(), BmcResult::Violated(0));
        assert_eq!(bmc.statistic().num_query(), 1);
        let w = bmc.witness().unwrap();
        assert_eq!(w.inputs, vec![vec![true]]);
        assert!(w.replay(bmc.aig()));
    }

    #[test]
    fn zero_bound_asks_nothing() {
        let mut bmc = bmc("aag 1 1 0 1 0\n2\n2\n", 0);
        assert_eq!(bmc.check(), BmcResult::BoundExhausted(0));
        assert_eq!(bmc.statistic().num_query(), 0);
        assert_eq!(bmc.unroll().num_frames(), 1);
        assert!(bmc.witness().is_none());
    }

    #[test]
    fn constant_false_property() {
        let mut bmc = bmc("aag 1 1 0 0 0\n2\n", 4);
        assert_eq!(bmc.check(), BmcResult::BoundExhausted(4));
        assert_eq!(bmc.statistic().num_query(), 4);
        // cached
        assert_eq!(bmc.check(), BmcResult::BoundExhausted(4));
        assert_eq!(bmc.statistic().num_query(), 4);
    }

    #[test]
    fn shift_register_depth() {
        // 2 -> 4 -> 6 -> 8, bad when the last latch is set
        let aag = "aag 4 1 3 0 0 1\n2\n4 2\n6 4\n8 6\n8\n";
        let mut bmc = bmc(aag, 10);
        assert_eq!(bmc.check(), BmcResult::Violated(3));
        let w = bmc.witness().unwrap();
        assert_eq!(w.depth(), Some(3));
        assert_eq!(w.init, vec![false, false, false]);
        assert!(w.inputs[0][0]);
        assert!(w.replay(bmc.aig()));
        assert_eq!(bmc.unroll().num_frames(), 5);
    }
}
