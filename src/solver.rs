use crate::options::OptionError;
use logic_form::{Lit, Var};
use satif::Satif;
use std::mem::take;

/// The incremental sat solver as seen by the unroller. Clauses are never
/// retracted, assumptions only hold for the next `solve`.
pub trait IncrementalSolver {
    fn num_var(&self) -> usize;

    /// makes sure variables `0..num_var` exist
    fn reserve(&mut self, num_var: usize);

    fn add_clause(&mut self, clause: &[Lit]);

    fn assume(&mut self, lit: Lit);

    fn solve(&mut self) -> bool;

    /// value of `lit` in the model of the last satisfiable `solve`
    fn value(&mut self, lit: Lit) -> bool;
}

/// Adapter for the solvers of the satif family.
pub struct SatifSolver<S: Satif> {
    solver: S,
    num_var: usize,
    assumps: Vec<Lit>,
}

impl<S: Satif> SatifSolver<S> {
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            num_var: 0,
            assumps: Vec::new(),
        }
    }
}

impl<S: Satif> IncrementalSolver for SatifSolver<S> {
    #[inline]
    fn num_var(&self) -> usize {
        self.num_var
    }

    fn reserve(&mut self, num_var: usize) {
        while self.num_var < num_var {
            let v = self.solver.new_var();
            assert_eq!(v, Var::new(self.num_var));
            self.num_var += 1;
        }
    }

    #[inline]
    fn add_clause(&mut self, clause: &[Lit]) {
        self.solver.add_clause(clause);
    }

    #[inline]
    fn assume(&mut self, lit: Lit) {
        self.assumps.push(lit);
    }

    fn solve(&mut self) -> bool {
        let assumps = take(&mut self.assumps);
        self.solver.solve(&assumps)
    }

    #[inline]
    fn value(&mut self, lit: Lit) -> bool {
        self.solver.sat_value(lit).unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    Cadical,
    Minisat,
}

/// Solver configuration passed through from the command line as
/// `name[=value]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverOptions {
    pub backend: Backend,
    /// variables allocated before the first frame
    pub reserve: usize,
}

impl SolverOptions {
    pub const RECOGNIZED: [&'static str; 2] = ["backend", "reserve"];

    pub fn parse<'a>(opts: impl IntoIterator<Item = &'a str>) -> Result<Self, OptionError> {
        let mut res = Self::default();
        for opt in opts {
            res.set(opt)?;
        }
        Ok(res)
    }

    pub fn set(&mut self, opt: &str) -> Result<(), OptionError> {
        let stripped = opt.trim_start_matches('-');
        let (name, value) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (stripped, None),
        };
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        match name {
            "backend" => {
                self.backend = match value {
                    Some("cadical") => Backend::Cadical,
                    Some("minisat") => Backend::Minisat,
                    _ => return Err(invalid()),
                }
            }
            "reserve" => {
                self.reserve = value.and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
            }
            _ => return Err(OptionError::UnknownOption(opt.to_string())),
        }
        Ok(())
    }

    pub fn create(&self) -> Box<dyn IncrementalSolver> {
        let mut solver: Box<dyn IncrementalSolver> = match self.backend {
            Backend::Cadical => Box::new(SatifSolver::new(cadical::Solver::new())),
            Backend::Minisat => Box::new(SatifSolver::new(minisat::Solver::new())),
        };
        solver.reserve(self.reserve);
        solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_options() {
        let opts = SolverOptions::parse(["backend=minisat", "--reserve=10"]).unwrap();
        assert_eq!(opts.backend, Backend::Minisat);
        assert_eq!(opts.reserve, 10);
        assert_eq!(SolverOptions::parse([]).unwrap(), SolverOptions::default());
    }

    #[test]
    fn reject_unrecognized_options() {
        assert_eq!(
            SolverOptions::parse(["--elim=0"]),
            Err(OptionError::UnknownOption("--elim=0".to_string()))
        );
        assert!(matches!(
            SolverOptions::parse(["backend=kissat"]),
            Err(OptionError::InvalidValue { .. })
        ));
        assert!(matches!(
            SolverOptions::parse(["reserve"]),
            Err(OptionError::InvalidValue { .. })
        ));
    }

    #[test]
    fn incremental_assumptions() {
        for backend in [Backend::Cadical, Backend::Minisat] {
            let mut solver = SolverOptions {
                backend,
                reserve: 2,
            }
            .create();
            assert_eq!(solver.num_var(), 2);
            let (a, b) = (Var::new(0).lit(), Var::new(1).lit());
            solver.add_clause(&[a, b]);
            solver.add_clause(&[!a, b]);
            solver.assume(!b);
            assert!(!solver.solve());
            // the assumption is gone
            assert!(solver.solve());
            assert!(solver.value(b));
            solver.assume(a);
            assert!(solver.solve());
            assert!(solver.value(a) && solver.value(b));
        }
    }
}
