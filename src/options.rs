use crate::{aig::Detection, bmc::BmcConfig, solver::SolverOptions};
use clap::Parser;
use thiserror::Error;

pub const DEFAULT_MAX_BOUND: usize = 1000;

/// rbmc bounded model checker
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Options {
    /// [<max_bound>] <model> [<witness>]: optional maximum bound, model file
    /// in aiger format and optional witness output path
    #[arg(required = true, num_args = 1..=3, value_name = "ARGS")]
    pub args: Vec<String>,

    /// disable xor gate detection
    #[arg(long = "xor", visible_alias = "no-xor", default_value_t = false)]
    pub no_xor: bool,

    /// disable ite gate detection
    #[arg(long = "ite", visible_alias = "no-ite", default_value_t = false)]
    pub no_ite: bool,

    /// solver option NAME[=VALUE], one of backend=cadical|minisat, reserve=N
    #[arg(short = 'S', long = "solver-option", value_name = "NAME[=VALUE]")]
    pub solver_options: Vec<String>,

    /// replay the witness on the model before reporting it
    #[arg(long, default_value_t = false)]
    pub certify: bool,

    /// verbose level
    #[arg(short, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionError {
    #[error("cannot parse option: {0}")]
    UnknownOption(String),
    #[error("invalid value '{value}' of option {name}")]
    InvalidValue { name: String, value: String },
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Files and bound named by the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub max_bound: usize,
    pub model: String,
    pub witness: Option<String>,
}

impl Options {
    /// A leading unsigned integer is the maximum bound, otherwise the bound
    /// defaults to [`DEFAULT_MAX_BOUND`].
    pub fn targets(&self) -> Result<Targets, OptionError> {
        let mut args = self.args.iter();
        let mut first = args.next();
        let mut max_bound = DEFAULT_MAX_BOUND;
        if let Some(b) = first.and_then(|a| a.parse().ok()) {
            max_bound = b;
            first = args.next();
        }
        let Some(model) = first.cloned() else {
            return Err(OptionError::UnexpectedArgument(
                "missing model file".to_string(),
            ));
        };
        let witness = args.next().cloned();
        if let Some(extra) = args.next() {
            return Err(OptionError::UnexpectedArgument(extra.clone()));
        }
        Ok(Targets {
            max_bound,
            model,
            witness,
        })
    }

    /// the switches disable detection
    pub fn detection(&self) -> Detection {
        Detection {
            xor: !self.no_xor,
            ite: !self.no_ite,
        }
    }

    pub fn solver(&self) -> Result<SolverOptions, OptionError> {
        SolverOptions::parse(self.solver_options.iter().map(String::as_str))
    }

    pub fn bmc_config(&self, max_bound: usize) -> BmcConfig {
        BmcConfig {
            max_bound,
            detect: self.detection(),
            verbose: self.verbose,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::parse_from(["rbmc", "model.aag"])
    }
}
