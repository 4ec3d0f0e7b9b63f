mod aiger;

pub use aiger::*;
