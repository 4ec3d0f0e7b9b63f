pub mod aig;
pub mod bmc;
pub mod encode;
pub mod frontend;
pub mod options;
pub mod solver;
pub mod statistic;
pub mod unroll;
pub mod witness;

pub use options::Options;
