//! Built-in optimization passes.

mod classical;

pub use classical::{ClassicalOptimization, optimize};
