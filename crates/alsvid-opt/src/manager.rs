//! Pass manager for orchestrating optimization.

use tracing::{debug, info, instrument};

use alsvid_ir::Circuit;

use crate::error::OptimizeResult;
use crate::pass::Pass;
use crate::passes::ClassicalOptimization;

/// Manages and executes a sequence of optimization passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Create the standard pipeline.
    pub fn standard() -> Self {
        let mut pm = Self::new();
        pm.add_pass(ClassicalOptimization::new());
        pm
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on the given circuit.
    #[instrument(skip(self, circuit))]
    pub fn run(&self, circuit: &mut Circuit) -> OptimizeResult<()> {
        info!(
            "Running pass manager with {} passes on circuit with {} gates",
            self.passes.len(),
            circuit.num_gates()
        );

        for pass in &self.passes {
            if pass.should_run(circuit) {
                debug!("Running pass: {}", pass.name());
                pass.run(circuit)?;
                debug!(
                    "Pass {} completed, gates: {}",
                    pass.name(),
                    circuit.num_gates()
                );
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }

        info!("Pass manager completed, final gates: {}", circuit.num_gates());

        Ok(())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}
