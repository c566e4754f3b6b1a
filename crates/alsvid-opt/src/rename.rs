//! Logical-to-physical bit renaming.

use rustc_hash::FxHashMap;

use alsvid_ir::{Bit, Gate};

/// Mapping from logical bit names, as written in the input program, to
/// the physical wires currently carrying them.
///
/// The table starts as the identity over all declared bits and changes
/// only when a swap fold rebinds a pair of wires. It is the one piece of
/// state threading subcircuits together and must be applied in strict
/// program order: a later subcircuit's correctness depends on the
/// accumulated renames of all earlier ones.
#[derive(Debug, Clone)]
pub struct RenameTable {
    /// logical name → physical wire.
    forward: FxHashMap<String, String>,
    /// physical wire → logical name.
    inverse: FxHashMap<String, String>,
}

impl RenameTable {
    /// The identity table over the given declarations.
    pub fn identity(bits: &[Bit]) -> Self {
        let forward: FxHashMap<String, String> = bits
            .iter()
            .map(|bit| (bit.name.clone(), bit.name.clone()))
            .collect();
        let inverse = forward.clone();
        Self { forward, inverse }
    }

    /// The physical wire currently bound to a logical name.
    ///
    /// # Panics
    ///
    /// Panics on an undeclared name; the parser guarantees every gate
    /// operand is declared.
    pub fn resolve(&self, logical: &str) -> &str {
        self.forward
            .get(logical)
            .map(String::as_str)
            .expect("operand not covered by rename table")
    }

    /// A copy of the gate with operands resolved to physical wires.
    pub fn resolve_gate(&self, gate: &Gate) -> Gate {
        Gate::new(
            gate.spec,
            gate.operands.iter().map(|op| self.resolve(op)),
            gate.line,
        )
    }

    /// Exchange the logical bindings of two physical wires.
    ///
    /// After the call, whatever logical name resolved to `a` resolves to
    /// `b`, and vice versa. Used when a swap fold removes three CNOTs
    /// whose combined action is exactly this exchange.
    pub fn swap_physical(&mut self, a: &str, b: &str) {
        let logical_a = self
            .inverse
            .get(a)
            .cloned()
            .expect("wire not covered by rename table");
        let logical_b = self
            .inverse
            .get(b)
            .cloned()
            .expect("wire not covered by rename table");

        self.forward.insert(logical_a.clone(), b.to_string());
        self.forward.insert(logical_b.clone(), a.to_string());
        self.inverse.insert(a.to_string(), logical_b);
        self.inverse.insert(b.to_string(), logical_a);
    }

    /// Check whether the table still maps every name to itself.
    pub fn is_identity(&self) -> bool {
        self.forward.iter().all(|(k, v)| k == v)
    }

    /// Number of swap folds' worth of displaced bindings.
    pub fn num_renamed(&self) -> usize {
        self.forward.iter().filter(|(k, v)| k != v).count()
    }
}
