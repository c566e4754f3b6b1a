//! Emitter for serializing circuits back to assembly text.

use alsvid_ir::Circuit;

/// Emit a circuit as assembly source.
///
/// Declarations come first, one per bit in declaration order, followed by
/// the gate stream, one gate per line. No validation is performed: a
/// [`Circuit`] only holds gates over declared bits.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

/// Assembly emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> String {
        for bit in circuit.bits() {
            self.writeln(&bit.to_string());
        }

        if !circuit.bits().is_empty() && !circuit.gates().is_empty() {
            self.writeln("");
        }

        for gate in circuit.gates() {
            self.writeln(&gate.to_string());
        }

        self.output.clone()
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
