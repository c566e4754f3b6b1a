//! Parser and validator for the gate assembly.

use alsvid_ir::{Circuit, Gate, GateSpec};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse an assembly source string into a validated [`Circuit`].
///
/// The first invalid line aborts the parse; there is no recovery and no
/// partial circuit.
pub fn parse(source: &str) -> ParseResult<Circuit> {
    Parser::new(source)?.parse_program()
}

/// Parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    /// 1-based line of the next unconsumed token.
    line: usize,
}

impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let mut tokens = Vec::new();

        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, message)) => {
                    let line = source[..span.start].matches('\n').count() + 1;
                    return Err(ParseError::LexerError { line, message });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            line: 1,
        })
    }

    /// Check if we've reached the end.
    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance and return the current token, tracking line numbers.
    fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        if token == Token::Newline {
            self.line += 1;
        }
        Some(token)
    }

    /// Parse the entire program.
    fn parse_program(&mut self) -> ParseResult<Circuit> {
        let mut circuit = Circuit::new();

        loop {
            // Blank and comment-only lines reduce to bare newlines.
            while matches!(self.peek(), Some(Token::Newline)) {
                self.advance();
            }
            if self.is_eof() {
                break;
            }
            self.parse_statement(&mut circuit)?;
        }

        Ok(circuit)
    }

    /// Parse one statement: a bit declaration or a gate invocation.
    fn parse_statement(&mut self, circuit: &mut Circuit) -> ParseResult<()> {
        let line = self.line;
        let token = self.advance().expect("statement start past end of input");

        match token {
            Token::Qubit => {
                let name = self.parse_identifier("bit name")?;
                self.expect_line_end()?;
                if circuit.is_declared(&name) {
                    return Err(ParseError::DuplicateDeclaration { line, name });
                }
                circuit.add_qubit(name)?;
            }

            Token::Cbit => {
                let name = self.parse_identifier("bit name")?;
                self.expect_line_end()?;
                if circuit.is_declared(&name) {
                    return Err(ParseError::DuplicateDeclaration { line, name });
                }
                circuit.add_cbit(name)?;
            }

            Token::Ident(name) => self.parse_gate(circuit, name, line)?,

            other => {
                return Err(ParseError::UnexpectedToken {
                    line,
                    expected: "declaration or gate".into(),
                    found: other.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a gate invocation `<name> <op>[,<op>...]`.
    fn parse_gate(&mut self, circuit: &mut Circuit, name: String, line: usize) -> ParseResult<()> {
        let mut operands = vec![self.parse_identifier("operand")?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            operands.push(self.parse_identifier("operand")?);
        }
        self.expect_line_end()?;

        let spec = GateSpec::find(&name).ok_or_else(|| ParseError::UnknownGate {
            line,
            name: name.clone(),
        })?;

        if operands.len() != spec.num_operands {
            return Err(ParseError::OperandCountMismatch {
                line,
                gate: name,
                expected: spec.num_operands,
                got: operands.len(),
            });
        }

        for (i, op) in operands.iter().enumerate() {
            if operands[..i].contains(op) {
                return Err(ParseError::DuplicateOperand {
                    line,
                    gate: name,
                    operand: op.clone(),
                });
            }
            if !circuit.is_declared(op) {
                return Err(ParseError::UndeclaredBit {
                    line,
                    gate: name,
                    name: op.clone(),
                });
            }
        }

        circuit.apply(Gate::new(spec, operands, line))?;
        Ok(())
    }

    /// Parse an identifier.
    fn parse_identifier(&mut self, expected: &str) -> ParseResult<String> {
        match self.advance() {
            Some(Token::Ident(s)) => Ok(s),
            Some(other) => Err(ParseError::UnexpectedToken {
                line: self.line,
                expected: expected.into(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof {
                line: self.line,
                expected: expected.into(),
            }),
        }
    }

    /// Expect the end of the current line (newline or end of input).
    fn expect_line_end(&mut self) -> ParseResult<()> {
        match self.advance() {
            None | Some(Token::Newline) => Ok(()),
            Some(other) => Err(ParseError::UnexpectedToken {
                line: self.line,
                expected: "end of line".into(),
                found: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::BitKind;

    #[test]
    fn test_parse_declarations_and_gates() {
        let source = "\
# a teleportation fragment
qubit a
qubit b
cbit m

CNOT a,b
H a
measure a
";
        let circuit = parse(source).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_cbits(), 1);
        assert_eq!(circuit.num_gates(), 3);

        let bits = circuit.bits();
        assert_eq!(bits[0].name, "a");
        assert_eq!(bits[2].kind, BitKind::Classical);

        let gates = circuit.gates();
        assert_eq!(gates[0].name(), "CNOT");
        assert_eq!(gates[0].operands, vec!["a", "b"]);
        assert_eq!(gates[0].line, 6);
        assert_eq!(gates[2].name(), "measure");
        assert_eq!(gates[2].line, 8);
    }

    #[test]
    fn test_operand_spacing_is_flexible() {
        let source = "qubit a\nqubit b\nCNOT a, b\n";
        let circuit = parse(source).unwrap();
        assert_eq!(circuit.gates()[0].operands, vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_gate_reports_line() {
        let source = "qubit a\nqubit b\n\nCPHASE a,b\n";
        let err = parse(source).unwrap_err();
        match err {
            ParseError::UnknownGate { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "CPHASE");
            }
            other => panic!("Expected UnknownGate, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_too_few() {
        let source = "qubit a\nCNOT a\n";
        let err = parse(source).unwrap_err();
        match err {
            ParseError::OperandCountMismatch {
                line,
                gate,
                expected,
                got,
            } => {
                assert_eq!(line, 2);
                assert_eq!(gate, "CNOT");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("Expected OperandCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_too_many() {
        let source = "qubit a\nqubit b\nqubit c\nCNOT a,b,c\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(
            err,
            ParseError::OperandCountMismatch {
                line: 4,
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_operand() {
        let source = "qubit a\nCNOT a,a\n";
        let err = parse(source).unwrap_err();
        match err {
            ParseError::DuplicateOperand {
                line,
                gate,
                operand,
            } => {
                assert_eq!(line, 2);
                assert_eq!(gate, "CNOT");
                assert_eq!(operand, "a");
            }
            other => panic!("Expected DuplicateOperand, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_declaration() {
        let source = "qubit a\ncbit a\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateDeclaration { line: 2, name } if name == "a"
        ));
    }

    #[test]
    fn test_undeclared_operand() {
        let source = "qubit a\nCNOT a,b\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UndeclaredBit { line: 2, name, .. } if name == "b"
        ));
    }

    #[test]
    fn test_trailing_junk_rejected() {
        let source = "qubit a extra\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 1, .. }));
    }

    #[test]
    fn test_missing_final_newline() {
        let source = "qubit a\nqubit b\nCNOT a,b";
        let circuit = parse(source).unwrap();
        assert_eq!(circuit.num_gates(), 1);
    }

    #[test]
    fn test_empty_input() {
        let circuit = parse("# nothing but comments\n\n").unwrap();
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_gates(), 0);
    }
}
