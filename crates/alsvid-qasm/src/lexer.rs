//! Lexer for the line-oriented gate assembly.

use logos::Logos;

/// Tokens for the assembly format.
///
/// Horizontal whitespace and `#` comments are skipped; newlines are kept
/// as tokens because statements are line-delimited and diagnostics carry
/// 1-based line numbers.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    #[token("\n")]
    Newline,

    #[token(",")]
    Comma,

    #[token("qubit")]
    Qubit,

    #[token("cbit")]
    Cbit,

    // Gate and bit names: `c-z`, `Tdag`, `q[0]`, `m.out` are all valid.
    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_\-\.\[\]]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Newline => write!(f, "end of line"),
            Token::Comma => write!(f, ","),
            Token::Qubit => write!(f, "qubit"),
            Token::Cbit => write!(f, "cbit"),
            Token::Ident(s) => write!(f, "{s}"),
        }
    }
}

/// A token with its span information.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    #[allow(dead_code)]
    pub span: std::ops::Range<usize>,
}

/// Tokenize an assembly source string.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken, (std::ops::Range<usize>, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if let Ok(token) = result {
            tokens.push(Ok(SpannedToken { token, span }));
        } else {
            let slice = &source[span.clone()];
            tokens.push(Err((span, format!("Invalid token: '{slice}'"))));
        }
    }

    tokens
}
