//! Tokens produced by the [lexer](super::lex).

/// A single lexical token of formula surface syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An identifier matching `[A-Za-z][A-Za-z0-9]*`.
    Ident(String),

    /// `¬`
    Not,

    /// `∧`
    And,

    /// `∨`
    Or,

    /// `→`
    Implies,

    /// `↔`
    Iff,

    /// `(`
    LParen,

    /// `)`
    RParen,
}

impl Token {
    /// Binding power used by the shunting-yard parser: `(precedence, right_associative)`.
    /// Parentheses and identifiers never participate in precedence comparisons.
    pub fn binary_precedence(&self) -> Option<(u8, bool)> {
        match self {
            Token::And | Token::Or => Some((2, false)),
            Token::Implies | Token::Iff => Some((1, true)),
            _ => None,
        }
    }
}
