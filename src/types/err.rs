/*!
Error types used in the library.

Most of these are surfaced directly to a caller (a malformed formula, an unknown selector).
Others are internal to the prover and normalizer, and are only ever seen wrapped in [ErrorKind::Overbudget] --- a budget was exhausted, and the enclosing operation has been abandoned without mutating anything.

Names of the error enums --- for the most part --- overlap with the subsystem they describe.
As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.
*/

use crate::structures::formula::Formula;

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// An error while tokenizing or parsing formula text.
    Parse(ParseError),

    /// The CNF normalizer exhausted its time or node budget.
    Overbudget(OverbudgetError),

    /// A contraction or revision was asked for an unrecognised selector.
    InvalidSelector(String),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Overbudget(e) => write!(f, "budget exceeded: {e}"),
            Self::InvalidSelector(s) => write!(f, "invalid selector: {s}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<OverbudgetError> for ErrorKind {
    fn from(e: OverbudgetError) -> Self {
        ErrorKind::Overbudget(e)
    }
}

/// Errors during tokenization or parsing of formula text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained a byte which is not whitespace, a connective, a parenthesis, or part of an identifier.
    LexicalError { offending: char, at: usize },

    /// An opening parenthesis was never closed.
    UnmatchedOpenParen,

    /// A closing parenthesis had no matching opening parenthesis.
    UnmatchedCloseParen,

    /// An operator was found without the operands it requires.
    MissingOperand,

    /// The formula text was empty (after removing whitespace).
    Empty,

    /// A binary operator was applied without a left-hand operand (e.g. a formula starting with `∧`).
    MissingLeftOperand,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LexicalError { offending, at } => {
                write!(f, "unrecognised character '{offending}' at byte {at}")
            }
            Self::UnmatchedOpenParen => write!(f, "unmatched '('"),
            Self::UnmatchedCloseParen => write!(f, "unmatched ')'"),
            Self::MissingOperand => write!(f, "operator is missing an operand"),
            Self::Empty => write!(f, "empty formula"),
            Self::MissingLeftOperand => write!(f, "binary operator with no left operand"),
        }
    }
}

/// A budget (time or size) was exhausted before a definite answer could be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverbudgetError {
    /// The CNF normalizer exceeded its wall-clock budget while transforming `formula`.
    NormalizerTimeout { formula: Formula },

    /// The CNF normalizer exceeded its AST node cap while transforming `formula`.
    NormalizerNodeCap { formula: Formula },

    /// The resolution prover exceeded its wall-clock budget.
    ProverTimeout,

    /// The resolution prover exceeded its clause cap.
    ProverClauseCap,

    /// The resolution prover exceeded its outer iteration cap.
    ProverIterationCap,
}

impl std::fmt::Display for OverbudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NormalizerTimeout { formula } => {
                write!(f, "normalizer timed out on '{formula}'")
            }
            Self::NormalizerNodeCap { formula } => {
                write!(f, "normalizer exceeded its node cap on '{formula}'")
            }
            Self::ProverTimeout => write!(f, "prover timed out"),
            Self::ProverClauseCap => write!(f, "prover exceeded its clause cap"),
            Self::ProverIterationCap => write!(f, "prover exceeded its iteration cap"),
        }
    }
}

/// The crate-wide result alias.
pub type Result<T> = std::result::Result<T, ErrorKind>;
