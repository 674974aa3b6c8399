/*!
Tokenizer and shunting-yard parser turning formula surface syntax into a [Formula] tree.

# Surface syntax

Tokens are `¬ ∧ ∨ → ↔`, parentheses, and identifiers matching `[A-Za-z][A-Za-z0-9]*`.
Whitespace is insignificant anywhere. Operator precedence, highest first:

| Operator | Precedence | Associativity | Arity  |
|----------|------------|---------------|--------|
| `¬`      | 3          | right         | unary  |
| `∧` `∨`  | 2          | left          | binary |
| `→` `↔`  | 1          | right         | binary |

The identifier `False` is not an ordinary atom: it denotes ⊥, and is recognised by the CNF
normalizer (see [cnf](crate::cnf)) rather than treated as a propositional variable with that name.
*/

mod token;
use token::Token;

use crate::{
    misc::log::targets,
    structures::{atom::is_valid_atom_name, formula::Formula},
    types::err::ParseError,
};

/// Parses formula surface syntax into a [Formula] tree.
pub fn parse(text: &str) -> Result<Formula, ParseError> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped.is_empty() {
        log::debug!(target: targets::PARSER, "empty formula text");
        return Err(ParseError::Empty);
    }

    if is_valid_atom_name(&stripped) {
        return Ok(Formula::atom(stripped));
    }

    if let Some(rest) = stripped.strip_prefix('¬') {
        if is_valid_atom_name(rest) {
            return Ok(Formula::not(Formula::atom(rest)));
        }
    }

    let tokens = lex(&stripped)?;
    shunting_yard(tokens)
}

/// Splits `text` (already stripped of whitespace) into [Token]s.
fn lex(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        match c {
            '¬' => {
                tokens.push(Token::Not);
                index += 1;
            }
            '∧' => {
                tokens.push(Token::And);
                index += 1;
            }
            '∨' => {
                tokens.push(Token::Or);
                index += 1;
            }
            '→' => {
                tokens.push(Token::Implies);
                index += 1;
            }
            '↔' => {
                tokens.push(Token::Iff);
                index += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                index += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                index += 1;
            }
            c if c.is_ascii_alphabetic() => {
                let start = index;
                index += 1;
                while index < chars.len() && chars[index].is_ascii_alphanumeric() {
                    index += 1;
                }
                let ident: String = chars[start..index].iter().collect();
                tokens.push(Token::Ident(ident));
            }
            offending => {
                log::warn!(target: targets::PARSER, "lexical error on '{offending}' at {index}");
                return Err(ParseError::LexicalError { offending, at: index });
            }
        }
    }

    Ok(tokens)
}

/// An operator on the shunting-yard operator stack. `Open` marks a `(`.
enum StackOp {
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
}

/// Parses a token stream into a [Formula] via the shunting-yard algorithm.
fn shunting_yard(tokens: Vec<Token>) -> Result<Formula, ParseError> {
    let mut output: Vec<Formula> = Vec::new();
    let mut operators: Vec<StackOp> = Vec::new();

    for token in tokens {
        match token {
            Token::Ident(name) => output.push(Formula::atom(name)),

            Token::LParen => operators.push(StackOp::Open),

            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(StackOp::Open) => break,
                        Some(op) => apply(op, &mut output)?,
                        None => return Err(ParseError::UnmatchedCloseParen),
                    }
                }
            }

            Token::Not => operators.push(StackOp::Not),

            binary_token => {
                let (precedence, right_assoc) = binary_token
                    .binary_precedence()
                    .expect("non-binary token handled above");

                while let Some(top_precedence) = operators.last().and_then(stack_precedence) {
                    let should_pop = if right_assoc {
                        top_precedence > precedence
                    } else {
                        top_precedence >= precedence
                    };
                    if !should_pop {
                        break;
                    }
                    let op = operators.pop().expect("just peeked");
                    apply(op, &mut output)?;
                }

                operators.push(match binary_token {
                    Token::And => StackOp::And,
                    Token::Or => StackOp::Or,
                    Token::Implies => StackOp::Implies,
                    Token::Iff => StackOp::Iff,
                    _ => unreachable!("binary_precedence only returns Some for these"),
                });
            }
        }
    }

    while let Some(op) = operators.pop() {
        match op {
            StackOp::Open => return Err(ParseError::UnmatchedOpenParen),
            op => apply(op, &mut output)?,
        }
    }

    match output.len() {
        1 => Ok(output.pop().expect("length checked")),
        0 => Err(ParseError::MissingOperand),
        _ => Err(ParseError::MissingLeftOperand),
    }
}

/// The precedence/associativity of an operator already on the stack, `None` for `(`.
fn stack_precedence(op: &StackOp) -> Option<u8> {
    match op {
        StackOp::Not => Some(3),
        StackOp::And | StackOp::Or => Some(2),
        StackOp::Implies | StackOp::Iff => Some(1),
        StackOp::Open => None,
    }
}

/// Pops the operands `op` requires from `output` and pushes the resulting formula.
fn apply(op: StackOp, output: &mut Vec<Formula>) -> Result<(), ParseError> {
    match op {
        StackOp::Not => {
            let inner = output.pop().ok_or(ParseError::MissingOperand)?;
            output.push(Formula::not(inner));
        }
        StackOp::Open => unreachable!("callers never apply an unmatched '('"),
        binary => {
            let right = output.pop().ok_or(ParseError::MissingOperand)?;
            let left = output.pop().ok_or(ParseError::MissingLeftOperand)?;
            output.push(match binary {
                StackOp::And => Formula::and(left, right),
                StackOp::Or => Formula::or(left, right),
                StackOp::Implies => Formula::implies(left, right),
                StackOp::Iff => Formula::iff(left, right),
                StackOp::Not | StackOp::Open => unreachable!("handled above"),
            });
        }
    }
    Ok(())
}
