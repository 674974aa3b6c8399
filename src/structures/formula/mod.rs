/*!
The formula AST.

A [Formula] is an immutable value: two formulas compare equal iff they are structurally
identical, and the derived [Hash] agrees with that equality. Nothing below mutates a formula
in place --- every transformation in [cnf](crate::cnf) builds a new tree.
*/

use std::rc::Rc;

use crate::structures::atom::Atom;

/// A node of a propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional atom.
    Atom(Atom),

    /// Negation.
    Not(Rc<Formula>),

    /// Conjunction.
    And(Rc<Formula>, Rc<Formula>),

    /// Disjunction.
    Or(Rc<Formula>, Rc<Formula>),

    /// Material implication.
    Implies(Rc<Formula>, Rc<Formula>),

    /// Biconditional.
    Iff(Rc<Formula>, Rc<Formula>),
}

impl Formula {
    /// Builds an atomic formula.
    pub fn atom(name: impl Into<Atom>) -> Self {
        Formula::Atom(name.into())
    }

    /// Builds a negation.
    pub fn not(f: Formula) -> Self {
        Formula::Not(Rc::new(f))
    }

    /// Builds a conjunction.
    pub fn and(l: Formula, r: Formula) -> Self {
        Formula::And(Rc::new(l), Rc::new(r))
    }

    /// Builds a disjunction.
    pub fn or(l: Formula, r: Formula) -> Self {
        Formula::Or(Rc::new(l), Rc::new(r))
    }

    /// Builds an implication.
    pub fn implies(l: Formula, r: Formula) -> Self {
        Formula::Implies(Rc::new(l), Rc::new(r))
    }

    /// Builds a biconditional.
    pub fn iff(l: Formula, r: Formula) -> Self {
        Formula::Iff(Rc::new(l), Rc::new(r))
    }

    /// The number of nodes in the formula tree, used against
    /// [normalizer_node_cap](crate::config::Config::normalizer_node_cap).
    pub fn node_count(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(inner) => 1 + inner.node_count(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => 1 + l.node_count() + r.node_count(),
        }
    }

    /// The negation of `self`, collapsing a leading double negation rather than nesting `Not`.
    pub fn negated(&self) -> Formula {
        match self {
            Formula::Not(inner) => inner.as_ref().clone(),
            other => Formula::not(other.clone()),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(inner) => write!(f, "¬{}", Paren(inner)),
            Formula::And(l, r) => write!(f, "{} ∧ {}", Paren(l), Paren(r)),
            Formula::Or(l, r) => write!(f, "{} ∨ {}", Paren(l), Paren(r)),
            Formula::Implies(l, r) => write!(f, "{} → {}", Paren(l), Paren(r)),
            Formula::Iff(l, r) => write!(f, "{} ↔ {}", Paren(l), Paren(r)),
        }
    }
}

/// Wraps a sub-formula in parentheses unless it is atomic or already unary, keeping printed
/// output readable without tracking precedence levels through the `Display` impl.
struct Paren<'f>(&'f Formula);

impl std::fmt::Display for Paren<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Formula::Atom(_) | Formula::Not(_) => write!(f, "{}", self.0),
            _ => write!(f, "({})", self.0),
        }
    }
}
