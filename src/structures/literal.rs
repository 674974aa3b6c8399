//! Literals --- an atom paired with a polarity.
//!
//! Two literals are *complementary* iff they share an atom and differ in polarity; resolution
//! is defined entirely in terms of finding complementary pairs across a pair of clauses.

use std::cmp::Ordering;

use crate::structures::atom::Atom;

/// A propositional literal: an atom together with a polarity bit.
///
/// `Literal`s are ordered by atom first and polarity second, with `false` ordered strictly
/// before `true` (the derived [Ord] on `bool` already has this shape, so deriving is enough
/// once atoms compare by name).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    atom: Atom,
    polarity: bool,
}

impl Literal {
    /// Builds a literal for `atom` with the given `polarity`.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The polarity of the literal (`true` for a positive occurrence).
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal with the opposite polarity over the same atom.
    pub fn negate(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Whether `self` and `other` share an atom but differ in polarity.
    pub fn complementary(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atom
            .cmp(&other.atom)
            .then_with(|| self.polarity.cmp(&other.polarity))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.polarity {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "¬{}", self.atom)
        }
    }
}
