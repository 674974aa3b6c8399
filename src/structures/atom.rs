//! Atoms --- the propositional variables a formula is built from.
//!
//! An atom is named, not numbered: `[A-Za-z][A-Za-z0-9]*`. Names are interned behind an
//! [Rc](std::rc::Rc) so that cloning a [Formula](crate::structures::formula::Formula) or a
//! [Literal](crate::structures::literal::Literal) --- which happens often, as clauses are
//! cloned freely during resolution --- never re-allocates the underlying string.

use std::rc::Rc;

/// The name of a propositional atom.
pub type Atom = Rc<str>;

/// The distinguished atom name used to denote ⊥ (falsum) in the external formula syntax.
pub const FALSE_ATOM: &str = "False";

/// Whether `name` is a syntactically valid atom identifier: `[A-Za-z][A-Za-z0-9]*`.
pub fn is_valid_atom_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
