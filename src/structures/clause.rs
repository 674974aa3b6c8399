/*!
Clauses, i.e. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is a [BTreeSet] of [Literal]s: sets rather than
vectors, so that two clauses differing only in the order or repetition of their literals are
the same clause by construction, and a [Cnf] can dedup clauses for free.

- The empty clause is always false (never true) --- it is the clause written ⊥.
- A clause containing both polarities of the same atom is a tautology, and is always true; see
  [Clause::is_tautology]. Such clauses are dropped before they ever reach the resolution prover,
  both when [cnf](crate::cnf) first extracts clauses from a formula and when
  [Clause::resolvents_with] derives new ones.
*/

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// A disjunction of literals, represented as a set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// The empty clause, i.e. ⊥.
    pub fn empty() -> Self {
        Clause(BTreeSet::new())
    }

    /// Builds a clause from an iterator of literals.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause(literals.into_iter().collect())
    }

    /// Whether the clause contains both polarities of some atom, and so is trivially true.
    pub fn is_tautology(&self) -> bool {
        self.0
            .iter()
            .any(|literal| self.0.contains(&literal.negate()))
    }

    /// Whether the clause is the empty clause (⊥).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of literals in the clause.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An iterator over the literals of the clause, in their canonical (sorted) order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter()
    }

    /// Whether `literal` occurs in the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.0.contains(literal)
    }

    /// Resolves `self` against `other` on every shared pivot, returning one resolvent per
    /// pivot. A pivot is a literal of `self` whose negation occurs in `other`.
    ///
    /// Resolvents which are tautologies are filtered out here, matching the contract that the
    /// resolution loop never has to re-examine a trivially true clause.
    pub fn resolvents_with(&self, other: &Clause) -> Vec<Clause> {
        let mut resolvents = Vec::new();
        for pivot in self.0.iter() {
            let negated = pivot.negate();
            if other.0.contains(&negated) {
                let mut merged: BTreeSet<Literal> = self.0.clone();
                merged.remove(pivot);
                for literal in other.0.iter() {
                    if literal != &negated {
                        merged.insert(literal.clone());
                    }
                }
                let resolvent = Clause(merged);
                if !resolvent.is_tautology() {
                    resolvents.push(resolvent);
                }
            }
        }
        resolvents
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "⊥");
        }
        let rendered = self
            .0
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ∨ ");
        write!(f, "({rendered})")
    }
}

/// A conjunction of clauses: the interpretation of a CNF formula.
///
/// Kept as a [BTreeSet] so that the set of clauses reachable from a belief base is deduped and
/// ordered deterministically, which in turn makes the resolution prover's fixed-point check
/// (`no pair produces a clause not already present`) a simple set-membership test.
pub type Cnf = BTreeSet<Clause>;
