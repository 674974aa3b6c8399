/*!
Conjunctive normal form.

Converting a formula to clauses is four pure rewrites applied in sequence:

1. [eliminate_iff](Normalizer::eliminate_iff) --- `A ↔ B ≡ (¬A ∨ B) ∧ (¬B ∨ A)`.
2. [eliminate_implies](Normalizer::eliminate_implies) --- `A → B ≡ ¬A ∨ B`.
3. [nnf](Normalizer::nnf) --- push `¬` to the atoms via De Morgan, collapsing `¬¬A` to `A`.
4. [distribute](Normalizer::distribute) --- rewrite `∨` over `∧` until the tree is a
   conjunction of disjunctions of literals.

Each stage is memoized by [Formula] identity on a [Normalizer], so that a formula shared
between several beliefs (or revisited across several entailment queries) is only rewritten
once per stage. Every stage also consumes a chunk of the [Budget], so a pathological formula
fails with [OverbudgetError] rather than hanging.
*/

mod budget;
pub use budget::Budget;

use std::collections::{BTreeSet, HashMap};

use crate::{
    misc::log::targets,
    structures::{
        atom::FALSE_ATOM,
        clause::{Clause, Cnf},
        formula::Formula,
        literal::Literal,
    },
    types::err::OverbudgetError,
};

/// Per-engine memo tables for the four normalization stages, plus the final clause extraction.
#[derive(Default)]
pub struct Normalizer {
    iff_cache: HashMap<Formula, Formula>,
    implies_cache: HashMap<Formula, Formula>,
    nnf_cache: HashMap<Formula, Formula>,
    distribute_cache: HashMap<Formula, Formula>,
}

impl Normalizer {
    /// Builds an empty normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every memo table. Correctness does not depend on this ever being called.
    pub fn clear_cache(&mut self) {
        self.iff_cache.clear();
        self.implies_cache.clear();
        self.nnf_cache.clear();
        self.distribute_cache.clear();
    }

    /// Runs the full normalization pipeline, returning the resulting clause set.
    pub fn to_cnf(&mut self, formula: &Formula, budget: &Budget) -> Result<Cnf, OverbudgetError> {
        let no_iff = self.eliminate_iff(formula, budget)?;
        let no_implies = self.eliminate_implies(&no_iff, budget)?;
        let nnf = self.nnf(&no_implies, budget)?;
        let distributed = self.distribute(&nnf, budget)?;
        log::trace!(target: targets::NORMALIZER, "'{formula}' normalized to '{distributed}'");
        Ok(extract_clauses(&distributed))
    }

    /// Eliminates `↔` via `A ↔ B ≡ (¬A ∨ B) ∧ (¬B ∨ A)`.
    fn eliminate_iff(&mut self, formula: &Formula, budget: &Budget) -> Result<Formula, OverbudgetError> {
        budget.check(formula)?;
        if let Some(cached) = self.iff_cache.get(formula) {
            return Ok(cached.clone());
        }

        let result = match formula {
            Formula::Atom(_) => formula.clone(),
            Formula::Not(inner) => Formula::not(self.eliminate_iff(inner, budget)?),
            Formula::And(l, r) => {
                Formula::and(self.eliminate_iff(l, budget)?, self.eliminate_iff(r, budget)?)
            }
            Formula::Or(l, r) => {
                Formula::or(self.eliminate_iff(l, budget)?, self.eliminate_iff(r, budget)?)
            }
            Formula::Implies(l, r) => {
                Formula::implies(self.eliminate_iff(l, budget)?, self.eliminate_iff(r, budget)?)
            }
            Formula::Iff(l, r) => {
                let el = self.eliminate_iff(l, budget)?;
                let er = self.eliminate_iff(r, budget)?;
                Formula::and(
                    Formula::or(Formula::not(el.clone()), er.clone()),
                    Formula::or(Formula::not(er), el),
                )
            }
        };

        self.iff_cache.insert(formula.clone(), result.clone());
        Ok(result)
    }

    /// Eliminates `→` via `A → B ≡ ¬A ∨ B`.
    ///
    /// Also handles a stray `↔` defensively with the same rewrite as
    /// [eliminate_iff](Self::eliminate_iff), so this stage is total even if called out of
    /// pipeline order.
    fn eliminate_implies(
        &mut self,
        formula: &Formula,
        budget: &Budget,
    ) -> Result<Formula, OverbudgetError> {
        budget.check(formula)?;
        if let Some(cached) = self.implies_cache.get(formula) {
            return Ok(cached.clone());
        }

        let result = match formula {
            Formula::Atom(_) => formula.clone(),
            Formula::Not(inner) => Formula::not(self.eliminate_implies(inner, budget)?),
            Formula::And(l, r) => Formula::and(
                self.eliminate_implies(l, budget)?,
                self.eliminate_implies(r, budget)?,
            ),
            Formula::Or(l, r) => Formula::or(
                self.eliminate_implies(l, budget)?,
                self.eliminate_implies(r, budget)?,
            ),
            Formula::Implies(l, r) => {
                let el = self.eliminate_implies(l, budget)?;
                let er = self.eliminate_implies(r, budget)?;
                Formula::or(Formula::not(el), er)
            }
            Formula::Iff(l, r) => {
                let el = self.eliminate_implies(l, budget)?;
                let er = self.eliminate_implies(r, budget)?;
                Formula::and(
                    Formula::or(Formula::not(el.clone()), er.clone()),
                    Formula::or(Formula::not(er), el),
                )
            }
        };

        self.implies_cache.insert(formula.clone(), result.clone());
        Ok(result)
    }

    /// Pushes negation to the atoms via De Morgan, collapsing `¬¬A` to `A`.
    fn nnf(&mut self, formula: &Formula, budget: &Budget) -> Result<Formula, OverbudgetError> {
        budget.check(formula)?;
        if let Some(cached) = self.nnf_cache.get(formula) {
            return Ok(cached.clone());
        }

        let result = match formula {
            Formula::Atom(_) => formula.clone(),
            Formula::And(l, r) => Formula::and(self.nnf(l, budget)?, self.nnf(r, budget)?),
            Formula::Or(l, r) => Formula::or(self.nnf(l, budget)?, self.nnf(r, budget)?),
            // Only reachable if this stage is ever invoked on a formula which still has
            // implications/biconditionals in it; handled the same way eliminate_implies would.
            Formula::Implies(l, r) => {
                Formula::or(self.nnf(&Formula::not(l.as_ref().clone()), budget)?, self.nnf(r, budget)?)
            }
            Formula::Iff(l, r) => {
                let not_l = Formula::not(l.as_ref().clone());
                let not_r = Formula::not(r.as_ref().clone());
                Formula::or(
                    Formula::and(self.nnf(l, budget)?, self.nnf(&not_r, budget)?),
                    Formula::and(self.nnf(&not_l, budget)?, self.nnf(r, budget)?),
                )
            }
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(_) => formula.clone(),
                Formula::Not(doubly_negated) => self.nnf(doubly_negated, budget)?,
                Formula::And(l, r) => Formula::or(
                    self.nnf(&Formula::not(l.as_ref().clone()), budget)?,
                    self.nnf(&Formula::not(r.as_ref().clone()), budget)?,
                ),
                Formula::Or(l, r) => Formula::and(
                    self.nnf(&Formula::not(l.as_ref().clone()), budget)?,
                    self.nnf(&Formula::not(r.as_ref().clone()), budget)?,
                ),
                Formula::Implies(l, r) => Formula::and(
                    self.nnf(l, budget)?,
                    self.nnf(&Formula::not(r.as_ref().clone()), budget)?,
                ),
                Formula::Iff(l, r) => {
                    let not_l = Formula::not(l.as_ref().clone());
                    let not_r = Formula::not(r.as_ref().clone());
                    Formula::or(
                        Formula::and(self.nnf(l, budget)?, self.nnf(r, budget)?),
                        Formula::and(self.nnf(&not_l, budget)?, self.nnf(&not_r, budget)?),
                    )
                }
            },
        };

        self.nnf_cache.insert(formula.clone(), result.clone());
        Ok(result)
    }

    /// Distributes `∨` over `∧`, assuming `formula` is already in negation normal form.
    fn distribute(&mut self, formula: &Formula, budget: &Budget) -> Result<Formula, OverbudgetError> {
        budget.check(formula)?;
        if let Some(cached) = self.distribute_cache.get(formula) {
            return Ok(cached.clone());
        }

        let result = match formula {
            Formula::Atom(_) | Formula::Not(_) => formula.clone(),
            Formula::And(l, r) => Formula::and(self.distribute(l, budget)?, self.distribute(r, budget)?),
            Formula::Or(l, r) => {
                let dl = self.distribute(l, budget)?;
                let dr = self.distribute(r, budget)?;
                distribute_or(dl, dr, budget)?
            }
            // Not reachable from a well-formed NNF input; kept total rather than partial.
            Formula::Implies(l, r) => Formula::implies(self.distribute(l, budget)?, self.distribute(r, budget)?),
            Formula::Iff(l, r) => Formula::iff(self.distribute(l, budget)?, self.distribute(r, budget)?),
        };

        self.distribute_cache.insert(formula.clone(), result.clone());
        Ok(result)
    }
}

/// Rewrites `l ∨ r` into a conjunction of disjunctions, recursing whenever either side is
/// itself a conjunction: `(X ∧ Y) ∨ Z → (X ∨ Z) ∧ (Y ∨ Z)`, and symmetrically.
fn distribute_or(l: Formula, r: Formula, budget: &Budget) -> Result<Formula, OverbudgetError> {
    budget.check(&l)?;
    match (&l, &r) {
        (Formula::And(a, b), _) => {
            let left = distribute_or(a.as_ref().clone(), r.clone(), budget)?;
            let right = distribute_or(b.as_ref().clone(), r, budget)?;
            Ok(Formula::and(left, right))
        }
        (_, Formula::And(a, b)) => {
            let left = distribute_or(l.clone(), a.as_ref().clone(), budget)?;
            let right = distribute_or(l, b.as_ref().clone(), budget)?;
            Ok(Formula::and(left, right))
        }
        _ => Ok(Formula::or(l, r)),
    }
}

/// Flattens a fully-distributed NNF formula into its set of clauses.
///
/// The distinguished atom [FALSE_ATOM] is recognised here rather than treated as an ordinary
/// propositional variable: a positive occurrence contributes nothing to its clause (⊥ is the
/// identity of ∨), and a negated occurrence makes its clause a tautology, which is dropped.
/// A formula which is exactly `False` therefore extracts to the empty clause, as required.
fn extract_clauses(formula: &Formula) -> Cnf {
    let mut conjuncts = Vec::new();
    flatten_and(formula, &mut conjuncts);

    let mut cnf = Cnf::new();
    for conjunct in conjuncts {
        let mut disjuncts = Vec::new();
        flatten_or(&conjunct, &mut disjuncts);

        let mut literals: BTreeSet<Literal> = BTreeSet::new();
        let mut tautological = false;

        for disjunct in disjuncts {
            match disjunct {
                Formula::Atom(name) if &*name == FALSE_ATOM => {}
                Formula::Atom(name) => {
                    literals.insert(Literal::new(name, true));
                }
                Formula::Not(inner) => match inner.as_ref() {
                    Formula::Atom(name) if &**name == FALSE_ATOM => {
                        tautological = true;
                        break;
                    }
                    Formula::Atom(name) => {
                        literals.insert(Literal::new(name.clone(), false));
                    }
                    other => {
                        log::warn!(
                            target: targets::NORMALIZER,
                            "non-literal '{other}' survived distribution under negation"
                        );
                    }
                },
                other => {
                    log::warn!(
                        target: targets::NORMALIZER,
                        "non-literal '{other}' survived distribution"
                    );
                }
            }
        }

        if tautological {
            continue;
        }

        let clause = Clause::from_literals(literals);
        if !clause.is_tautology() {
            cnf.insert(clause);
        }
    }

    cnf
}

fn flatten_and(formula: &Formula, out: &mut Vec<Formula>) {
    match formula {
        Formula::And(l, r) => {
            flatten_and(l, out);
            flatten_and(r, out);
        }
        other => out.push(other.clone()),
    }
}

fn flatten_or(formula: &Formula, out: &mut Vec<Formula>) {
    match formula {
        Formula::Or(l, r) => {
            flatten_or(l, out);
            flatten_or(r, out);
        }
        other => out.push(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn budget() -> Budget {
        Budget::from_config(&Config::default())
    }

    #[test]
    fn eliminate_iff_is_a_no_op_below_a_biconditional() {
        let formula = Formula::and(Formula::atom("P"), Formula::atom("Q"));
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.eliminate_iff(&formula, &budget()).unwrap(), formula);
    }

    #[test]
    fn eliminate_iff_rewrites_into_a_conjunction_of_two_disjunctions() {
        let formula = Formula::iff(Formula::atom("P"), Formula::atom("Q"));
        let mut normalizer = Normalizer::new();
        let expected = Formula::and(
            Formula::or(Formula::not(Formula::atom("P")), Formula::atom("Q")),
            Formula::or(Formula::not(Formula::atom("Q")), Formula::atom("P")),
        );
        assert_eq!(normalizer.eliminate_iff(&formula, &budget()).unwrap(), expected);
    }

    #[test]
    fn nnf_collapses_a_double_negation() {
        let formula = Formula::not(Formula::not(Formula::atom("P")));
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.nnf(&formula, &budget()).unwrap(), Formula::atom("P"));
    }

    #[test]
    fn nnf_pushes_negation_through_a_conjunction_via_de_morgan() {
        let formula = Formula::not(Formula::and(Formula::atom("P"), Formula::atom("Q")));
        let mut normalizer = Normalizer::new();
        let expected = Formula::or(Formula::not(Formula::atom("P")), Formula::not(Formula::atom("Q")));
        assert_eq!(normalizer.nnf(&formula, &budget()).unwrap(), expected);
    }

    #[test]
    fn distribute_rewrites_or_over_and() {
        let formula = Formula::or(
            Formula::and(Formula::atom("P"), Formula::atom("Q")),
            Formula::atom("R"),
        );
        let mut normalizer = Normalizer::new();
        let expected = Formula::and(
            Formula::or(Formula::atom("P"), Formula::atom("R")),
            Formula::or(Formula::atom("Q"), Formula::atom("R")),
        );
        assert_eq!(normalizer.distribute(&formula, &budget()).unwrap(), expected);
    }

    #[test]
    fn extract_clauses_drops_a_tautological_clause() {
        let formula = Formula::or(Formula::atom("P"), Formula::not(Formula::atom("P")));
        assert!(extract_clauses(&formula).is_empty());
    }

    #[test]
    fn memoization_does_not_change_the_result_of_a_repeated_call() {
        let formula = Formula::iff(Formula::atom("P"), Formula::atom("Q"));
        let mut normalizer = Normalizer::new();
        let first = normalizer.eliminate_iff(&formula, &budget()).unwrap();
        let second = normalizer.eliminate_iff(&formula, &budget()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_node_budget_fails_immediately() {
        let formula = Formula::atom("P");
        let starved = Budget::from_config(&{
            let mut config = Config::default();
            config.normalizer_node_cap.value = 0;
            config
        });
        let mut normalizer = Normalizer::new();
        assert!(normalizer.eliminate_iff(&formula, &starved).is_err());
    }
}
