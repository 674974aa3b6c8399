/*!
The resolution-refutation prover.

`B ⊨ φ` is decided by refutation: normalize `¬φ` and every belief of `B` to clauses, union the
results, and saturate the set under resolution looking for the empty clause. Deriving it means
`B ∧ ¬φ` is unsatisfiable, i.e. `B ⊨ φ`; reaching a fixed point with no empty clause means
`B ⊭ φ`. Running out of budget before either happens reports [Entailment::Unknown] --- a value,
never an error (see [cnf](crate::cnf) for the normalizer's own, harder, budget).

Ordered pairs of clauses are resolved at most once per call: `(i, j)` with `i < j` is tried via
[Clause::resolvents_with], which alone finds every complementary atom between the two clauses,
so the symmetric `(j, i)` attempt would only ever rediscover the same resolvents.
*/

mod budget;
pub use budget::ProverBudget;

use std::collections::{HashMap, HashSet};

use crate::{
    misc::log::targets,
    reports::Entailment,
    structures::clause::{Clause, Cnf},
};

/// Caches entailment results keyed by the canonical forms of the base and the query, so that
/// the same question asked twice (a common pattern during partial-meet contraction) is only
/// resolved once.
#[derive(Default)]
pub struct Prover {
    cache: HashMap<(String, String), Entailment>,
}

impl Prover {
    /// Builds a prover with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every cached result. Correctness does not depend on this ever being called,
    /// but a `clear()` of the owning belief base should call it so stale answers about a
    /// since-emptied base are never reused.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Decides entailment for the clause set `clauses` (already the union of the base's CNF
    /// and the query's negated CNF), caching the result under `(base_key, query_key)`.
    pub fn entails(
        &mut self,
        base_key: String,
        query_key: String,
        clauses: Cnf,
        budget: &ProverBudget,
    ) -> Entailment {
        let cache_key = (base_key, query_key);
        if let Some(cached) = self.cache.get(&cache_key) {
            log::trace!(target: targets::RESOLUTION, "cache hit for query against base");
            return *cached;
        }

        let result = saturate(clauses, budget);
        if result != Entailment::Unknown {
            self.cache.insert(cache_key, result);
        }
        result
    }
}

/// Saturates `clauses` under resolution, returning as soon as the empty clause is derived or a
/// fixed point is reached, and degrading to [Entailment::Unknown] if the budget runs out first.
fn saturate(clauses: Cnf, budget: &ProverBudget) -> Entailment {
    let mut clauses: Vec<Clause> = clauses.into_iter().collect();
    let mut seen: HashSet<Clause> = clauses.iter().cloned().collect();
    let mut tried_pairs: HashSet<(usize, usize)> = HashSet::new();

    if seen.contains(&Clause::empty()) {
        return Entailment::True;
    }

    for _iteration in 0..budget.max_iterations {
        if budget.expired() {
            log::debug!(target: targets::RESOLUTION, "prover timed out");
            return Entailment::Unknown;
        }
        if seen.len() > budget.max_clauses {
            log::debug!(target: targets::RESOLUTION, "prover exceeded its clause cap");
            return Entailment::Unknown;
        }

        let frontier_len = clauses.len();
        let mut added_any = false;

        for i in 0..frontier_len {
            if budget.expired() {
                return Entailment::Unknown;
            }

            for j in (i + 1)..frontier_len {
                if !tried_pairs.insert((i, j)) {
                    continue;
                }

                for resolvent in clauses[i].resolvents_with(&clauses[j]) {
                    if resolvent.is_empty() {
                        return Entailment::True;
                    }
                    if seen.insert(resolvent.clone()) {
                        clauses.push(resolvent);
                        added_any = true;
                    }
                }

                if seen.len() > budget.max_clauses {
                    log::debug!(target: targets::RESOLUTION, "prover exceeded its clause cap");
                    return Entailment::Unknown;
                }
            }
        }

        if !added_any {
            return Entailment::False;
        }
    }

    log::debug!(target: targets::RESOLUTION, "prover exceeded its iteration cap");
    Entailment::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::literal::Literal};

    fn unit(atom: &str, polarity: bool) -> Clause {
        Clause::from_literals([Literal::new(atom.into(), polarity)])
    }

    fn pair(a: &str, a_pol: bool, b: &str, b_pol: bool) -> Clause {
        Clause::from_literals([Literal::new(a.into(), a_pol), Literal::new(b.into(), b_pol)])
    }

    fn default_budget() -> ProverBudget {
        ProverBudget::from_config(&Config::default())
    }

    #[test]
    fn complementary_unit_clauses_refute_to_the_empty_clause() {
        let clauses: Cnf = [unit("P", true), unit("P", false)].into_iter().collect();
        assert_eq!(saturate(clauses, &default_budget()), Entailment::True);
    }

    #[test]
    fn non_contradictory_clauses_reach_a_fixed_point_without_refutation() {
        let clauses: Cnf = [unit("P", true), unit("Q", true)].into_iter().collect();
        assert_eq!(saturate(clauses, &default_budget()), Entailment::False);
    }

    #[test]
    fn resolving_a_two_literal_clause_against_its_complement_derives_the_unit() {
        // P ∨ Q, ¬P, ¬Q saturates to the empty clause via two resolution steps.
        let clauses: Cnf = [pair("P", true, "Q", true), unit("P", false), unit("Q", false)]
            .into_iter()
            .collect();
        assert_eq!(saturate(clauses, &default_budget()), Entailment::True);
    }

    #[test]
    fn empty_clause_already_present_is_detected_before_any_resolution_step() {
        let clauses: Cnf = [Clause::empty()].into_iter().collect();
        assert_eq!(saturate(clauses, &default_budget()), Entailment::True);
    }

    #[test]
    fn a_zero_iteration_cap_degrades_an_otherwise_provable_query_to_unknown() {
        let clauses: Cnf = [pair("P", true, "Q", true), unit("P", false), unit("Q", false)]
            .into_iter()
            .collect();
        let mut config = Config::default();
        config.max_iterations.value = 0;
        let budget = ProverBudget::from_config(&config);
        assert_eq!(saturate(clauses, &budget), Entailment::Unknown);
    }

    #[test]
    fn prover_cache_returns_the_same_verdict_on_a_repeated_key() {
        let mut prover = Prover::new();
        let clauses: Cnf = [unit("P", true), unit("P", false)].into_iter().collect();
        let first = prover.entails("base".into(), "query".into(), clauses.clone(), &default_budget());
        let second = prover.entails("base".into(), "query".into(), clauses, &default_budget());
        assert_eq!(first, second);
        assert_eq!(first, Entailment::True);
    }

    #[test]
    fn clearing_the_cache_does_not_change_a_subsequent_answer() {
        let mut prover = Prover::new();
        let clauses: Cnf = [unit("P", true), unit("P", false)].into_iter().collect();
        prover.entails("base".into(), "query".into(), clauses.clone(), &default_budget());
        prover.clear_cache();
        assert_eq!(
            prover.entails("base".into(), "query".into(), clauses, &default_budget()),
            Entailment::True
        );
    }
}
