//! Full remainder enumeration for partial-meet contraction.
//!
//! Entailment is monotone under expansion (see [entails](crate::procedures::entails)): if a
//! subset of the base entails `φ`, every superset of it does too, so once a subset is known to
//! entail `φ` there is no point checking anything above it, only what remains once one more
//! belief is stripped away. Searching breadth-first from the full base downward and only
//! descending from sets that still entail `φ` therefore visits exactly the subsets needed to
//! find every maximal non-entailing set --- every φ-remainder.

use std::collections::HashSet;

use crate::{
    base::{Belief, BeliefBase},
    cnf::Normalizer,
    config::Config,
    reports::Entailment,
    resolution::Prover,
    structures::formula::Formula,
    types::err::OverbudgetError,
};

/// Enumerates every φ-remainder of `base`: every subset which does not entail `phi` but whose
/// every immediate superset (within `base`) does.
///
/// A subset is visited as soon as *any* of its immediate supersets entails `phi`, since that is
/// the only way the search descends there at all --- but that is not enough to call it a
/// remainder: a sibling superset that does *not* entail `phi` would make this subset a proper
/// subset of a non-entailing set, i.e. not maximal. So every non-entailing subset visited during
/// the search is only a remainder *candidate*; the final pass below keeps just the
/// inclusion-maximal candidates, which are the true remainders.
///
/// An entailment check that cannot be confirmed `False` (because it came back `Unknown`, having
/// exhausted the prover's budget) is treated the same as `True` for the purposes of this search:
/// the subset is not trusted as a remainder, and the search instead continues below it. This
/// keeps contraction sound at the cost of occasionally over-contracting under a tight budget.
pub fn generate_remainders(
    base: &BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<Vec<Vec<String>>, OverbudgetError> {
    let full: Vec<String> = base.list();

    let mut frontier: Vec<Vec<String>> = vec![full];
    let mut candidates: Vec<Vec<String>> = Vec::new();

    while !frontier.is_empty() {
        let mut next_frontier: HashSet<Vec<String>> = HashSet::new();

        for subset in frontier {
            let verdict = entails_subset(base, &subset, phi, normalizer, prover, config)?;
            if verdict == Entailment::False {
                candidates.push(subset);
                continue;
            }

            for i in 0..subset.len() {
                let mut child = subset.clone();
                child.remove(i);
                next_frontier.insert(child);
            }
        }

        frontier = next_frontier.into_iter().collect();
    }

    Ok(keep_maximal(candidates))
}

/// Keeps only the inclusion-maximal members of `candidates`, dropping any candidate that is a
/// proper subset of another (as a set of belief texts, ignoring order).
fn keep_maximal(candidates: Vec<Vec<String>>) -> Vec<Vec<String>> {
    candidates
        .iter()
        .filter(|candidate| {
            !candidates
                .iter()
                .any(|other| other.len() > candidate.len() && is_subset(candidate, other))
        })
        .cloned()
        .collect()
}

/// Whether every element of `a` also occurs in `b`.
fn is_subset(a: &[String], b: &[String]) -> bool {
    let b_set: HashSet<&String> = b.iter().collect();
    a.iter().all(|text| b_set.contains(text))
}

/// Checks `subset ⊨ phi` by building a throwaway belief base holding exactly `subset`'s members.
fn entails_subset(
    base: &BeliefBase,
    subset: &[String],
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<Entailment, OverbudgetError> {
    let mut scratch = BeliefBase::new();
    for text in subset {
        if let Some(belief) = base.get(text) {
            scratch.add(Belief::new(belief.text().to_string(), belief.ast().clone()));
        }
    }
    super::super::entails(&scratch, phi, normalizer, prover, config)
}
