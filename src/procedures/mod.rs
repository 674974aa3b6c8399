//! The AGM operations proper, built on top of [base](crate::base) and [resolution](crate::resolution).

pub mod contraction;
pub mod expansion;
pub mod revision;

use std::collections::HashMap;

use crate::{
    base::BeliefBase,
    cnf::{Budget, Normalizer},
    config::Config,
    reports::Entailment,
    resolution::{Prover, ProverBudget},
    structures::{atom::FALSE_ATOM, clause::Cnf, formula::Formula},
    types::err::OverbudgetError,
};

/// Decides `base ⊨ phi`, normalizing `phi`'s negation and every belief of `base` and handing
/// the union to the resolution prover.
///
/// This is the one routine every procedure in this module funnels through, so the canonical
/// keys used for prover caching and the budget-exhaustion semantics are defined once, here.
pub(crate) fn entails(
    base: &BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<Entailment, OverbudgetError> {
    let cnf_budget = Budget::from_config(config);
    let negated = phi.negated();
    let mut combined: Cnf = normalizer.to_cnf(&negated, &cnf_budget)?;
    let query_key = canonical_cnf_key(&combined);

    let mut base_texts: Vec<&str> = Vec::with_capacity(base.len());
    for belief in base.iter() {
        let belief_cnf = belief.cnf(normalizer, config)?;
        combined.extend(belief_cnf);
        base_texts.push(belief.text());
    }
    base_texts.sort_unstable();
    let base_key = base_texts.join("\u{1}");

    let prover_budget = ProverBudget::from_config(config);
    Ok(prover.entails(base_key, query_key, combined, &prover_budget))
}

/// Whether `base` is consistent, derived from `entails(base, False)` without any special-cased
/// resolution logic: negating the distinguished atom `False` normalizes to a tautological
/// clause that contributes nothing, so the query degenerates to "does `base` alone refute to
/// the empty clause", exactly the definition of inconsistency.
pub(crate) fn consistent(
    base: &BeliefBase,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<Entailment, OverbudgetError> {
    match entails(base, &Formula::atom(FALSE_ATOM), normalizer, prover, config)? {
        Entailment::True => Ok(Entailment::False),
        Entailment::False => Ok(Entailment::True),
        Entailment::Unknown => Ok(Entailment::Unknown),
    }
}

fn canonical_cnf_key(cnf: &Cnf) -> String {
    cnf.iter()
        .map(|clause| clause.to_string())
        .collect::<Vec<_>>()
        .join("\u{1}")
}

/// A priority map keyed by belief text, as accepted by
/// [set_priorities](crate::context::Agent::set_priorities).
pub type Priorities = HashMap<String, i64>;
