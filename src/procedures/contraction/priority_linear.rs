//! Priority-sorted linear contraction: a fast alternative to partial meet, offered for callers
//! willing to trade the partial-meet postulates' finer guarantees for a single linear pass.
//!
//! Beliefs are dropped one at a time, lowest priority first (ties broken by earliest insertion),
//! stopping as soon as the base no longer definitely entails `φ`.

use crate::{
    base::BeliefBase,
    cnf::Normalizer,
    config::Config,
    misc::log::targets,
    reports::Entailment,
    resolution::Prover,
    structures::formula::Formula,
    types::err::OverbudgetError,
};

/// Contracts `base` by `phi` in place, removing beliefs lowest-priority-first until entailment
/// is no longer confirmed `True`.
pub fn contract(
    base: &mut BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<(), OverbudgetError> {
    if super::super::entails(base, phi, normalizer, prover, config)? != Entailment::True {
        return Ok(());
    }

    // A tautological `phi` is entailed even by the empty base, so no amount of removal would
    // ever stop the loop early; match partial meet's convention at this degenerate boundary and
    // leave the base unchanged instead of stripping every belief for nothing.
    let empty = BeliefBase::new();
    if super::super::entails(&empty, phi, normalizer, prover, config)? == Entailment::True {
        log::debug!(
            target: targets::CONTRACTION,
            "phi is a tautology, leaving base unchanged"
        );
        return Ok(());
    }

    let mut order = base.list();
    let priorities: Vec<i64> = order.iter().map(|t| base.priority_of(t)).collect();
    let mut indices: Vec<usize> = (0..order.len()).collect();
    indices.sort_by(|&a, &b| priorities[a].cmp(&priorities[b]).then(a.cmp(&b)));
    order = indices.into_iter().map(|i| order[i].clone()).collect();

    for text in order {
        base.remove(&text);
        log::debug!(target: targets::CONTRACTION, "linear removal: '{text}'");
        if super::super::entails(base, phi, normalizer, prover, config)? != Entailment::True {
            break;
        }
    }

    Ok(())
}
