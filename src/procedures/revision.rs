//! Revision via the Levi identity: `B * φ = (B ÷ ¬φ) + φ`.

use crate::{
    base::BeliefBase,
    cnf::Normalizer,
    config::{Config, Selector},
    misc::log::targets,
    resolution::Prover,
    structures::formula::Formula,
    types::err::OverbudgetError,
};

/// Revises `base` by `phi` in place: contract by `¬phi`, then expand by `phi`.
///
/// `phi.negated()` collapses a leading double negation rather than nesting `Not`, but no
/// further canonicalization of the negated formula is needed: the contraction it drives through
/// entails the same CNF-normalization path as any other query, so formulas differing only in
/// surface spelling of their negation are still handled identically.
pub fn revise(
    base: &mut BeliefBase,
    text: &str,
    phi: &Formula,
    selector: Selector,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<(), OverbudgetError> {
    let negated = phi.negated();
    log::debug!(target: targets::REVISION, "revising by '{text}', contracting by '{negated}' first");
    super::contraction::partial_meet(base, &negated, selector, normalizer, prover, config)?;
    super::expansion::expand(base, text.to_string(), phi.clone());
    Ok(())
}
