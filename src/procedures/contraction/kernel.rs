//! Kernel-contraction surrogate, used above [remainder_search_cap](crate::config::Config::remainder_search_cap)
//! where full remainder enumeration would be too expensive.
//!
//! Rather than enumerate every maximal non-entailing subset, this repeatedly finds *one*
//! φ-kernel --- a subset minimal (by inclusion) among those entailing `φ` --- and removes its
//! lowest-priority member, the belief judged least worth keeping. Doing this until the whole
//! base no longer entails `φ` guarantees success without ever enumerating the power set.

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

/// Contracts `base` by `phi` in place using repeated kernel removal.
pub fn contract(
    base: &mut BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<(), OverbudgetError> {
    loop {
        if super::super::entails(base, phi, normalizer, prover, config)? != Entailment::True {
            return Ok(());
        }

        let kernel = find_kernel(base, phi, normalizer, prover, config)?;
        let weakest = kernel
            .iter()
            .min_by(|a, b| {
                base.priority_of(a)
                    .cmp(&base.priority_of(b))
                    .then_with(|| insertion_index(base, a).cmp(&insertion_index(base, b)))
            })
            .expect("a kernel is never empty once the whole base entails phi")
            .clone();

        log::debug!(target: targets::CONTRACTION, "kernel removal: '{weakest}'");
        base.remove(&weakest);
    }
}

/// Finds one φ-kernel of `base`: build it up in insertion order until it entails `phi`, then
/// shrink it by removing any member whose absence leaves entailment intact, until no more can
/// be removed. The result is minimal by inclusion, though not necessarily of minimum size.
fn find_kernel(
    base: &BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<Vec<String>, OverbudgetError> {
    let mut kernel: Vec<String> = Vec::new();
    for text in base.list() {
        kernel.push(text);
        if entails_subset(base, &kernel, phi, normalizer, prover, config)? == Entailment::True {
            break;
        }
    }

    let mut index = 0;
    while index < kernel.len() {
        let mut candidate = kernel.clone();
        candidate.remove(index);
        if !candidate.is_empty()
            && entails_subset(base, &candidate, phi, normalizer, prover, config)? == Entailment::True
        {
            kernel = candidate;
        } else {
            index += 1;
        }
    }

    Ok(kernel)
}

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
            scratch.add(crate::base::Belief::new(
                belief.text().to_string(),
                belief.ast().clone(),
            ));
        }
    }
    super::super::entails(&scratch, phi, normalizer, prover, config)
}

fn insertion_index(base: &BeliefBase, text: &str) -> usize {
    base.list().iter().position(|t| t == text).unwrap_or(usize::MAX)
}
