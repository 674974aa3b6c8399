/*!
Contraction: `B ÷ φ`, removing just enough of `B` that `φ` is no longer entailed.

Two algorithms sit behind the same contract:

- [partial_meet] --- the default. Below
  [remainder_search_cap](crate::config::Config::remainder_search_cap) beliefs it enumerates
  every φ-remainder (see [remainder]) and applies a [Selector] to turn the family into a single
  contracted base; above the cap it falls back to the [kernel] surrogate automatically.
- [linear] --- a single priority-sorted pass (see [priority_linear]), offered for callers who
  explicitly want a fast, non-partial-meet contraction.
*/

mod kernel;
mod priority_linear;
mod remainder;

use std::collections::HashSet;

use crate::{
    base::BeliefBase,
    cnf::Normalizer,
    config::{Config, Selector, TieBreak},
    misc::log::targets,
    resolution::Prover,
    structures::formula::Formula,
    types::err::OverbudgetError,
};

/// Contracts `base` by `phi` in place using partial meet (or the kernel surrogate above the
/// configured size cap), selecting among remainders with `selector`.
///
/// If `phi` is a tautology, no subset of `base` --- not even the empty one --- fails to entail
/// it, so there is no remainder to select from; by convention the base is then left unchanged,
/// matching the usual reading of the vacuity postulate at this degenerate boundary.
pub fn partial_meet(
    base: &mut BeliefBase,
    phi: &Formula,
    selector: Selector,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<(), OverbudgetError> {
    if base.len() > config.remainder_search_cap.value {
        log::debug!(
            target: targets::CONTRACTION,
            "base exceeds remainder_search_cap, using kernel surrogate"
        );
        return kernel::contract(base, phi, normalizer, prover, config);
    }

    let remainders = remainder::generate_remainders(base, phi, normalizer, prover, config)?;
    if remainders.is_empty() {
        log::debug!(target: targets::CONTRACTION, "no remainder exists, leaving base unchanged");
        return Ok(());
    }

    let kept: HashSet<String> = select(base, &remainders, selector, config.tie_break);
    base.retain_only(&kept);
    Ok(())
}

/// Contracts `base` by `phi` in place via a single priority-sorted linear pass.
pub fn linear(
    base: &mut BeliefBase,
    phi: &Formula,
    normalizer: &mut Normalizer,
    prover: &mut Prover,
    config: &Config,
) -> Result<(), OverbudgetError> {
    priority_linear::contract(base, phi, normalizer, prover, config)
}

/// Turns a family of remainders into the single set of texts to keep, per `selector`.
fn select(
    base: &BeliefBase,
    remainders: &[Vec<String>],
    selector: Selector,
    tie_break: TieBreak,
) -> HashSet<String> {
    match selector {
        Selector::All => intersect(remainders),
        Selector::Max => {
            let best_priority = remainders
                .iter()
                .map(|r| total_priority(base, r))
                .max()
                .expect("remainders is non-empty");
            let maximal: Vec<&Vec<String>> = remainders
                .iter()
                .filter(|r| total_priority(base, r) == best_priority)
                .collect();
            intersect_refs(&maximal)
        }
        Selector::Min => {
            let best = remainders
                .iter()
                .max_by(|a, b| compare_remainders(base, a, b, tie_break))
                .expect("remainders is non-empty");
            best.iter().cloned().collect()
        }
    }
}

fn intersect(remainders: &[Vec<String>]) -> HashSet<String> {
    let refs: Vec<&Vec<String>> = remainders.iter().collect();
    intersect_refs(&refs)
}

fn intersect_refs(remainders: &[&Vec<String>]) -> HashSet<String> {
    let mut iter = remainders.iter();
    let Some(first) = iter.next() else {
        return HashSet::new();
    };
    let mut acc: HashSet<String> = first.iter().cloned().collect();
    for remainder in iter {
        let this: HashSet<String> = remainder.iter().cloned().collect();
        acc.retain(|text| this.contains(text));
    }
    acc
}

fn total_priority(base: &BeliefBase, remainder: &[String]) -> i64 {
    remainder.iter().map(|text| base.priority_of(text)).sum()
}

/// Orders remainders so that `compare_remainders(a, b) == Greater` means `a` is preferred over
/// `b` by [Selector::Min]: larger cardinality (minimal change to the base) wins first, with ties
/// broken by `tie_break`.
fn compare_remainders(
    base: &BeliefBase,
    a: &[String],
    b: &[String],
    tie_break: TieBreak,
) -> std::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| match tie_break {
        TieBreak::Priority => total_priority(base, a).cmp(&total_priority(base, b)),
        TieBreak::Lexicographic => {
            let mut sorted_a = a.to_vec();
            sorted_a.sort();
            let mut sorted_b = b.to_vec();
            sorted_b.sort();
            // Lexicographically *smaller* joined text is preferred, so reverse the comparison
            // to fit this function's "greater is preferred" contract.
            sorted_b.join("\u{1}").cmp(&sorted_a.join("\u{1}"))
        }
        TieBreak::InsertionOrder => {
            let earliest = |remainder: &[String]| -> Vec<usize> {
                let mut indices: Vec<usize> = remainder
                    .iter()
                    .filter_map(|text| base.list().iter().position(|t| t == text))
                    .collect();
                indices.sort_unstable();
                indices
            };
            // The remainder whose kept beliefs are inserted earliest is preferred, i.e. the
            // lexicographically smaller index sequence wins, so again reverse the comparison.
            earliest(b).cmp(&earliest(a))
        }
    })
}
