//! Expansion: `B + φ`, unconditional insertion.

use crate::{
    base::{Belief, BeliefBase},
    misc::log::targets,
    structures::formula::Formula,
};

/// Adds `phi` to `base` under `text` if not already present. Never checks consistency: a
/// contradictory belief is simply added, exactly as AGM expansion requires.
pub fn expand(base: &mut BeliefBase, text: String, phi: Formula) -> bool {
    let inserted = base.add(Belief::new(text.clone(), phi));
    if inserted {
        log::debug!(target: targets::AGENT, "expanded with '{text}'");
    }
    inserted
}
