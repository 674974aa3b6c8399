/*!
The belief base: an ordered, deduplicated container of [Belief]s.

Insertion order is preserved and is significant: it is the order [list](BeliefBase::list)
reports beliefs in, and it is the tie-breaker of last resort when two beliefs are otherwise
indistinguishable (equal explicit priority, equal [TieBreak](crate::config::TieBreak) verdict).

Priorities are sparse: only beliefs given an explicit priority via
[set_priorities](BeliefBase::set_priorities) are recorded in `priorities`. Every other belief's
priority is derived on demand from its position, so that a base of `N` beliefs with no explicit
priorities ranks its earliest member `N` and its latest `1`, exactly as if priorities had been
assigned at insertion time and never revisited.
*/

mod belief;
pub use belief::Belief;

use std::collections::HashMap;

use crate::misc::log::targets;

/// An ordered, deduplicated collection of beliefs.
#[derive(Default)]
pub struct BeliefBase {
    order: Vec<String>,
    beliefs: HashMap<String, Belief>,
    priorities: HashMap<String, i64>,
}

impl BeliefBase {
    /// Builds an empty belief base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a belief if its text is not already present. Returns whether it was inserted.
    pub fn add(&mut self, belief: Belief) -> bool {
        if self.beliefs.contains_key(belief.text()) {
            log::trace!(target: targets::BASE, "'{}' already present, ignoring", belief.text());
            return false;
        }
        self.order.push(belief.text().to_string());
        self.beliefs.insert(belief.text().to_string(), belief);
        true
    }

    /// Removes the belief with the given text, if present. Silent if absent.
    pub fn remove(&mut self, text: &str) {
        if self.beliefs.remove(text).is_some() {
            self.order.retain(|t| t != text);
            self.priorities.remove(text);
        }
    }

    /// Discards every belief and every explicit priority.
    pub fn clear(&mut self) {
        self.order.clear();
        self.beliefs.clear();
        self.priorities.clear();
    }

    /// The texts of every belief, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.order.clone()
    }

    /// The number of beliefs in the base.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the base holds no beliefs.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a belief with the given text is present.
    pub fn contains(&self, text: &str) -> bool {
        self.beliefs.contains_key(text)
    }

    /// The belief with the given text, if present.
    pub fn get(&self, text: &str) -> Option<&Belief> {
        self.beliefs.get(text)
    }

    /// Every belief, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Belief> {
        self.order.iter().filter_map(|text| self.beliefs.get(text))
    }

    /// Installs explicit priorities, overwriting any previous explicit value for the same text.
    /// Texts not present in the base are recorded but inert until (re-)inserted.
    pub fn set_priorities(&mut self, priorities: HashMap<String, i64>) {
        self.priorities.extend(priorities);
    }

    /// The priority of `text`: its explicit value if one was set, otherwise `N - index` where
    /// `N` is the current size of the base and `index` is its zero-based insertion position ---
    /// the earliest belief in an `N`-member base defaults to priority `N`, the latest to `1`.
    pub fn priority_of(&self, text: &str) -> i64 {
        if let Some(explicit) = self.priorities.get(text) {
            return *explicit;
        }
        match self.order.iter().position(|t| t == text) {
            Some(index) => (self.order.len() - index) as i64,
            None => 0,
        }
    }

    /// Restricts the base to exactly the texts in `keep`, preserving relative insertion order
    /// and explicit priorities of the survivors. Used by the contraction procedures to install
    /// the outcome of a partial-meet computation without disturbing anything else.
    pub fn retain_only(&mut self, keep: &std::collections::HashSet<String>) {
        self.order.retain(|text| keep.contains(text));
        self.beliefs.retain(|text, _| keep.contains(text));
        self.priorities.retain(|text, _| keep.contains(text));
    }
}
