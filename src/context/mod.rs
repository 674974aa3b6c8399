/*!
[Agent] --- the facade gluing the [belief base](crate::base), [configuration](crate::config),
[normalizer](crate::cnf), and [prover](crate::resolution) into the operations table external
callers (the CLI, the Mastermind adapter, tests) actually use.
*/

use std::collections::HashMap;

use crate::{
    base::BeliefBase,
    cnf::Normalizer,
    config::{Config, Selector},
    parser,
    procedures,
    reports::Entailment,
    resolution::Prover,
    types::err::{ErrorKind, Result},
};

/// A belief-revision agent: a belief base together with everything needed to query and revise it.
pub struct Agent {
    base: BeliefBase,
    config: Config,
    normalizer: Normalizer,
    prover: Prover,
}

impl Agent {
    /// Builds an agent with an empty base and the given configuration.
    pub fn new(config: Config) -> Self {
        Agent {
            base: BeliefBase::new(),
            config,
            normalizer: Normalizer::new(),
            prover: Prover::new(),
        }
    }

    /// The agent's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The agent's configuration, mutably.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Adds `text` to the belief base. An alias of [expand](Self::expand): the raw container
    /// operation and the AGM operation coincide for expansion, since it never checks consistency.
    pub fn add(&mut self, text: &str) -> Result<bool> {
        self.expand(text)
    }

    /// Expansion: `B + φ`.
    pub fn expand(&mut self, text: &str) -> Result<bool> {
        let phi = parser::parse(text)?;
        Ok(procedures::expansion::expand(&mut self.base, text.to_string(), phi))
    }

    /// Removes `text` from the belief base, silently, if present.
    pub fn remove(&mut self, text: &str) {
        self.base.remove(text);
    }

    /// Every belief's text, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.base.list()
    }

    /// Discards every belief, explicit priority, and cached prover result.
    pub fn clear(&mut self) {
        self.base.clear();
        self.prover.clear_cache();
    }

    /// `B ⊨ φ`.
    pub fn entails(&mut self, text: &str) -> Result<Entailment> {
        let phi = parser::parse(text)?;
        let result = procedures::entails(&self.base, &phi, &mut self.normalizer, &mut self.prover, &self.config)?;
        Ok(result)
    }

    /// Whether the belief base is consistent, i.e. does not entail `False`.
    pub fn consistent(&mut self) -> Result<Entailment> {
        let result = procedures::consistent(&self.base, &mut self.normalizer, &mut self.prover, &self.config)?;
        Ok(result)
    }

    /// Contraction: `B ÷ φ`, via partial meet (or its kernel surrogate above
    /// [remainder_search_cap](Config::remainder_search_cap)).
    pub fn contract(&mut self, text: &str, selector: Selector) -> Result<()> {
        let phi = parser::parse(text)?;
        procedures::contraction::partial_meet(
            &mut self.base,
            &phi,
            selector,
            &mut self.normalizer,
            &mut self.prover,
            &self.config,
        )?;
        Ok(())
    }

    /// Contraction via a single priority-sorted linear pass, for callers who explicitly want
    /// the faster, non-partial-meet algorithm.
    pub fn contract_linear(&mut self, text: &str) -> Result<()> {
        let phi = parser::parse(text)?;
        procedures::contraction::linear(&mut self.base, &phi, &mut self.normalizer, &mut self.prover, &self.config)?;
        Ok(())
    }

    /// Revision: `B * φ`, via the Levi identity.
    pub fn revise(&mut self, text: &str, selector: Selector) -> Result<()> {
        let phi = parser::parse(text)?;
        procedures::revision::revise(
            &mut self.base,
            text,
            &phi,
            selector,
            &mut self.normalizer,
            &mut self.prover,
            &self.config,
        )?;
        Ok(())
    }

    /// Installs explicit priorities for the named beliefs.
    pub fn set_priorities(&mut self, priorities: HashMap<String, i64>) {
        self.base.set_priorities(priorities);
    }
}

impl Default for Agent {
    fn default() -> Self {
        Agent::new(Config::default())
    }
}

/// Parses `selector_name` into a [Selector], for callers (the CLI) accepting it as free text.
pub fn parse_selector(selector_name: &str) -> Result<Selector> {
    selector_name
        .parse()
        .map_err(|_| ErrorKind::InvalidSelector(selector_name.to_string()))
}
