use std::cell::RefCell;

use crate::{
    cnf::{Budget, Normalizer},
    config::Config,
    structures::{clause::Cnf, formula::Formula},
    types::err::OverbudgetError,
};

/// A single member of a [BeliefBase](super::BeliefBase): its surface text, its parsed AST, and
/// a lazily computed, lazily cached CNF.
///
/// A belief is never edited in place --- [BeliefBase::add](super::BeliefBase::add) and the
/// contraction procedures only ever insert or remove whole beliefs --- so the cache, once
/// populated, never needs to be invalidated; it is simply a memoized pure function of `ast`.
#[derive(Debug)]
pub struct Belief {
    text: String,
    ast: Formula,
    cnf: RefCell<Option<Cnf>>,
}

impl Belief {
    /// Builds a belief from already-parsed text.
    pub fn new(text: String, ast: Formula) -> Self {
        Belief {
            text,
            ast,
            cnf: RefCell::new(None),
        }
    }

    /// The original surface text of the belief.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed formula.
    pub fn ast(&self) -> &Formula {
        &self.ast
    }

    /// The belief's clause form, computing and caching it on first use.
    pub fn cnf(
        &self,
        normalizer: &mut Normalizer,
        config: &Config,
    ) -> Result<Cnf, OverbudgetError> {
        if let Some(cached) = self.cnf.borrow().as_ref() {
            return Ok(cached.clone());
        }

        let budget = Budget::from_config(config);
        let computed = normalizer.to_cnf(&self.ast, &budget)?;
        *self.cnf.borrow_mut() = Some(computed.clone());
        Ok(computed)
    }
}

impl Clone for Belief {
    /// Clones the text and AST; the cache is not carried over, since cheap recomputation (or a
    /// differently configured budget) is preferable to assuming the clone will be used the same
    /// way as the original.
    fn clone(&self) -> Self {
        Belief::new(self.text.clone(), self.ast.clone())
    }
}
