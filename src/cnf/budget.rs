use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::{config::Config, structures::formula::Formula, types::err::OverbudgetError};

/// The wall-clock deadline and remaining node allowance for one call to [Normalizer::to_cnf](super::Normalizer::to_cnf).
///
/// Every recursive step of the pipeline consumes one unit of the node allowance, so the cap
/// bounds the AST actually visited rather than just the size of the input formula (a formula
/// revisited across several memoized stages is only charged once per stage, not once per visit).
pub struct Budget {
    deadline: Instant,
    remaining_nodes: Cell<usize>,
}

impl Budget {
    /// Builds a fresh budget from the normalizer-relevant fields of `config`.
    pub fn from_config(config: &Config) -> Self {
        Budget {
            deadline: Instant::now() + Duration::from_millis(config.normalizer_timeout_ms.value),
            remaining_nodes: Cell::new(config.normalizer_node_cap.value),
        }
    }

    /// Charges one node against the budget, failing if either the deadline has passed or the
    /// node allowance is already exhausted.
    pub fn check(&self, formula: &Formula) -> Result<(), OverbudgetError> {
        if Instant::now() >= self.deadline {
            return Err(OverbudgetError::NormalizerTimeout {
                formula: formula.clone(),
            });
        }

        let remaining = self.remaining_nodes.get();
        if remaining == 0 {
            return Err(OverbudgetError::NormalizerNodeCap {
                formula: formula.clone(),
            });
        }
        self.remaining_nodes.set(remaining - 1);

        Ok(())
    }
}
