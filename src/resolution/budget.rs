use std::time::{Duration, Instant};

use crate::config::Config;

/// The wall-clock deadline, clause cap, and outer-iteration cap for one resolution run.
pub struct ProverBudget {
    pub(super) deadline: Instant,
    pub(super) max_clauses: usize,
    pub(super) max_iterations: usize,
}

impl ProverBudget {
    pub fn from_config(config: &Config) -> Self {
        ProverBudget {
            deadline: Instant::now() + Duration::from_millis(config.prover_timeout_ms.value),
            max_clauses: config.max_clauses.value,
            max_iterations: config.max_iterations.value,
        }
    }

    pub(super) fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}
