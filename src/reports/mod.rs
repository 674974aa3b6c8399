//! Outcomes reported back to a caller of the resolution prover.

/// The tri-valued outcome of an entailment query.
///
/// `Unknown` is returned only when the prover's own resolution budget (as distinct from the
/// normalizer's budget, which surfaces as a hard [OverbudgetError](crate::types::err::OverbudgetError))
/// is exhausted before a fixed point is reached; it is a value, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entailment {
    /// The query formula is entailed by the base.
    True,

    /// The base, together with the negation of the query, was refuted: the query does not
    /// follow and is not merely underivable within budget.
    False,

    /// Neither a proof nor a refutation was found before the prover's budget ran out.
    Unknown,
}

impl std::fmt::Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entailment::True => write!(f, "True"),
            Entailment::False => write!(f, "False"),
            Entailment::Unknown => write!(f, "Unknown"),
        }
    }
}
