use std::str::FromStr;

/// How ties between equally-preferred remainders are broken, to keep selection deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TieBreak {
    /// Prefer the remainder of greatest total priority, then fall back to lexicographic order.
    Priority = 0,

    /// Break ties on the sorted, joined textual form of a remainder's beliefs.
    Lexicographic,

    /// Break ties by preferring the remainder that retains the earliest-inserted beliefs.
    InsertionOrder,
}

impl TieBreak {
    /// The minimum `TieBreak` variant, for range validation.
    pub const MIN: TieBreak = TieBreak::Priority;

    /// The maximum `TieBreak` variant, for range validation.
    pub const MAX: TieBreak = TieBreak::InsertionOrder;
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Lexicographic => write!(f, "lexicographic"),
            Self::InsertionOrder => write!(f, "insertion_order"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Self::Priority),
            "lexicographic" => Ok(Self::Lexicographic),
            "insertion_order" => Ok(Self::InsertionOrder),
            _unknown => Err(()),
        }
    }
}
