use std::str::FromStr;

/// The selection function used to turn a family of remainders into a contracted base.
///
/// See [partial_meet](crate::procedures::contraction::partial_meet) for the algorithm each
/// variant drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Selector {
    /// Intersect every remainder (the classical "full meet").
    All = 0,

    /// Intersect only the remainders of maximal total priority.
    Max,

    /// Take a single remainder of extremal cardinality.
    Min,
}

impl Selector {
    /// The minimum `Selector` variant, for range validation.
    pub const MIN: Selector = Selector::All;

    /// The maximum `Selector` variant, for range validation.
    pub const MAX: Selector = Selector::Min;
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Max => write!(f, "max"),
            Self::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Selector {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "max" => Ok(Self::Max),
            "min" | "cardinality" => Ok(Self::Min),
            _unknown => Err(()),
        }
    }
}
