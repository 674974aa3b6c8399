/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or diagnosing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [CNF normalization](crate::cnf)
    pub const NORMALIZER: &str = "normalizer";

    /// Logs related to the [resolution prover](crate::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [belief base](crate::base)
    pub const BASE: &str = "base";

    /// Logs related to [contraction](crate::procedures::contraction)
    pub const CONTRACTION: &str = "contraction";

    /// Logs related to [revision](crate::procedures::revision)
    pub const REVISION: &str = "revision";

    /// Logs related to the [agent facade](crate::context)
    pub const AGENT: &str = "agent";

    /// Logs related to the [Mastermind adapter](crate::mastermind)
    pub const MASTERMIND: &str = "mastermind";
}
