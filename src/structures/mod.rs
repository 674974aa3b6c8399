/*!
The abstract elements a solve is built from: [atoms](atom), [literals](literal), parsed
[formulas](formula), and [clauses](clause).
*/

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
