/*!
An AGM belief revision engine for classical propositional logic.

A [BeliefBase](base::BeliefBase) holds a finite, insertion-ordered, duplicate-free set of
formulas. A [resolution](resolution)-refutation prover decides entailment against it, and the
three AGM change operations --- [expansion](procedures::expansion), partial-meet
[contraction](procedures::contraction), and [revision](procedures::revision) via the Levi
identity --- are built on top of that single entailment primitive. [Agent](context::Agent) is
the facade gathering all of this into the operations most callers actually want.

```
use doxa::context::Agent;

let mut agent = Agent::default();
agent.add("P").unwrap();
agent.add("P → Q").unwrap();
assert_eq!(agent.entails("Q").unwrap(), doxa::reports::Entailment::True);
```
*/

pub mod base;
pub mod cnf;
pub mod config;
pub mod context;
pub mod mastermind;
pub mod misc;
pub mod parser;
pub mod procedures;
pub mod reports;
pub mod resolution;
pub mod structures;
pub mod types;
