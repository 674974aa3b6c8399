//! Built-in batch scenarios and the Mastermind self-play demo, dispatched by the `scenarios`
//! and `mastermind` commands of [menu](super::menu).
//!
//! The scenarios mirror the end-to-end walkthroughs used to validate the engine against the
//! AGM postulates: each is a short, self-contained `B`, a query, and an operation, printed as
//! it runs so a reader following along on the CLI can check each step by eye.

use doxa::{config::Selector, context::Agent};

/// Runs every built-in scenario in sequence, each against a fresh [Agent].
pub fn run_all() {
    scenario_foundational_pair();
    scenario_chained_entailment();
    scenario_revise_into_contradiction();
    scenario_disjunctive_syllogism();
    scenario_empty_base();
    scenario_double_negation_extensionality();
}

/// `B = {A, ¬A ∨ B}`. `entails(B) = True`; after `contract(B)`, `entails(B) = False` and at
/// most one of the two original beliefs survives.
fn scenario_foundational_pair() {
    println!("c scenario: foundational pair");
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    println!("c   base: {:?}", agent.list());
    println!("c   entails(B) = {}", agent.entails("B").unwrap());

    agent.contract("B", Selector::All).unwrap();
    println!("c   after contract(B): {:?}", agent.list());
    println!("c   entails(B) = {}", agent.entails("B").unwrap());
}

/// `B = {A, ¬A ∨ B, ¬B ∨ C}`. `entails(C) = True`; after `contract(C)`, `entails(C) = False`.
fn scenario_chained_entailment() {
    println!("c scenario: chained entailment");
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    agent.add("¬B ∨ C").unwrap();
    println!("c   entails(C) = {}", agent.entails("C").unwrap());

    agent.contract("C", Selector::All).unwrap();
    println!("c   after contract(C): {:?}", agent.list());
    println!("c   entails(C) = {}", agent.entails("C").unwrap());
}

/// `B = {A}`, `revise(¬A)` should yield a consistent base containing `¬A` and not `A`.
fn scenario_revise_into_contradiction() {
    println!("c scenario: revise into a contradiction");
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.revise("¬A", Selector::All).unwrap();
    println!("c   after revise(¬A): {:?}", agent.list());
    println!("c   consistent() = {}", agent.consistent().unwrap());
}

/// `B = {P ∨ Q, ¬P}`. `entails(Q) = True` and the base remains consistent.
fn scenario_disjunctive_syllogism() {
    println!("c scenario: disjunctive syllogism");
    let mut agent = Agent::default();
    agent.add("P ∨ Q").unwrap();
    agent.add("¬P").unwrap();
    println!("c   entails(Q) = {}", agent.entails("Q").unwrap());
    println!("c   consistent() = {}", agent.consistent().unwrap());
}

/// `B = ∅`. `entails(A) = False`, `consistent() = True`.
fn scenario_empty_base() {
    println!("c scenario: empty base");
    let mut agent = Agent::default();
    println!("c   entails(A) = {}", agent.entails("A").unwrap());
    println!("c   consistent() = {}", agent.consistent().unwrap());
}

/// `contract(¬¬A)` should behave exactly as `contract(A)`, since NNF collapses the double
/// negation before the prover ever sees it.
fn scenario_double_negation_extensionality() {
    println!("c scenario: double-negation extensionality");
    let mut plain = Agent::default();
    plain.add("A").unwrap();
    plain.add("A ∧ B").unwrap();
    plain.contract("A", Selector::All).unwrap();

    let mut doubled = Agent::default();
    doubled.add("A").unwrap();
    doubled.add("A ∧ B").unwrap();
    doubled.contract("¬¬A", Selector::All).unwrap();

    println!("c   contract(A)   -> {:?}", plain.list());
    println!("c   contract(¬¬A) -> {:?}", doubled.list());
    println!("c   equal = {}", plain.list() == doubled.list());
}

/// Plays a self-play Mastermind game (the agent guesses against a secret code it also
/// generates) and prints every guess/feedback pair, in the style of
/// [doxa::mastermind::play_self].
pub fn run_mastermind_demo() {
    use rand::SeedableRng;

    let colors = 6;
    let length = 4;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let secret = doxa::mastermind::random_code(colors, length, &mut rng);

    println!("c mastermind: {colors} colors, {length} pegs");
    let history = doxa::mastermind::play_self(colors, length, &secret, 15);
    for (turn, (guess, feedback)) in history.iter().enumerate() {
        println!(
            "c   turn {}: guess {:?} -> black {} white {}",
            turn + 1,
            guess,
            feedback.black,
            feedback.white
        );
    }
    println!("c   secret was {secret:?}");
}
