//! The AGM postulates for contraction, plus the two literal contraction scenarios from the
//! end-to-end walkthroughs.

use std::collections::HashSet;

use doxa::{config::Selector, context::Agent, reports::Entailment};

fn is_subset(smaller: &[String], larger: &[String]) -> bool {
    let larger: HashSet<&String> = larger.iter().collect();
    smaller.iter().all(|text| larger.contains(text))
}

#[test]
fn success_contraction_removes_entailment() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    assert_eq!(agent.entails("B").unwrap(), Entailment::True);

    agent.contract("B", Selector::All).unwrap();
    assert_eq!(agent.entails("B").unwrap(), Entailment::False);
}

#[test]
fn inclusion_contraction_never_adds_beliefs() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    agent.add("¬B ∨ C").unwrap();
    let before = agent.list();

    agent.contract("C", Selector::All).unwrap();
    let after = agent.list();

    assert!(is_subset(&after, &before));
}

#[test]
fn vacuity_contracting_by_something_not_entailed_changes_nothing() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("B").unwrap();
    let before = agent.list();

    assert_eq!(agent.entails("C").unwrap(), Entailment::False);
    agent.contract("C", Selector::All).unwrap();

    assert_eq!(agent.list(), before);
}

#[test]
fn extensionality_double_negation_equals_contracting_by_the_atom() {
    let mut plain = Agent::default();
    plain.add("A").unwrap();
    plain.add("A ∧ B").unwrap();
    plain.contract("A", Selector::All).unwrap();

    let mut doubled = Agent::default();
    doubled.add("A").unwrap();
    doubled.add("A ∧ B").unwrap();
    doubled.contract("¬¬A", Selector::All).unwrap();

    assert_eq!(plain.list(), doubled.list());
}

#[test]
fn extensionality_holds_across_selectors() {
    for selector in [Selector::All, Selector::Max, Selector::Min] {
        let mut plain = Agent::default();
        plain.add("A").unwrap();
        plain.add("A ∨ B").unwrap();
        plain.contract("A", selector).unwrap();

        let mut doubled = Agent::default();
        doubled.add("A").unwrap();
        doubled.add("A ∨ B").unwrap();
        doubled.contract("¬¬A", selector).unwrap();

        assert_eq!(plain.list(), doubled.list(), "selector {selector} broke extensionality");
    }
}

#[test]
fn consistency_is_preserved_by_contraction() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    agent.add("B → C").unwrap();
    assert_eq!(agent.consistent().unwrap(), Entailment::True);

    agent.contract("C", Selector::All).unwrap();
    assert_eq!(agent.consistent().unwrap(), Entailment::True);
}

/// Scenario 1: `B = {A, ¬A ∨ B}`. `entails(B) = True`; after `contract(B)`, `entails(B) = False`
/// and the base contains at most one of the two original beliefs.
#[test]
fn scenario_foundational_pair() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    assert_eq!(agent.entails("B").unwrap(), Entailment::True);

    agent.contract("B", Selector::All).unwrap();

    assert_eq!(agent.entails("B").unwrap(), Entailment::False);
    let surviving = agent.list();
    assert!(surviving.len() <= 1);
    assert!(is_subset(&surviving, &["A".to_string(), "¬A ∨ B".to_string()]));
}

/// Scenario 2: `B = {A, ¬A ∨ B, ¬B ∨ C}`. `entails(C) = True`; after `contract(C)`,
/// `entails(C) = False` and inclusion holds.
#[test]
fn scenario_chained_entailment() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    agent.add("¬B ∨ C").unwrap();
    let before = agent.list();
    assert_eq!(agent.entails("C").unwrap(), Entailment::True);

    agent.contract("C", Selector::All).unwrap();

    assert_eq!(agent.entails("C").unwrap(), Entailment::False);
    assert!(is_subset(&agent.list(), &before));
}

/// The full meet of `{A, A ∨ B} ÷ A` is the single remainder `{A ∨ B}`: the empty set is a
/// *proper subset* of that remainder and so is never itself maximal, even though the search
/// passes through it on the way down from `{A}`.
#[test]
fn all_selector_keeps_the_non_implying_remainder_instead_of_emptying_the_base() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("A ∨ B").unwrap();

    agent.contract("A", Selector::All).unwrap();

    assert_eq!(agent.list(), vec!["A ∨ B".to_string()]);
    assert_eq!(agent.entails("A").unwrap(), Entailment::False);
}

#[test]
fn max_selector_prefers_higher_priority_remainders() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("A ∨ B").unwrap();
    // Earlier insertions default to higher priority: "A" outranks "A ∨ B".
    agent.contract("A", Selector::Max).unwrap();
    assert_eq!(agent.entails("A").unwrap(), Entailment::False);
}

#[test]
fn min_selector_keeps_a_single_extremal_remainder() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("A ∨ B").unwrap();
    agent.contract("A", Selector::Min).unwrap();
    assert_eq!(agent.entails("A").unwrap(), Entailment::False);
}

#[test]
fn linear_contraction_also_satisfies_success_and_inclusion() {
    let mut agent = Agent::default();
    agent.set_priorities(
        [("A".to_string(), 1), ("¬A ∨ B".to_string(), 2)]
            .into_iter()
            .collect(),
    );
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    let before = agent.list();

    agent.contract_linear("B").unwrap();

    assert_eq!(agent.entails("B").unwrap(), Entailment::False);
    assert!(is_subset(&agent.list(), &before));
}

#[test]
fn linear_contraction_by_a_tautology_leaves_the_base_unchanged() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("B").unwrap();
    let before = agent.list();

    agent.contract_linear("C ∨ ¬C").unwrap();

    assert_eq!(agent.list(), before);
}

#[test]
fn kernel_surrogate_triggers_above_the_remainder_search_cap() {
    let mut agent = Agent::default();
    agent.config_mut().remainder_search_cap.value = 2;

    agent.add("A").unwrap();
    agent.add("B").unwrap();
    agent.add("C").unwrap();
    agent.add("A ∧ B ∧ C → D").unwrap();
    assert_eq!(agent.entails("D").unwrap(), Entailment::True);

    agent.contract("D", Selector::All).unwrap();

    assert_eq!(agent.entails("D").unwrap(), Entailment::False);
    assert_eq!(agent.consistent().unwrap(), Entailment::True);
}
