//! CNF normalization: the four rewrite stages and idempotence.

use std::collections::BTreeSet;

use doxa::{
    cnf::{Budget, Normalizer},
    config::Config,
    structures::{
        atom::FALSE_ATOM,
        clause::{Clause, Cnf},
        formula::Formula,
        literal::Literal,
    },
};

fn to_cnf(text: &str) -> Cnf {
    let formula = doxa::parser::parse(text).unwrap();
    let config = Config::default();
    let budget = Budget::from_config(&config);
    Normalizer::new().to_cnf(&formula, &budget).unwrap()
}

fn clause(literals: &[(&str, bool)]) -> Clause {
    Clause::from_literals(
        literals
            .iter()
            .map(|(name, polarity)| Literal::new((*name).into(), *polarity)),
    )
}

#[test]
fn atom_normalizes_to_a_unit_clause() {
    let cnf = to_cnf("P");
    assert_eq!(cnf, BTreeSet::from([clause(&[("P", true)])]));
}

#[test]
fn implication_eliminated_to_a_two_literal_clause() {
    // P → Q ≡ ¬P ∨ Q
    let cnf = to_cnf("P → Q");
    assert_eq!(cnf, BTreeSet::from([clause(&[("P", false), ("Q", true)])]));
}

#[test]
fn biconditional_eliminated_to_two_clauses() {
    // P ↔ Q ≡ (¬P ∨ Q) ∧ (¬Q ∨ P)
    let cnf = to_cnf("P ↔ Q");
    assert_eq!(
        cnf,
        BTreeSet::from([
            clause(&[("P", false), ("Q", true)]),
            clause(&[("Q", false), ("P", true)]),
        ])
    );
}

#[test]
fn double_negation_collapses() {
    assert_eq!(to_cnf("¬¬P"), to_cnf("P"));
}

#[test]
fn de_morgan_pushes_negation_to_the_atoms() {
    // ¬(P ∧ Q) ≡ ¬P ∨ ¬Q
    let cnf = to_cnf("¬(P ∧ Q)");
    assert_eq!(cnf, BTreeSet::from([clause(&[("P", false), ("Q", false)])]));
}

#[test]
fn negated_disjunction_distributes_into_two_unit_clauses() {
    // ¬(P ∨ Q) ≡ ¬P ∧ ¬Q
    let cnf = to_cnf("¬(P ∨ Q)");
    assert_eq!(
        cnf,
        BTreeSet::from([clause(&[("P", false)]), clause(&[("Q", false)])])
    );
}

#[test]
fn disjunction_distributes_over_conjunction() {
    // (P ∧ Q) ∨ R ≡ (P ∨ R) ∧ (Q ∨ R)
    let cnf = to_cnf("(P ∧ Q) ∨ R");
    assert_eq!(
        cnf,
        BTreeSet::from([
            clause(&[("P", true), ("R", true)]),
            clause(&[("Q", true), ("R", true)]),
        ])
    );
}

#[test]
fn tautological_clause_is_dropped() {
    let cnf = to_cnf("P ∨ ¬P");
    assert!(cnf.is_empty());
}

#[test]
fn the_false_atom_extracts_to_the_empty_clause() {
    let cnf = to_cnf("False");
    assert_eq!(cnf, BTreeSet::from([Clause::empty()]));
}

#[test]
fn negated_false_is_a_tautology_and_contributes_no_clause() {
    let cnf = to_cnf(&format!("¬{FALSE_ATOM}"));
    assert!(cnf.is_empty());
}

/// `cnf(cnf(φ)) = cnf(φ)`: rebuild a formula from an already-normalized clause set and
/// normalize it again; the result must be the same set of clauses.
#[test]
fn normalizer_is_idempotent() {
    for text in ["P → Q", "P ↔ Q", "¬(P ∧ Q) ∨ R", "(P ∧ Q) ∨ (R ∧ S)"] {
        let once = to_cnf(text);
        let rebuilt = cnf_to_formula(&once);

        let config = Config::default();
        let budget = Budget::from_config(&config);
        let twice = Normalizer::new().to_cnf(&rebuilt, &budget).unwrap();

        assert_eq!(once, twice, "not idempotent for '{text}'");
    }
}

fn cnf_to_formula(cnf: &Cnf) -> Formula {
    if cnf.is_empty() {
        return Formula::atom(FALSE_ATOM);
    }
    let mut conjuncts = cnf.iter().map(clause_to_formula);
    let first = conjuncts.next().expect("checked non-empty above");
    conjuncts.fold(first, Formula::and)
}

fn clause_to_formula(clause: &Clause) -> Formula {
    if clause.is_empty() {
        return Formula::atom(FALSE_ATOM);
    }
    let mut literals = clause.literals().map(|literal| {
        if literal.polarity() {
            Formula::atom(literal.atom().to_string())
        } else {
            Formula::not(Formula::atom(literal.atom().to_string()))
        }
    });
    let first = literals.next().expect("checked non-empty above");
    literals.fold(first, Formula::or)
}
