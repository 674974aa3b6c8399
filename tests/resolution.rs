//! Entailment via resolution refutation, including soundness checked by brute-force model
//! enumeration over small atom sets.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use doxa::{context::Agent, reports::Entailment, structures::formula::Formula};

#[test]
fn modus_ponens() {
    let mut agent = Agent::default();
    agent.add("P").unwrap();
    agent.add("P → Q").unwrap();
    assert_eq!(agent.entails("Q").unwrap(), Entailment::True);
}

#[test]
fn disjunctive_syllogism() {
    let mut agent = Agent::default();
    agent.add("P ∨ Q").unwrap();
    agent.add("¬P").unwrap();
    assert_eq!(agent.entails("Q").unwrap(), Entailment::True);
    assert_eq!(agent.consistent().unwrap(), Entailment::True);
}

#[test]
fn unentailed_query_reports_false() {
    let mut agent = Agent::default();
    agent.add("P").unwrap();
    assert_eq!(agent.entails("Q").unwrap(), Entailment::False);
}

#[test]
fn empty_base_does_not_entail_an_atom_but_is_consistent() {
    let mut agent = Agent::default();
    assert_eq!(agent.entails("A").unwrap(), Entailment::False);
    assert_eq!(agent.consistent().unwrap(), Entailment::True);
}

#[test]
fn contradictory_base_is_inconsistent() {
    let mut agent = Agent::default();
    agent.add("P").unwrap();
    agent.add("¬P").unwrap();
    assert_eq!(agent.consistent().unwrap(), Entailment::False);
}

#[test]
fn inconsistent_base_entails_everything() {
    let mut agent = Agent::default();
    agent.add("P").unwrap();
    agent.add("¬P").unwrap();
    assert_eq!(agent.entails("Q").unwrap(), Entailment::True);
}

#[test]
fn chained_entailment() {
    let mut agent = Agent::default();
    agent.add("A").unwrap();
    agent.add("¬A ∨ B").unwrap();
    agent.add("¬B ∨ C").unwrap();
    assert_eq!(agent.entails("C").unwrap(), Entailment::True);
}

#[test]
fn entailment_result_is_cached_and_stable_across_repeated_queries() {
    let mut agent = Agent::default();
    agent.add("P").unwrap();
    agent.add("P → Q").unwrap();
    for _ in 0..5 {
        assert_eq!(agent.entails("Q").unwrap(), Entailment::True);
    }
}

/// Resolution is sound: whenever `entails(B, φ) = True`, every assignment satisfying every
/// belief in `B` also satisfies `φ`. Checked by brute-force enumeration over the formulas'
/// joint atoms, which stays well under the six-atom bound the property is specified for.
#[test]
fn soundness_by_model_enumeration() {
    let cases: &[(&[&str], &str)] = &[
        (&["A", "¬A ∨ B"], "B"),
        (&["A", "¬A ∨ B", "¬B ∨ C"], "C"),
        (&["P ∨ Q", "¬P"], "Q"),
        (&["P", "P ↔ Q", "Q → R"], "R"),
        (&["¬A ∨ ¬B ∨ C", "A", "B"], "C"),
    ];

    for (base_texts, query_text) in cases {
        let mut agent = Agent::default();
        for text in *base_texts {
            agent.add(text).unwrap();
        }
        assert_eq!(
            agent.entails(query_text).unwrap(),
            Entailment::True,
            "fixture expected entailment to hold for {base_texts:?} |- {query_text}"
        );

        let base_formulas: Vec<Formula> = base_texts
            .iter()
            .map(|t| doxa::parser::parse(t).unwrap())
            .collect();
        let query_formula = doxa::parser::parse(query_text).unwrap();

        let mut atoms = BTreeSet::new();
        for formula in base_formulas.iter().chain(std::iter::once(&query_formula)) {
            collect_atoms(formula, &mut atoms);
        }
        let atoms: Vec<Rc<str>> = atoms.into_iter().collect();
        assert!(atoms.len() <= 6, "fixture exceeds the specified atom bound");

        for assignment_bits in 0u32..(1 << atoms.len()) {
            let assignment: HashMap<&str, bool> = atoms
                .iter()
                .enumerate()
                .map(|(i, atom)| (atom.as_ref(), (assignment_bits >> i) & 1 == 1))
                .collect();

            let base_holds = base_formulas.iter().all(|f| evaluate(f, &assignment));
            if base_holds {
                assert!(
                    evaluate(&query_formula, &assignment),
                    "model {assignment:?} satisfies the base but not the query for {base_texts:?} |- {query_text}"
                );
            }
        }
    }
}

fn collect_atoms(formula: &Formula, out: &mut BTreeSet<Rc<str>>) {
    match formula {
        Formula::Atom(name) => {
            out.insert(name.clone());
        }
        Formula::Not(inner) => collect_atoms(inner, out),
        Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
            collect_atoms(l, out);
            collect_atoms(r, out);
        }
    }
}

fn evaluate(formula: &Formula, assignment: &HashMap<&str, bool>) -> bool {
    match formula {
        Formula::Atom(name) => *assignment.get(name.as_ref()).expect("every atom is assigned"),
        Formula::Not(inner) => !evaluate(inner, assignment),
        Formula::And(l, r) => evaluate(l, assignment) && evaluate(r, assignment),
        Formula::Or(l, r) => evaluate(l, assignment) || evaluate(r, assignment),
        Formula::Implies(l, r) => !evaluate(l, assignment) || evaluate(r, assignment),
        Formula::Iff(l, r) => evaluate(l, assignment) == evaluate(r, assignment),
    }
}
