/*!
A Mastermind-playing adapter, included for interface completeness rather than as part of the
logic core proper.

It never touches [parser], [cnf], or [resolution]: a candidate code is a tuple of colors, not a
formula, and the only thing it borrows from the belief base's shape is the pattern of an
ordered, duplicate-free container offering `add`/`remove`/`list` ([CandidateSet] below). That
decoupling is deliberate --- this component is fully replaceable without touching anything else
in the crate.
*/

use rand::Rng;

use crate::misc::log::targets;

/// A candidate code: one color index per peg position.
pub type Code = Vec<usize>;

/// Generates a uniformly random code of `length` pegs drawn from `colors` colors, mirroring
/// how a secret code is produced for a self-play demo.
pub fn random_code(colors: usize, length: usize, rng: &mut impl Rng) -> Code {
    (0..length).map(|_| rng.random_range(0..colors)).collect()
}

/// Black/white peg feedback for a guess against a code.
///
/// `black` counts index-aligned matches. `white` counts, over every color appearing in the
/// guess, the smaller of its count in the guess and in the code, summed, minus the black pegs
/// already accounted for --- the standard Mastermind rule for scoring colors in the wrong
/// position without double-counting pegs already scored as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub black: usize,
    pub white: usize,
}

/// Scores `guess` against `code`.
pub fn feedback(guess: &[usize], code: &[usize], palette_size: usize) -> Feedback {
    let black = guess.iter().zip(code).filter(|(g, c)| g == c).count();

    let mut total_color_overlap = 0;
    for color in 0..palette_size {
        let guess_count = guess.iter().filter(|&&g| g == color).count();
        let code_count = code.iter().filter(|&&c| c == color).count();
        total_color_overlap += guess_count.min(code_count);
    }

    Feedback {
        black,
        white: total_color_overlap - black,
    }
}

/// An ordered, duplicate-free set of candidate codes, shaped like [BeliefBase](crate::base::BeliefBase)
/// but holding codes rather than beliefs.
#[derive(Default)]
pub struct CandidateSet {
    order: Vec<Code>,
}

impl CandidateSet {
    /// Every code in `colors^length`, in lexicographic order of color index.
    pub fn full(colors: usize, length: usize) -> Self {
        let mut order = Vec::new();
        let mut code = vec![0usize; length];
        loop {
            order.push(code.clone());
            let mut i = length;
            loop {
                if i == 0 {
                    return CandidateSet { order };
                }
                i -= 1;
                code[i] += 1;
                if code[i] < colors {
                    break;
                }
                code[i] = 0;
            }
        }
    }

    /// Adds `code` if not already present.
    pub fn add(&mut self, code: Code) -> bool {
        if self.order.contains(&code) {
            return false;
        }
        self.order.push(code);
        true
    }

    /// Removes every occurrence of `code`.
    pub fn remove(&mut self, code: &[usize]) {
        self.order.retain(|c| c != code);
    }

    /// Every candidate, in the order it was retained.
    pub fn list(&self) -> &[Code] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Plays a full self-play game: guesses against `secret_code`, eliminating candidates
/// inconsistent with the feedback received, until either the code is found or `max_turns`
/// guesses are exhausted. Returns the sequence of (guess, feedback) pairs played.
pub fn play_self(
    colors: usize,
    length: usize,
    secret_code: &[usize],
    max_turns: usize,
) -> Vec<(Code, Feedback)> {
    let mut candidates = CandidateSet::full(colors, length);
    let mut history = Vec::new();

    for turn in 1..=max_turns {
        let Some(guess) = candidates.list().first().cloned() else {
            log::warn!(target: targets::MASTERMIND, "candidate set exhausted without a match");
            break;
        };

        let result = feedback(&guess, secret_code, colors);
        log::debug!(target: targets::MASTERMIND, "turn {turn}: guessed {guess:?}, got {result:?}");
        history.push((guess.clone(), result));

        if result.black == length {
            break;
        }

        candidates.order.retain(|candidate| feedback(&guess, candidate, colors) == result);
    }

    history
}
