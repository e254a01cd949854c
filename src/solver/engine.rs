//! Per-game codebreaker state

use super::strategy::{RandomStrategy, Strategy};
use crate::core::{Code, CodeSpace, Feedback};
use log::debug;
use rand::Rng;
use std::fmt;

/// Error type for the codebreaker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The feedback history cannot have come from any code
    NoCandidates { rounds: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { rounds } => write!(
                f,
                "No code is consistent with the feedback of the last {rounds} round(s)"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Keep the candidates that would have produced `feedback` for `guess`
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeSpace, Feedback};
/// use mastermind_solver::solver::filter_candidates;
///
/// let space = CodeSpace::generate();
/// let guess = "1234".parse().unwrap();
/// let remaining = filter_candidates(space.codes(), &guess, Feedback::SOLVED);
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| Feedback::calculate(candidate, guess) == feedback)
        .copied()
        .collect()
}

/// The computer codebreaker's state for one game
///
/// Holds the candidate set, which starts as the whole code space and only
/// ever shrinks, plus the rounds observed so far. One state belongs to one
/// game; call [`SolverState::reset`] or build a new one for the next game.
#[derive(Debug, Clone)]
pub struct SolverState<'a, S: Strategy = RandomStrategy> {
    space: &'a CodeSpace,
    strategy: S,
    candidates: Vec<Code>,
    history: Vec<(Code, Feedback)>,
}

impl<'a> SolverState<'a> {
    /// Create a fresh state that plays the random strategy
    #[must_use]
    pub fn new(space: &'a CodeSpace) -> Self {
        Self::with_strategy(space, RandomStrategy)
    }
}

impl<'a, S: Strategy> SolverState<'a, S> {
    /// Create a fresh state with the given strategy
    #[must_use]
    pub fn with_strategy(space: &'a CodeSpace, strategy: S) -> Self {
        Self {
            space,
            strategy,
            candidates: space.codes().to_vec(),
            history: Vec::new(),
        }
    }

    /// Codes still consistent with every observed round
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Rounds observed so far
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Narrow the candidates with one round of feedback
    ///
    /// Returns the number of candidates left. Zero is a valid result; it
    /// means the history is inconsistent.
    pub fn observe(&mut self, guess: Code, feedback: Feedback) -> usize {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::calculate(candidate, &guess) == feedback);
        self.history.push((guess, feedback));

        debug!(
            "{guess} scored {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );
        self.candidates.len()
    }

    /// Pick the next guess
    ///
    /// `last` is the previous round's guess and feedback, if there was one.
    /// With no history at all the guess is synthesized from random pegs
    /// without consulting the candidates. Otherwise the candidates are
    /// narrowed by `last` and the guess is drawn from what remains.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the narrowed candidate set is
    /// empty.
    pub fn next_guess<R: Rng + ?Sized>(
        &mut self,
        last: Option<(Code, Feedback)>,
        rng: &mut R,
    ) -> Result<Code, SolverError> {
        if let Some((guess, feedback)) = last {
            self.observe(guess, feedback);
        }

        if self.history.is_empty() {
            return Ok(self.strategy.opening_guess(rng));
        }

        self.strategy
            .select_guess(&self.candidates, rng)
            .ok_or(SolverError::NoCandidates {
                rounds: self.history.len(),
            })
    }

    /// Start over for a new game
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.candidates.extend_from_slice(self.space.codes());
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SPACE_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    /// Always takes the first candidate, to make games reproducible
    struct FirstCandidate;

    impl Strategy for FirstCandidate {
        fn opening_guess<R: Rng + ?Sized>(&self, _rng: &mut R) -> Code {
            code("1122")
        }

        fn select_guess<R: Rng + ?Sized>(&self, candidates: &[Code], _rng: &mut R) -> Option<Code> {
            candidates.first().copied()
        }
    }

    #[test]
    fn fresh_state_holds_whole_space() {
        let space = CodeSpace::generate();
        let state = SolverState::new(&space);
        assert_eq!(state.candidate_count(), SPACE_SIZE);
        assert!(state.history().is_empty());
    }

    #[test]
    fn opening_guess_does_not_filter() {
        let space = CodeSpace::generate();
        let mut state = SolverState::new(&space);
        let mut rng = StdRng::seed_from_u64(1);

        state.next_guess(None, &mut rng).unwrap();
        assert_eq!(state.candidate_count(), SPACE_SIZE);
    }

    #[test]
    fn solved_feedback_leaves_single_candidate() {
        let space = CodeSpace::generate();
        let mut state = SolverState::new(&space);
        let mut rng = StdRng::seed_from_u64(1);

        let guess = state
            .next_guess(Some((code("1234"), Feedback::SOLVED)), &mut rng)
            .unwrap();

        assert_eq!(state.candidates(), &[code("1234")]);
        assert_eq!(guess, code("1234"));
    }

    #[test]
    fn impossible_history_reports_no_candidates() {
        let space = CodeSpace::generate();
        let mut state = SolverState::new(&space);
        let mut rng = StdRng::seed_from_u64(1);

        // 1111 cannot be both right and entirely absent
        state.observe(code("1111"), Feedback::SOLVED);
        let result = state.next_guess(Some((code("1111"), "----".parse().unwrap())), &mut rng);

        assert_eq!(result, Err(SolverError::NoCandidates { rounds: 2 }));
        assert_eq!(state.candidate_count(), 0);
    }

    #[test]
    fn filter_is_idempotent() {
        let space = CodeSpace::generate();
        let guess = code("1123");
        let feedback = Feedback::calculate(&guess, &code("3516"));

        let once = filter_candidates(space.codes(), &guess, feedback);
        let twice = filter_candidates(&once, &guess, feedback);

        assert_eq!(once, twice);
        assert!(once.contains(&code("3516")));
    }

    #[test]
    fn filter_never_grows() {
        let space = CodeSpace::generate();
        let guess = code("6543");
        for exact in 0..=4 {
            for wrong in 0..=(4 - exact) {
                let Ok(feedback) = Feedback::from_counts(exact, wrong) else {
                    continue;
                };
                let remaining = filter_candidates(space.codes(), &guess, feedback);
                assert!(remaining.len() <= space.len());
                assert!(
                    remaining
                        .iter()
                        .all(|c| Feedback::calculate(c, &guess) == feedback)
                );
            }
        }
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let space = CodeSpace::generate();
        let secret = code("4415");
        let mut state = SolverState::with_strategy(&space, FirstCandidate);
        let mut rng = StdRng::seed_from_u64(0);

        let mut last = None;
        let mut previous = state.candidates().to_vec();
        for _ in 0..10 {
            let guess = state.next_guess(last, &mut rng).unwrap();
            assert!(state.candidates().iter().all(|c| previous.contains(c)));
            assert!(state.candidates().contains(&secret));
            previous = state.candidates().to_vec();

            let feedback = Feedback::calculate(&guess, &secret);
            if feedback.is_solved() {
                return;
            }
            last = Some((guess, feedback));
        }
        panic!("first-candidate play did not find {secret} in 10 rounds");
    }

    #[test]
    fn reset_restores_whole_space() {
        let space = CodeSpace::generate();
        let mut state = SolverState::new(&space);
        state.observe(code("1234"), Feedback::SOLVED);
        assert_eq!(state.candidate_count(), 1);

        state.reset();
        assert_eq!(state.candidate_count(), SPACE_SIZE);
        assert!(state.history().is_empty());
    }

    #[test]
    fn separate_states_do_not_share_candidates() {
        let space = CodeSpace::generate();
        let mut first = SolverState::new(&space);
        let second = SolverState::new(&space);

        first.observe(code("1234"), Feedback::SOLVED);
        assert_eq!(first.candidate_count(), 1);
        assert_eq!(second.candidate_count(), SPACE_SIZE);
    }
}
