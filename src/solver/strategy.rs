//! Guess selection strategies
//!
//! Defines the Strategy trait and the uniform random strategy the computer
//! codebreaker plays with.

use crate::core::Code;
use rand::Rng;

/// A strategy for picking the next guess
pub trait Strategy {
    /// Pick a guess when nothing is known about the code yet
    fn opening_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Code;

    /// Pick a guess from the codes still consistent with the history
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess<R: Rng + ?Sized>(&self, candidates: &[Code], rng: &mut R) -> Option<Code>;
}

/// Random strategy
///
/// Opens with four independent random pegs, then draws uniformly from the
/// remaining candidates. There is no lookahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn opening_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        Code::random(rng)
    }

    fn select_guess<R: Rng + ?Sized>(&self, candidates: &[Code], rng: &mut R) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_strategy_selects_from_candidates() {
        let candidates: Vec<Code> = ["1234", "5566", "6543"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let guess = RandomStrategy.select_guess(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn random_strategy_single_candidate() {
        let only: Code = "2222".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(RandomStrategy.select_guess(&[only], &mut rng), Some(only));
    }

    #[test]
    fn random_strategy_no_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(RandomStrategy.select_guess(&[], &mut rng), None);
    }
}
