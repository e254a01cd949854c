//! The playing board
//!
//! Holds the secret code and every guess made against it with its feedback.

use super::GameError;
use crate::core::{Code, Feedback};

/// One guess and the feedback it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Secret code plus the rounds played against it
#[derive(Debug, Clone, Default)]
pub struct Board {
    secret: Option<Code>,
    rounds: Vec<Round>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret code
    ///
    /// The first code set for a game sticks; later calls are ignored until
    /// the board is cleared. Returns whether the code was accepted.
    pub fn set_secret(&mut self, code: Code) -> bool {
        if self.secret.is_some() {
            return false;
        }
        self.secret = Some(code);
        true
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Option<Code> {
        self.secret
    }

    /// Score a guess against the secret and record the round
    ///
    /// # Errors
    /// Returns `GameError::SecretNotSet` if no secret has been set.
    pub fn place_guess(&mut self, guess: Code) -> Result<Feedback, GameError> {
        let secret = self.secret.ok_or(GameError::SecretNotSet)?;
        let feedback = Feedback::calculate(&guess, &secret);
        self.rounds.push(Round { guess, feedback });
        Ok(feedback)
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[inline]
    #[must_use]
    pub fn last_round(&self) -> Option<Round> {
        self.rounds.last().copied()
    }

    /// Check if the last guess cracked the code
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_round().is_some_and(|r| r.feedback.is_solved())
    }

    /// Forget the secret and all rounds
    pub fn clear(&mut self) {
        self.secret = None;
        self.rounds.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn place_guess_requires_secret() {
        let mut board = Board::new();
        assert_eq!(
            board.place_guess(code("1234")),
            Err(GameError::SecretNotSet)
        );
        assert!(board.rounds().is_empty());
    }

    #[test]
    fn secret_is_set_once() {
        let mut board = Board::new();
        assert!(board.set_secret(code("1234")));
        assert!(!board.set_secret(code("5555")));
        assert_eq!(board.secret(), Some(code("1234")));
    }

    #[test]
    fn rounds_are_scored_and_recorded() {
        let mut board = Board::new();
        board.set_secret(code("1234"));

        let feedback = board.place_guess(code("4321")).unwrap();
        assert_eq!(feedback.wrong_position(), 4);
        assert!(!board.is_solved());

        board.place_guess(code("1234")).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.rounds().len(), 2);
        assert_eq!(board.last_round().unwrap().guess, code("1234"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = Board::new();
        board.set_secret(code("1234"));
        board.place_guess(code("1111")).unwrap();

        board.clear();
        assert_eq!(board.secret(), None);
        assert!(board.rounds().is_empty());
        assert!(board.set_secret(code("6666")));
    }
}
