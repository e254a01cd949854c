//! Feedback scoring
//!
//! Feedback is the codemaker's answer to a guess: one marker per peg, either
//! an exact match (right color, right slot), a wrong-position match (right
//! color, other slot) or no match.
//!
//! Feedback is a multiset. The markers say nothing about *which* slot of the
//! guess they belong to, so they are kept in canonical order (exact first,
//! then wrong-position, then no-match) and two feedbacks are equal exactly
//! when their counts are equal.

use super::code::{CODE_LENGTH, Code, CodeError};
use std::fmt;
use std::str::FromStr;

/// One feedback marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Right color in the right slot
    Exact,
    /// Right color in the wrong slot
    WrongPosition,
    /// Nothing left to pair this peg with
    NoMatch,
}

impl Outcome {
    /// Single-character marker used in text form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'B',
            Self::WrongPosition => 'W',
            Self::NoMatch => '-',
        }
    }
}

/// The four feedback markers for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Outcome; CODE_LENGTH]);

/// Error type for feedback that cannot exist or cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
    ImpossibleCounts { exact: usize, wrong_position: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have exactly {CODE_LENGTH} markers, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "'{ch}' is not a feedback marker (use B, W or -)")
            }
            Self::ImpossibleCounts {
                exact,
                wrong_position,
            } => write!(
                f,
                "No code can score {exact} exact and {wrong_position} wrong-position"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Four exact matches
    pub const SOLVED: Self = Self([Outcome::Exact; CODE_LENGTH]);

    /// Score `guess` against `reference`
    ///
    /// # Algorithm
    /// 1. Exact pass: every slot where the pegs agree records an exact match
    ///    and is consumed on both sides.
    /// 2. The unconsumed pegs of each side form a leftover pool, in order.
    /// 3. Each leftover guess peg takes the first equal leftover reference
    ///    peg, if any, and records a wrong-position match. A reference peg is
    ///    removed once taken, so duplicates never pair twice.
    /// 4. Everything else is padded with no-match.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess: Code = "1111".parse().unwrap();
    /// let reference: Code = "1234".parse().unwrap();
    /// let feedback = Feedback::calculate(&guess, &reference);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.wrong_position(), 0);
    /// assert_eq!(feedback.to_string(), "B---");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, reference: &Code) -> Self {
        let mut result = [Outcome::NoMatch; CODE_LENGTH];
        let mut recorded = 0;

        let mut guess_left = [None; CODE_LENGTH];
        let mut reference_left = [None; CODE_LENGTH];

        for (i, (&g, &r)) in guess.pegs().iter().zip(reference.pegs()).enumerate() {
            if g == r {
                result[recorded] = Outcome::Exact;
                recorded += 1;
            } else {
                guess_left[i] = Some(g);
                reference_left[i] = Some(r);
            }
        }

        for g in guess_left.into_iter().flatten() {
            if let Some(slot) = reference_left.iter_mut().find(|r| **r == Some(g)) {
                *slot = None;
                result[recorded] = Outcome::WrongPosition;
                recorded += 1;
            }
        }

        Self(result)
    }

    /// Score raw peg numbers
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if either side is not exactly four
    /// pegs long, or `CodeError::InvalidValue` for numbers outside 1..=6.
    pub fn try_calculate(guess: &[u8], reference: &[u8]) -> Result<Self, CodeError> {
        let guess = Code::from_values(guess)?;
        let reference = Code::from_values(reference)?;
        Ok(Self::calculate(&guess, &reference))
    }

    /// Build canonical feedback from its counts
    ///
    /// # Errors
    /// Returns `FeedbackError::ImpossibleCounts` when the counts exceed four
    /// or describe three exact matches plus one wrong-position match, which
    /// no pair of codes can produce.
    pub fn from_counts(exact: usize, wrong_position: usize) -> Result<Self, FeedbackError> {
        let impossible = exact > CODE_LENGTH
            || wrong_position > CODE_LENGTH - exact
            || (exact == CODE_LENGTH - 1 && wrong_position == 1);
        if impossible {
            return Err(FeedbackError::ImpossibleCounts {
                exact,
                wrong_position,
            });
        }

        let mut result = [Outcome::NoMatch; CODE_LENGTH];
        for (i, slot) in result.iter_mut().enumerate() {
            if i < exact {
                *slot = Outcome::Exact;
            } else if i < exact + wrong_position {
                *slot = Outcome::WrongPosition;
            }
        }

        Ok(Self(result))
    }

    /// The markers in canonical order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; CODE_LENGTH] {
        &self.0
    }

    /// Number of exact matches
    #[must_use]
    pub fn exact(&self) -> usize {
        self.count(Outcome::Exact)
    }

    /// Number of wrong-position matches
    #[must_use]
    pub fn wrong_position(&self) -> usize {
        self.count(Outcome::WrongPosition)
    }

    /// Number of unmatched pegs
    #[must_use]
    pub fn no_match(&self) -> usize {
        self.count(Outcome::NoMatch)
    }

    /// Check if the guess was the code
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse markers in any order: `B` exact, `W` wrong position,
    /// `-`, `.` or `_` for no match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if symbols.len() != CODE_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut exact = 0;
        let mut wrong_position = 0;
        for ch in symbols {
            match ch {
                'B' | 'b' => exact += 1,
                'W' | 'w' => wrong_position += 1,
                '-' | '.' | '_' => {}
                other => return Err(FeedbackError::InvalidSymbol(other)),
            }
        }

        Self::from_counts(exact, wrong_position)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in self.0 {
            write!(f, "{}", outcome.symbol())?;
        }
        Ok(())
    }
}
