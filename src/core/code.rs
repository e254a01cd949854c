//! Code representation
//!
//! A Code is an ordered row of four pegs. The same type serves as a guess and
//! as the hidden reference code.

use super::peg::Peg;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// Four pegs in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Peg; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidPeg(char),
    InvalidValue(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must have exactly {CODE_LENGTH} pegs, got {len}")
            }
            Self::InvalidPeg(ch) => {
                write!(f, "'{ch}' is not a peg (use 1-6 or r/y/b/g/p/o)")
            }
            Self::InvalidValue(v) => write!(f, "Peg value must be 1-6, got {v}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from four pegs
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Peg; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Create a code from peg numbers
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` unless exactly four values are given,
    /// and `CodeError::InvalidValue` for any value outside 1..=6.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, CodeError};
    ///
    /// let code = Code::from_values(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.values(), [1, 2, 3, 4]);
    ///
    /// assert_eq!(Code::from_values(&[1, 2, 3]), Err(CodeError::InvalidLength(3)));
    /// assert_eq!(Code::from_values(&[1, 2, 3, 9]), Err(CodeError::InvalidValue(9)));
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, CodeError> {
        if values.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(values.len()));
        }

        let mut pegs = [Peg::Red; CODE_LENGTH];
        for (slot, &v) in pegs.iter_mut().zip(values) {
            *slot = Peg::from_value(v).ok_or(CodeError::InvalidValue(v))?;
        }

        Ok(Self(pegs))
    }

    /// Draw four independent, uniformly random pegs
    ///
    /// Used both for the codebreaker's opening guess and for the computer
    /// codemaker's secret.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Peg::random(&mut *rng)))
    }

    /// Get the pegs
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }

    /// Get the peg numbers
    #[must_use]
    pub fn values(&self) -> [u8; CODE_LENGTH] {
        self.0.map(Peg::value)
    }
}

impl TryFrom<&[Peg]> for Code {
    type Error = CodeError;

    fn try_from(pegs: &[Peg]) -> Result<Self, Self::Error> {
        <[Peg; CODE_LENGTH]>::try_from(pegs)
            .map(Self)
            .map_err(|_| CodeError::InvalidLength(pegs.len()))
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse "1234", "1 2 3 4", "1,2,3,4" or color initials like "RYBG"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pegs = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Peg::from_char(c).ok_or(CodeError::InvalidPeg(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(pegs.as_slice())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}
