//! The universe of possible codes
//!
//! Codes are enumerated as a four-digit odometer whose digits run 1..=6,
//! rightmost digit fastest: `[1,1,1,1]`, `[1,1,1,2]`, ... `[6,6,6,6]`.

use super::code::{CODE_LENGTH, Code};
use super::peg::{NUM_COLORS, Peg};
use std::sync::OnceLock;

/// Number of distinct codes (6^4)
pub const SPACE_SIZE: usize = NUM_COLORS.pow(CODE_LENGTH as u32);

/// All possible codes in odometer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpace {
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate every code exactly once
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeSpace, SPACE_SIZE};
    ///
    /// let space = CodeSpace::generate();
    /// assert_eq!(space.len(), SPACE_SIZE);
    /// assert_eq!(space.codes()[0].values(), [1, 1, 1, 1]);
    /// assert_eq!(space.codes()[1].values(), [1, 1, 1, 2]);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        let mut digits = [1u8; CODE_LENGTH];
        let mut codes = Vec::with_capacity(SPACE_SIZE);

        loop {
            codes.push(Code::new(digits.map(to_peg)));
            if !advance(&mut digits) {
                break;
            }
        }
        debug_assert_eq!(codes.len(), SPACE_SIZE);

        Self { codes }
    }

    /// Process-wide read-only instance, generated on first use
    pub fn shared() -> &'static Self {
        static SPACE: OnceLock<CodeSpace> = OnceLock::new();
        SPACE.get_or_init(Self::generate)
    }

    /// Get the codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Step the odometer once
///
/// Increments the rightmost digit and carries leftward. Returns `false` when
/// the leftmost digit overflows, in which case every digit has wrapped back
/// to 1.
fn advance(digits: &mut [u8; CODE_LENGTH]) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if usize::from(*digit) <= NUM_COLORS {
            return true;
        }
        *digit = 1;
    }
    false
}

fn to_peg(digit: u8) -> Peg {
    // Digits never leave 1..=6 inside `advance`
    Peg::ALL[usize::from(digit - 1)]
}
