//! Peg colors
//!
//! The six symbols a code is built from. Each color carries a fixed number
//! in 1..=6, which is also its position in the code-space enumeration.

use rand::Rng;
use std::fmt;

/// Number of distinct peg colors
pub const NUM_COLORS: usize = 6;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Peg {
    /// All colors in numeric order (1..=6)
    pub const ALL: [Self; NUM_COLORS] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
    ];

    /// Look up a peg by its number (1..=6)
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Red),
            2 => Some(Self::Yellow),
            3 => Some(Self::Blue),
            4 => Some(Self::Green),
            5 => Some(Self::Purple),
            6 => Some(Self::Orange),
            _ => None,
        }
    }

    /// The peg's number (1..=6)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Parse a peg from a digit `1`-`6` or a color initial (`r y b g p o`)
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'y' => Some(Self::Yellow),
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'p' => Some(Self::Purple),
            'o' => Some(Self::Orange),
            d => d
                .to_digit(10)
                .and_then(|v| u8::try_from(v).ok())
                .and_then(Self::from_value),
        }
    }

    /// Draw a uniformly random peg
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..NUM_COLORS)]
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn values_round_trip() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_value(peg.value()), Some(peg));
        }
        assert_eq!(Peg::Red.value(), 1);
        assert_eq!(Peg::Orange.value(), 6);
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert_eq!(Peg::from_value(0), None);
        assert_eq!(Peg::from_value(7), None);
    }

    #[test]
    fn parses_digits_and_initials() {
        assert_eq!(Peg::from_char('1'), Some(Peg::Red));
        assert_eq!(Peg::from_char('6'), Some(Peg::Orange));
        assert_eq!(Peg::from_char('G'), Some(Peg::Green));
        assert_eq!(Peg::from_char('p'), Some(Peg::Purple));
        assert_eq!(Peg::from_char('7'), None);
        assert_eq!(Peg::from_char('0'), None);
        assert_eq!(Peg::from_char('x'), None);
    }

    #[test]
    fn random_covers_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; NUM_COLORS];
        for _ in 0..500 {
            seen[usize::from(Peg::random(&mut rng).value() - 1)] = true;
        }
        // Every color, including the last one, must be reachable
        assert!(seen.iter().all(|&s| s));
    }
}
