//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Outcome, Peg};
use colored::{ColoredString, Colorize};

/// Render one peg as a colored disc
#[must_use]
pub fn peg_disc(peg: Peg) -> ColoredString {
    let disc = "●";
    match peg {
        Peg::Red => disc.red(),
        Peg::Yellow => disc.yellow(),
        Peg::Blue => disc.blue(),
        Peg::Green => disc.green(),
        Peg::Purple => disc.magenta(),
        Peg::Orange => disc.truecolor(255, 140, 0),
    }
}

/// Render a code as colored discs followed by its numbers
#[must_use]
pub fn code_to_discs(code: &Code) -> String {
    let discs: Vec<String> = code.pegs().iter().map(|&p| peg_disc(p).to_string()).collect();
    format!("{} {code}", discs.join(" "))
}

/// Render feedback as key pegs: ● exact, ○ wrong position, · no match
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    feedback
        .outcomes()
        .iter()
        .map(|o| match o {
            Outcome::Exact => '●',
            Outcome::WrongPosition => '○',
            Outcome::NoMatch => '·',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_all_none() {
        let feedback = Feedback::from_counts(0, 0).unwrap();
        assert_eq!(feedback_to_pegs(feedback), "····");
    }

    #[test]
    fn feedback_pegs_mixed() {
        let feedback = Feedback::from_counts(2, 1).unwrap();
        assert_eq!(feedback_to_pegs(feedback), "●●○·");
    }

    #[test]
    fn code_discs_end_with_numbers() {
        let code: Code = "1234".parse().unwrap();
        assert!(code_to_discs(&code).ends_with("[1, 2, 3, 4]"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
