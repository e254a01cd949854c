//! Assisted codebreaking
//!
//! The user holds a secret code; the computer guesses and the user types the
//! feedback for each guess.

use crate::core::{CodeSpace, Feedback};
use crate::game::GameError;
use crate::solver::SolverState;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run assisted codebreaking on the terminal
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_assist<R: Rng + ?Sized>(space: &CodeSpace, rng: &mut R) -> Result<(), GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_assist_with(space, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run assisted codebreaking over any reader and writer
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_assist_with<R, I, O>(
    space: &CodeSpace,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<(), GameError>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\nThink of a code of four pegs numbered 1-6.")?;
    writeln!(output, "After each guess, enter the feedback:\n")?;
    writeln!(output, "  - B for a right color in the right slot")?;
    writeln!(output, "  - W for a right color in the wrong slot")?;
    writeln!(output, "  - '-' for each remaining peg")?;
    writeln!(output, "  - Or type 'win' if I got it right!\n")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for a new game\n")?;

    let mut state = SolverState::new(space);
    let mut last = None;
    let mut turn = 1;

    loop {
        let guess = match state.next_guess(last.take(), rng) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "\n❌ {e}. Your feedback may be incorrect.")?;
                writeln!(output, "🔄 Starting over.\n")?;
                state.reset();
                turn = 1;
                continue;
            }
        };

        writeln!(output, "────────────────────────────────────────")?;
        writeln!(
            output,
            "Turn {turn}: {} candidates remaining",
            state.candidate_count()
        )?;
        writeln!(output, "Suggested guess: {guess}")?;

        let feedback = loop {
            write!(output, "Feedback (B/W/-, 'win', or command): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            match line.trim().to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                "new" | "n" => break None,
                "win" | "correct" | "yes" => break Some(Feedback::SOLVED),
                text => match text.parse::<Feedback>() {
                    Ok(feedback) => break Some(feedback),
                    Err(e) => writeln!(output, "❌ {e}")?,
                },
            }
        };

        match feedback {
            Some(feedback) if feedback.is_solved() => {
                writeln!(
                    output,
                    "\n🎉 Solved in {turn} {}!",
                    if turn == 1 { "guess" } else { "guesses" }
                )?;
                writeln!(output, "🔄 Think of a new code.\n")?;
                state.reset();
                turn = 1;
            }
            Some(feedback) => {
                last = Some((guess, feedback));
                turn += 1;
            }
            None => {
                writeln!(output, "\n🔄 New game started!\n")?;
                state.reset();
                turn = 1;
            }
        }
    }
}
