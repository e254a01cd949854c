//! Interactive console game
//!
//! One or two humans at the terminal; with one human the computer takes the
//! other seat. Roles swap after every game.

use crate::core::{Code, CodeSpace};
use crate::game::{
    AnyPlayer, ComputerPlayer, Game, GameConfig, GameError, HumanPlayer, InputProvider, Player,
};
use crate::output::{print_outcome, print_round, print_scores};
use anyhow::{Result, anyhow};
use std::io::{self, BufRead, Write};

/// Attempts a human gets for each answer
pub const INPUT_ATTEMPTS: usize = 5;

/// Reads codes from the terminal
#[derive(Debug, Clone, Copy)]
pub struct ConsoleInput {
    attempts: usize,
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self {
            attempts: INPUT_ATTEMPTS,
        }
    }
}

impl InputProvider for ConsoleInput {
    fn read_code(&mut self, prompt: &str) -> Result<Code, GameError> {
        ask(prompt, "[four of 1-6, e.g. 1234 or RYBG]", self.attempts, |s| {
            s.parse::<Code>().map_err(|e| e.to_string())
        })
    }
}

/// Run the interactive game
///
/// # Errors
///
/// Returns an error if input cannot be read, a player runs out of attempts,
/// or the computer codebreaker is handed inconsistent feedback.
pub fn run_play(space: &CodeSpace, config: GameConfig, seed: Option<u64>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         Mastermind                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Pegs are numbered 1-6: red, yellow, blue, green, purple, orange.");
    println!("Feedback: B = right color and slot, W = right color wrong slot.\n");

    let num_players = ask("How many players?", "[1-2]", INPUT_ATTEMPTS, in_range(1, 2))?;

    let mut players = Vec::with_capacity(2);
    for i in 1..=num_players {
        let name = ask(
            &format!("Choose a name for Player {i}."),
            "[A-Za-z]",
            INPUT_ATTEMPTS,
            letters_only,
        )?;
        players.push(AnyPlayer::Human(HumanPlayer::new(
            name,
            ConsoleInput::default(),
        )));
    }
    if num_players == 1 {
        let computer = match seed {
            Some(seed) => ComputerPlayer::seeded(space, seed),
            None => ComputerPlayer::new(space),
        };
        players.push(AnyPlayer::Computer(computer));
    }
    let players: [AnyPlayer<'_, ConsoleInput>; 2] = players
        .try_into()
        .map_err(|_| anyhow!("A game needs exactly two players"))?;

    let choice = ask(
        &format!(
            "{}, would you like to be the codebreaker(1) or codemaker(2)?",
            players[0].name()
        ),
        "[1-2]",
        INPUT_ATTEMPTS,
        in_range(1, 2),
    )?;
    let mut game = Game::new(config, players, usize::from(choice != 1));

    loop {
        println!("\n{} is the codebreaker", game.codebreaker().name());
        println!("{} is the codemaker\n", game.codemaker().name());

        game.start()?;
        while !game.is_over() {
            let round = game.play_round()?;
            print_round(game.board().rounds().len(), &round);
        }

        let outcome = game.finish()?;
        print_outcome(&outcome);
        print_scores(game.scores());

        let again = ask("Play again?", "[y/n]", INPUT_ATTEMPTS, yes_or_no)?;
        if !again {
            println!("\nThanks for playing!\n");
            return Ok(());
        }
    }
}

fn ask<T>(
    prompt: &str,
    hint: &str,
    attempts: usize,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_until_valid(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &format!("{prompt} {hint}"),
        attempts,
        parse,
    )
}

/// Prompt until `parse` accepts a line or the attempts run out
///
/// # Errors
/// Returns `GameError::InputExhausted` after `attempts` rejected lines and
/// `GameError::Io` on read failure or end of input.
pub fn prompt_until_valid<R: BufRead, W: Write, T>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    attempts: usize,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, GameError> {
    for attempt in 1..=attempts {
        write!(writer, "{prompt}: ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(GameError::Io("unexpected end of input".to_string()));
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => writeln!(
                writer,
                "{e}. Please enter a valid input ({attempt}/{attempts} attempts)"
            )?,
            Err(e) => writeln!(writer, "{e}. No valid input in {attempts} attempts.")?,
        }
    }

    Err(GameError::InputExhausted { attempts })
}

fn in_range(min: u8, max: u8) -> impl Fn(&str) -> Result<u8, String> {
    move |s: &str| {
        s.parse::<u8>()
            .ok()
            .filter(|n| (min..=max).contains(n))
            .ok_or_else(|| format!("'{s}' is not a number from {min} to {max}"))
    }
}

fn letters_only(s: &str) -> Result<String, String> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' must be letters only"))
    }
}

fn yes_or_no(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(format!("'{s}' is not y or n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(
        input: &str,
        attempts: usize,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> (Result<T, GameError>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_until_valid(&mut reader, &mut output, "Q", attempts, parse);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_first_valid_line() {
        let (result, output) = run("2\n", 5, in_range(1, 2));
        assert_eq!(result, Ok(2));
        assert_eq!(output, "Q: ");
    }

    #[test]
    fn retries_after_invalid_lines() {
        let (result, output) = run("9\nabc\n1\n", 5, in_range(1, 2));
        assert_eq!(result, Ok(1));
        assert!(output.contains("(1/5 attempts)"));
        assert!(output.contains("(2/5 attempts)"));
    }

    #[test]
    fn gives_up_after_attempts() {
        let (result, output) = run("x\nx\nx\n1\n", 3, in_range(1, 2));
        assert_eq!(result, Err(GameError::InputExhausted { attempts: 3 }));
        assert!(output.contains("No valid input in 3 attempts"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = run("", 5, yes_or_no);
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn parses_codes() {
        let (result, _) = run("12\n 6 5 4 3 \n", 5, |s| {
            s.parse::<Code>().map_err(|e| e.to_string())
        });
        assert_eq!(result, Ok("6543".parse().unwrap()));
    }

    #[test]
    fn name_and_answer_validation() {
        assert!(letters_only("Ada").is_ok());
        assert!(letters_only("R2D2").is_err());
        assert!(letters_only("").is_err());
        assert_eq!(yes_or_no("Y"), Ok(true));
        assert_eq!(yes_or_no("no"), Ok(false));
        assert!(yes_or_no("maybe").is_err());
    }
}
