//! Game flow
//!
//! Two players take the codemaker and codebreaker roles. The codemaker sets
//! a secret, the codebreaker guesses until the code is cracked or the round
//! limit is hit, and the codemaker scores one point per round played. Roles
//! swap between games.

use super::GameError;
use super::board::{Board, Round};
use super::player::Player;
use crate::core::Code;
use log::info;

/// Configuration for a series of games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_rounds: 10 }
    }
}

/// How a finished game went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Code,
    pub rounds: usize,
    pub solved: bool,
    pub codemaker: String,
    pub codebreaker: String,
}

impl GameOutcome {
    /// Name of the player who won
    #[must_use]
    pub fn winner(&self) -> &str {
        if self.solved {
            &self.codebreaker
        } else {
            &self.codemaker
        }
    }
}

/// Two players, their scores and the board they share
pub struct Game<P: Player> {
    config: GameConfig,
    players: [P; 2],
    scores: [usize; 2],
    breaker: usize,
    board: Board,
    finished: bool,
}

impl<P: Player> Game<P> {
    /// Seat two players; `breaker` (0 or 1) picks who breaks first
    #[must_use]
    pub fn new(config: GameConfig, players: [P; 2], breaker: usize) -> Self {
        Self {
            config,
            players,
            scores: [0; 2],
            breaker: breaker.min(1),
            board: Board::new(),
            finished: false,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn codebreaker(&self) -> &P {
        &self.players[self.breaker]
    }

    #[must_use]
    pub fn codemaker(&self) -> &P {
        &self.players[1 - self.breaker]
    }

    /// Player names with their scores
    pub fn scores(&self) -> impl Iterator<Item = (&str, usize)> {
        self.players
            .iter()
            .zip(self.scores)
            .map(|(p, s)| (p.name(), s))
    }

    /// Clear the board and have the codemaker set a new secret
    ///
    /// # Errors
    /// Returns an error if the codemaker cannot provide a code.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.board.clear();
        self.finished = false;
        for player in &mut self.players {
            player.reset();
        }

        let secret = self.players[1 - self.breaker].make_code()?;
        self.board.set_secret(secret);
        info!(
            "{} sets the code, {} breaks",
            self.codemaker().name(),
            self.codebreaker().name()
        );
        Ok(())
    }

    /// Check if the current game has ended
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_solved() || self.board.rounds().len() >= self.config.max_rounds
    }

    /// Have the codebreaker make one guess and record its feedback
    ///
    /// # Errors
    /// Returns an error if the game was not started or the codebreaker
    /// cannot provide a guess.
    pub fn play_round(&mut self) -> Result<Round, GameError> {
        let last = self.board.last_round();
        let guess = self.players[self.breaker].make_guess(last)?;
        let feedback = self.board.place_guess(guess)?;

        info!(
            "round {}: {guess} scored {feedback}",
            self.board.rounds().len()
        );
        Ok(Round { guess, feedback })
    }

    /// Score the finished game and swap roles for the next one
    ///
    /// # Errors
    /// Returns `GameError::SecretNotSet` if the game was never started and
    /// `GameError::AlreadyFinished` if it was scored since the last `start`.
    pub fn finish(&mut self) -> Result<GameOutcome, GameError> {
        if self.finished {
            return Err(GameError::AlreadyFinished);
        }
        let secret = self.board.secret().ok_or(GameError::SecretNotSet)?;
        let rounds = self.board.rounds().len();
        let maker = 1 - self.breaker;
        self.scores[maker] += rounds;

        let outcome = GameOutcome {
            secret,
            rounds,
            solved: self.board.is_solved(),
            codemaker: self.players[maker].name().to_string(),
            codebreaker: self.players[self.breaker].name().to_string(),
        };
        info!("{} wins after {rounds} round(s)", outcome.winner());

        self.breaker = maker;
        self.finished = true;
        Ok(outcome)
    }

    /// Play a whole game without interruption
    ///
    /// # Errors
    /// Returns an error if either player fails to provide a code.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.start()?;
        while !self.is_over() {
            self.play_round()?;
        }
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeSpace;
    use crate::game::player::tests::ScriptedInput;
    use crate::game::player::{AnyPlayer, ComputerPlayer, HumanPlayer};

    fn human<'a>(name: &str, codes: &[&str]) -> AnyPlayer<'a, ScriptedInput> {
        AnyPlayer::Human(HumanPlayer::new(name, ScriptedInput::new(codes)))
    }

    #[test]
    fn human_game_scores_codemaker_per_round() {
        let players = [
            human("Maker", &["1234"]),
            human("Breaker", &["1111", "4321", "1234"]),
        ];
        let mut game = Game::new(GameConfig::default(), players, 1);

        let outcome = game.play().unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.winner(), "Breaker");
        assert_eq!(outcome.secret, "1234".parse().unwrap());

        let scores: Vec<_> = game.scores().collect();
        assert_eq!(scores, vec![("Maker", 3), ("Breaker", 0)]);
    }

    #[test]
    fn finish_scores_only_once() {
        let players = [
            human("Maker", &["1234"]),
            human("Breaker", &["1111", "1234"]),
        ];
        let mut game = Game::new(GameConfig::default(), players, 1);

        game.play().unwrap();
        assert_eq!(game.finish(), Err(GameError::AlreadyFinished));
        assert_eq!(game.codebreaker().name(), "Maker");

        let scores: Vec<_> = game.scores().collect();
        assert_eq!(scores, vec![("Maker", 2), ("Breaker", 0)]);
    }

    #[test]
    fn round_limit_ends_game() {
        let players = [
            human("Maker", &["6666"]),
            human("Breaker", &["1111", "2222", "3333"]),
        ];
        let config = GameConfig { max_rounds: 3 };
        let mut game = Game::new(config, players, 1);

        let outcome = game.play().unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.winner(), "Maker");
    }

    #[test]
    fn roles_swap_after_each_game() {
        let players = [human("A", &["1234"]), human("B", &["1234"])];
        let mut game = Game::new(GameConfig::default(), players, 0);
        assert_eq!(game.codebreaker().name(), "A");

        game.play().unwrap();
        assert_eq!(game.codebreaker().name(), "B");
        assert_eq!(game.codemaker().name(), "A");
    }

    #[test]
    fn computer_breaks_human_code() {
        let space = CodeSpace::generate();
        let players = [
            human("Maker", &["3625"]),
            AnyPlayer::Computer(ComputerPlayer::seeded(&space, 2024)),
        ];
        let config = GameConfig { max_rounds: 20 };
        let mut game = Game::new(config, players, 1);

        let outcome = game.play().unwrap();
        assert!(outcome.solved);
        assert_eq!(
            game.board().last_round().unwrap().guess,
            "3625".parse().unwrap()
        );
    }

    #[test]
    fn computer_starts_each_game_fresh() {
        let space = CodeSpace::generate();
        let players: [AnyPlayer<'_, ScriptedInput>; 2] = [
            AnyPlayer::Computer(ComputerPlayer::seeded(&space, 5)),
            AnyPlayer::Computer(ComputerPlayer::seeded(&space, 6)),
        ];
        let config = GameConfig { max_rounds: 20 };
        let mut game = Game::new(config, players, 0);

        for _ in 0..4 {
            let outcome = game.play().unwrap();
            assert!(outcome.solved, "lost track of {}", outcome.secret);
        }
    }

    #[test]
    fn play_round_before_start_fails() {
        let players = [human("A", &[]), human("B", &["1234"])];
        let mut game = Game::new(GameConfig::default(), players, 1);
        assert_eq!(game.play_round(), Err(GameError::SecretNotSet));
        assert_eq!(game.finish(), Err(GameError::SecretNotSet));
    }

    #[test]
    fn missing_input_propagates() {
        let players = [human("Maker", &[]), human("Breaker", &[])];
        let mut game = Game::new(GameConfig::default(), players, 1);
        assert!(matches!(
            game.play(),
            Err(GameError::InputExhausted { .. })
        ));
    }
}
