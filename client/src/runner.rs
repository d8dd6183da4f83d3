use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeMatch, TicTacToeSettings};
use common::log;

use crate::terminal_ui::{
    HELP_TEXT, MENU_TEXT, MenuChoice, PlayerCommand, describe_cell, first_player_text, is_yes,
    outcome_text, parse_menu_choice, parse_player_command, render_board,
};

enum RoundEnd {
    Finished,
    Quit,
}

/// Terminal front end. Owns nothing but the prompt loop: all game state
/// lives in `TicTacToeMatch`.
pub struct TerminalRunner<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    rng: &'a mut SessionRng,
}

impl<'a, R: BufRead, W: Write> TerminalRunner<'a, R, W> {
    pub fn new(input: R, output: W, rng: &'a mut SessionRng) -> Self {
        Self { input, output, rng }
    }

    /// `fixed_first_player` skips the start menu. Returns the difficulty in
    /// effect at exit.
    pub fn run(
        &mut self,
        difficulty: Difficulty,
        fixed_first_player: Option<FirstPlayerMode>,
    ) -> io::Result<Difficulty> {
        let mut difficulty = difficulty;
        let Some(first_player_mode) = self.choose_first_player(fixed_first_player, &mut difficulty)?
        else {
            return Ok(difficulty);
        };

        let settings = TicTacToeSettings {
            difficulty,
            first_player_mode,
        };
        let mut game = TicTacToeMatch::new(&settings, self.rng);

        loop {
            if let RoundEnd::Quit = self.play_round(&mut game)? {
                break;
            }

            if !self.ask_play_again(&mut game)? {
                break;
            }

            let mut difficulty = game.difficulty();
            let choice = self.choose_first_player(fixed_first_player, &mut difficulty)?;
            game.set_difficulty(difficulty);
            let Some(first_player_mode) = choice else {
                break;
            };
            game.new_round(first_player_mode, self.rng);
        }

        Ok(game.difficulty())
    }

    /// `d <value>` at the menu updates `difficulty` and shows the menu again.
    fn choose_first_player(
        &mut self,
        fixed_first_player: Option<FirstPlayerMode>,
        difficulty: &mut Difficulty,
    ) -> io::Result<Option<FirstPlayerMode>> {
        if let Some(mode) = fixed_first_player {
            return Ok(Some(mode));
        }

        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_menu_choice(&line) {
                Some(MenuChoice::Start(mode)) => return Ok(Some(mode)),
                Some(MenuChoice::Quit) => return Ok(None),
                None => match parse_player_command(&line) {
                    Ok(PlayerCommand::SetDifficulty(value)) => {
                        *difficulty = value;
                        writeln!(self.output, "Opponent difficulty: {}", value)?;
                    }
                    _ => writeln!(self.output, "Choose 1, 2, 3, d <0..1> or q")?,
                },
            }
        }
    }

    fn ask_play_again(&mut self, game: &mut TicTacToeMatch) -> io::Result<bool> {
        loop {
            writeln!(self.output, "Play again? [y/N]")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Ok(PlayerCommand::SetDifficulty(difficulty)) = parse_player_command(&line) {
                game.set_difficulty(difficulty);
                writeln!(self.output, "Opponent difficulty: {}", difficulty)?;
                continue;
            }
            return Ok(is_yes(&line));
        }
    }

    fn play_round(&mut self, game: &mut TicTacToeMatch) -> io::Result<RoundEnd> {
        writeln!(
            self.output,
            "{} Opponent difficulty: {}",
            first_player_text(game.first_player_mode(), game.is_player_turn()),
            game.difficulty()
        )?;
        writeln!(self.output, "{}", render_board(game.board(), None))?;

        while !game.status().is_over() {
            if game.is_player_turn() {
                if let RoundEnd::Quit = self.player_turn(game)? {
                    return Ok(RoundEnd::Quit);
                }
            } else {
                match game.play_opponent_turn(self.rng) {
                    Ok(index) => writeln!(self.output, "Opponent plays {}", describe_cell(index))?,
                    Err(e) => {
                        log!("Opponent move failed: {}", e);
                        return Ok(RoundEnd::Quit);
                    }
                }
            }
            let last_move = game.last_move().map(|(index, _)| index);
            writeln!(self.output, "{}", render_board(game.board(), last_move))?;
        }

        if let Some(text) = outcome_text(game.status()) {
            writeln!(self.output, "{}", text)?;
        }
        Ok(RoundEnd::Finished)
    }

    /// Prompts until a mark is placed or the player quits.
    fn player_turn(&mut self, game: &mut TicTacToeMatch) -> io::Result<RoundEnd> {
        loop {
            write!(self.output, "Your move (X): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(RoundEnd::Quit);
            };

            match parse_player_command(&line) {
                Ok(PlayerCommand::Place(index)) => match game.place_mark(index) {
                    Ok(()) => return Ok(RoundEnd::Finished),
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                Ok(PlayerCommand::SetDifficulty(difficulty)) => {
                    game.set_difficulty(difficulty);
                    writeln!(self.output, "Opponent difficulty: {}", difficulty)?;
                }
                Ok(PlayerCommand::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(PlayerCommand::Quit) => return Ok(RoundEnd::Quit),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
