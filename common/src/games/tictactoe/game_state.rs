use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::settings::TicTacToeSettings;
use super::types::{CELL_COUNT, Difficulty, FirstPlayerMode, GameStatus, Mark};

/// Owns everything a round needs: the live board, the opponent's difficulty
/// and whose turn it is. The human plays `X`, the opponent `O`.
#[derive(Debug)]
pub struct TicTacToeMatch {
    board: Board,
    difficulty: Difficulty,
    first_player_mode: FirstPlayerMode,
    player_turn: bool,
    status: GameStatus,
    last_move: Option<(usize, Mark)>,
}

impl TicTacToeMatch {
    pub fn new(settings: &TicTacToeSettings, rng: &mut SessionRng) -> Self {
        let player_turn = resolve_player_first(settings.first_player_mode, rng);
        log!(
            "New match: difficulty {}, {} moves first",
            settings.difficulty,
            if player_turn { "player" } else { "opponent" }
        );

        Self {
            board: Board::new(),
            difficulty: settings.difficulty,
            first_player_mode: settings.first_player_mode,
            player_turn,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn first_player_mode(&self) -> FirstPlayerMode {
        self.first_player_mode
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn last_move(&self) -> Option<(usize, Mark)> {
        self.last_move
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if !self.player_turn {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(index, Mark::PLAYER) {
            return Err("Cell is already marked".to_string());
        }

        log!("Player placed {} at {}", Mark::PLAYER, index);
        self.finish_move(index, Mark::PLAYER);
        Ok(())
    }

    pub fn play_opponent_turn(&mut self, rng: &mut SessionRng) -> Result<usize, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.player_turn {
            return Err("Not the opponent's turn".to_string());
        }

        let index = select_move(&mut self.board, self.difficulty, rng);
        if !self.board.apply_move(index, Mark::OPPONENT) {
            return Err(format!("Opponent picked an occupied cell {}", index));
        }

        log!("Opponent placed {} at {}", Mark::OPPONENT, index);
        self.finish_move(index, Mark::OPPONENT);
        Ok(index)
    }

    pub fn new_round(&mut self, first_player_mode: FirstPlayerMode, rng: &mut SessionRng) {
        self.board = Board::new();
        self.first_player_mode = first_player_mode;
        self.player_turn = resolve_player_first(first_player_mode, rng);
        self.status = GameStatus::InProgress;
        self.last_move = None;
        log!(
            "New round: {} moves first",
            if self.player_turn { "player" } else { "opponent" }
        );
    }

    fn finish_move(&mut self, index: usize, mark: Mark) {
        self.last_move = Some((index, mark));
        debug_assert_eq!(
            self.board.winner(),
            super::win_detector::check_win(self.board.cells())
        );

        self.status = match self.board.winner() {
            Some(Mark::X) => GameStatus::PlayerWon,
            Some(Mark::O) => GameStatus::OpponentWon,
            _ if self.board.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        };

        if self.status.is_over() {
            log!("Round over: {:?}", self.status);
        } else {
            self.player_turn = !self.player_turn;
        }
    }
}

fn resolve_player_first(mode: FirstPlayerMode, rng: &mut SessionRng) -> bool {
    match mode {
        FirstPlayerMode::GoFirst => true,
        FirstPlayerMode::GoSecond => false,
        FirstPlayerMode::CoinToss => rng.random_bool(),
    }
}
