mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move_for, select_move, select_move_for};
pub use game_state::TicTacToeMatch;
pub use settings::TicTacToeSettings;
pub use types::{CELL_COUNT, Difficulty, FirstPlayerMode, GRID_SIZE, GameStatus, Mark, Position};
pub use win_detector::{WINNING_LINES, check_win, check_win_at, lines_through};
