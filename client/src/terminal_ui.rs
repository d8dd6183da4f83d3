use common::games::tictactoe::{
    Board, CELL_COUNT, Difficulty, FirstPlayerMode, GRID_SIZE, GameStatus, Mark, Position,
};

pub const MENU_TEXT: &str = "\
Tic-Tac-Toe
  1) Go First
  2) Go Second
  3) Coin Toss
  d <0..1>) Set opponent difficulty
  q) Quit";

pub const HELP_TEXT: &str = "\
Enter a cell number 1-9, or 'row col' (1-3 each).
  d <0..1>  set opponent difficulty
  q         quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Start(FirstPlayerMode),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    Place(usize),
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(MenuChoice::Start(FirstPlayerMode::GoFirst)),
        "2" => Some(MenuChoice::Start(FirstPlayerMode::GoSecond)),
        "3" => Some(MenuChoice::Start(FirstPlayerMode::CoinToss)),
        "q" | "quit" => Some(MenuChoice::Quit),
        _ => None,
    }
}

pub fn parse_player_command(line: &str) -> Result<PlayerCommand, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => Err("Enter a move".to_string()),
        ["q" | "quit"] => Ok(PlayerCommand::Quit),
        ["h" | "help" | "?"] => Ok(PlayerCommand::Help),
        ["d" | "difficulty", value] => {
            let value: f64 = value
                .parse()
                .map_err(|_| format!("Invalid difficulty: {}", value))?;
            Ok(PlayerCommand::SetDifficulty(Difficulty::new(value)?))
        }
        [cell] => {
            let cell = parse_one_based(cell, CELL_COUNT)?;
            Ok(PlayerCommand::Place(cell))
        }
        [row, col] => {
            let row = parse_one_based(row, GRID_SIZE)?;
            let col = parse_one_based(col, GRID_SIZE)?;
            Ok(PlayerCommand::Place(Position::new(row, col).to_index()))
        }
        _ => Err(format!("Unrecognized input: {}", line.trim())),
    }
}

fn parse_one_based(text: &str, max: usize) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value - 1),
        _ => Err(format!("Expected a number between 1 and {}, got {}", max, text)),
    }
}

/// Empty cells show their 1-based number so they can be typed directly.
/// The last placed mark is bracketed.
pub fn render_board(board: &Board, last_move: Option<usize>) -> String {
    let mut lines = Vec::with_capacity(GRID_SIZE * 2 - 1);
    for row in 0..GRID_SIZE {
        if row > 0 {
            lines.push("---+---+---".to_string());
        }
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|col| {
                let index = Position::new(row, col).to_index();
                match board.cell(index) {
                    Some(Mark::Empty) | None => format!(" {} ", index + 1),
                    Some(mark) if last_move == Some(index) => format!("[{}]", mark),
                    Some(mark) => format!(" {} ", mark),
                }
            })
            .collect();
        lines.push(cells.join("|"));
    }
    lines.join("\n")
}

pub fn describe_cell(index: usize) -> String {
    let position = Position::from_index(index);
    format!("{} (row {}, col {})", index + 1, position.row + 1, position.col + 1)
}

pub fn first_player_text(mode: FirstPlayerMode, player_first: bool) -> String {
    let starter = if player_first { "You go" } else { "Opponent goes" };
    match mode {
        FirstPlayerMode::CoinToss => format!("Coin toss: {} first.", starter.to_lowercase()),
        FirstPlayerMode::GoFirst | FirstPlayerMode::GoSecond => format!("{} first.", starter),
    }
}

pub fn outcome_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::PlayerWon => Some("YOU WIN!"),
        GameStatus::OpponentWon => Some("YOU LOSE!"),
        GameStatus::Draw => Some("DRAW!"),
        GameStatus::InProgress => None,
    }
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
