use crate::games::SessionRng;
use super::board::Board;
use super::types::{Difficulty, Mark};

/// Picks the opponent's (`O`) move.
///
/// With probability `difficulty` the move is minimax-optimal, otherwise it is
/// a uniformly random legal move. The roll happens on every call, so a game
/// mixes both kinds of moves.
///
/// # Panics
/// If the board has no available moves.
pub fn select_move(board: &mut Board, difficulty: Difficulty, rng: &mut SessionRng) -> usize {
    select_move_for(board, Mark::OPPONENT, difficulty, rng)
}

pub fn select_move_for(
    board: &mut Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> usize {
    let available_moves = board.available_moves();
    assert!(
        !available_moves.is_empty(),
        "select_move called on a board with no available moves"
    );
    assert_ne!(bot_mark, Mark::Empty, "select_move needs a player mark");

    let roll: f64 = rng.random();
    if roll > difficulty.value()
        && let Some(index) = calculate_random_move(&available_moves, rng)
    {
        return index;
    }

    best_move_for(board, bot_mark)
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves).copied()
}

/// Exhaustive minimax over the remaining game. Ties go to the lowest index.
///
/// # Panics
/// If the board has no available moves or `bot_mark` is `Mark::Empty`.
pub fn best_move_for(board: &mut Board, bot_mark: Mark) -> usize {
    let available_moves = board.available_moves();
    assert!(
        !available_moves.is_empty(),
        "best_move_for called on a board with no available moves"
    );
    assert_ne!(bot_mark, Mark::Empty, "best_move_for needs a player mark");

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for index in available_moves {
        let previous_winner = board.winner();
        board.apply_move(index, bot_mark);

        let score = minimax(board, bot_mark, i32::MIN, i32::MAX, false);

        board.rollback(index, previous_winner);

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    best_move
}

/// +1 when `bot_mark` wins, -1 when its opponent wins, 0 for a draw.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
    is_maximizing: bool,
) -> i32 {
    let Some(human_mark) = bot_mark.opponent() else {
        return 0;
    };

    match board.winner() {
        Some(winner) if winner == bot_mark => return 1,
        Some(winner) if winner == human_mark => return -1,
        _ => {}
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let previous_winner = board.winner();
            board.apply_move(index, bot_mark);
            let eval = minimax(board, bot_mark, alpha, beta, false);
            board.rollback(index, previous_winner);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            let previous_winner = board.winner();
            board.apply_move(index, human_mark);
            let eval = minimax(board, bot_mark, alpha, beta, true);
            board.rollback(index, previous_winner);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
