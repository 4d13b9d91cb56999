use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{Difficulty, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// +1 when X wins, -1 when O wins, 0 for a draw.
    pub score: i32,
    pub best_move: Option<Position>,
    pub positions_evaluated: u64,
}

/// Computer opponent. Plays `player` using the configured difficulty and
/// never touches the board it is given.
#[derive(Debug, Clone)]
pub struct BotController {
    player: Player,
    difficulty: Difficulty,
}

impl BotController {
    pub fn new(player: Player, difficulty: Difficulty) -> Self {
        Self { player, difficulty }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn calculate_move(&self, board: &Board, rng: &mut SessionRng) -> Option<Position> {
        match self.difficulty {
            Difficulty::Random => calculate_random_move(board, rng),
            Difficulty::Optimal => calculate_minimax_move(board, self.player),
        }
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&board.empty_cells()).copied()
}

pub fn calculate_minimax_move(board: &Board, side_to_move: Player) -> Option<Position> {
    if board.final_state().is_terminal() {
        return None;
    }

    let evaluation = minimax(board, side_to_move.is_maximizer());
    if let Some(pos) = evaluation.best_move {
        log!(
            "Minimax picked {} for {} (score {}, {} positions evaluated)",
            pos,
            side_to_move,
            evaluation.score,
            evaluation.positions_evaluated
        );
    }
    evaluation.best_move
}

/// Exhaustive minimax without pruning. The mark placed at each ply is derived
/// from `maximizing` alone: X when maximizing, O otherwise.
pub fn minimax(board: &Board, maximizing: bool) -> Evaluation {
    let mut positions_evaluated = 0;
    let (score, best_move) = search(board, maximizing, &mut positions_evaluated);
    Evaluation {
        score,
        best_move,
        positions_evaluated,
    }
}

fn search(board: &Board, maximizing: bool, positions: &mut u64) -> (i32, Option<Position>) {
    *positions += 1;

    if let Some(score) = board.final_state().score() {
        return (score, None);
    }

    let mover = if maximizing { Player::X } else { Player::O };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for pos in board.empty_cells() {
        let mut child = board.clone();
        child.place_mark(pos, mover);
        let (score, _) = search(&child, !maximizing, positions);

        // strict comparison keeps the earliest row-major move on ties
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_moves;

    #[test]
    fn test_blocks_immediate_win() {
        let board = board_from_moves(&[(0, 0, Player::X), (0, 1, Player::X), (1, 1, Player::O)]);
        let bot = BotController::new(Player::O, Difficulty::Optimal);
        let mut rng = SessionRng::new(1);

        assert_eq!(bot.calculate_move(&board, &mut rng), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_takes_immediate_win_as_x() {
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (1, 0, Player::O),
            (0, 1, Player::X),
            (1, 1, Player::O),
        ]);

        let evaluation = minimax(&board, true);
        assert_eq!(evaluation.score, 1);
        assert_eq!(evaluation.best_move, Some(Position::new(0, 2)));
        assert_eq!(calculate_minimax_move(&board, Player::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw_and_searched_exhaustively() {
        let evaluation = minimax(&Board::new(), true);

        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.best_move, Some(Position::new(0, 0)));
        assert_eq!(evaluation.positions_evaluated, 549_946);
    }

    #[test]
    fn test_tie_break_prefers_first_row_major_corner() {
        // After X takes the centre every corner holds the draw and every edge loses.
        let board = board_from_moves(&[(1, 1, Player::X)]);

        let mut reply_scores = Vec::new();
        for pos in board.empty_cells() {
            let mut child = board.clone();
            child.place_mark(pos, Player::O);
            reply_scores.push((pos, minimax(&child, true).score));
        }
        let drawing: Vec<Position> = reply_scores
            .iter()
            .filter(|(_, score)| *score == 0)
            .map(|(pos, _)| *pos)
            .collect();
        assert_eq!(
            drawing,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 2)
            ]
        );

        assert_eq!(minimax(&board, false).best_move, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_mover_follows_maximizing_flag_not_bot_identity() {
        // An X bot asked to move on this board must place X and win on (0, 2).
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (1, 0, Player::O),
            (0, 1, Player::X),
            (1, 1, Player::O),
        ]);
        let bot = BotController::new(Player::X, Difficulty::Optimal);
        let mut rng = SessionRng::new(3);

        assert_eq!(bot.calculate_move(&board, &mut rng), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_minimax_does_not_mutate_input() {
        let board = board_from_moves(&[(0, 0, Player::X), (2, 2, Player::O)]);
        let before = board.clone();
        minimax(&board, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (1, 0, Player::O),
            (0, 1, Player::X),
            (1, 1, Player::O),
            (0, 2, Player::X),
        ]);

        let evaluation = minimax(&board, false);
        assert_eq!(evaluation.score, 1);
        assert_eq!(evaluation.best_move, None);
        assert_eq!(calculate_minimax_move(&board, Player::O), None);
    }

    #[test]
    fn test_random_move_is_an_empty_cell() {
        let board = board_from_moves(&[(0, 0, Player::X), (1, 1, Player::O), (2, 2, Player::X)]);
        let bot = BotController::new(Player::O, Difficulty::Random);

        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let pos = bot.calculate_move(&board, &mut rng).unwrap();
            assert!(board.is_cell_empty(pos));
        }
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 1, Player::O),
            (1, 0, Player::X),
            (1, 2, Player::O),
            (2, 1, Player::X),
            (2, 0, Player::O),
            (2, 2, Player::X),
        ]);
        let mut rng = SessionRng::new(5);
        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_set_difficulty() {
        let mut bot = BotController::new(Player::O, Difficulty::Optimal);
        bot.set_difficulty(Difficulty::Random);
        assert_eq!(bot.difficulty(), Difficulty::Random);
        assert_eq!(bot.player(), Player::O);
    }
}
