use super::types::{BOARD_SIZE, CELL_COUNT, FinalState, Mark, Player, Position};
use super::win_detector::check_win_with_line;

/// The 3x3 grid. Cloning yields a fully independent copy, which is what the
/// search relies on for hypothetical placements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    marked_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    /// Panics when `pos` is off the board.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Panics when the cell is already marked or off the board.
    pub fn place_mark(&mut self, pos: Position, player: Player) {
        assert!(
            self.is_cell_empty(pos),
            "cell {} is already marked with {:?}",
            pos,
            self.get(pos)
        );
        self.cells[pos.row][pos.col] = player.mark();
        self.marked_count += 1;
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(CELL_COUNT - self.marked_count);
        for (row, marks) in self.cells.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                if mark == Mark::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }

    pub fn marked_count(&self) -> usize {
        self.marked_count
    }

    pub fn is_full(&self) -> bool {
        self.marked_count == CELL_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.marked_count == 0
    }

    pub fn final_state(&self) -> FinalState {
        if let Some(line) = check_win_with_line(&self.cells) {
            return FinalState::Winner(line);
        }

        if self.is_full() {
            FinalState::Draw
        } else {
            FinalState::Undecided
        }
    }
}

#[cfg(test)]
pub(crate) fn board_from_moves(moves: &[(usize, usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(row, col, player) in moves {
        board.place_mark(Position::new(row, col), player);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{LineKind, WinningLine};

    fn walk_reachable(board: &Board, to_move: Player, visit: &mut impl FnMut(&Board)) {
        visit(board);
        if board.final_state().is_terminal() {
            return;
        }
        for pos in board.empty_cells() {
            let mut child = board.clone();
            child.place_mark(pos, to_move);
            walk_reachable(&child, to_move.opponent(), visit);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
        assert_eq!(board.final_state(), FinalState::Undecided);
    }

    #[test]
    fn test_place_mark_updates_cell_and_count() {
        let mut board = Board::new();
        board.place_mark(Position::new(1, 2), Player::O);

        assert_eq!(board.get(Position::new(1, 2)), Mark::O);
        assert!(!board.is_cell_empty(Position::new(1, 2)));
        assert_eq!(board.marked_count(), 1);
        assert!(!board.is_empty());
    }

    #[test]
    #[should_panic(expected = "already marked")]
    fn test_place_mark_on_marked_cell_panics() {
        let mut board = Board::new();
        board.place_mark(Position::new(0, 0), Player::X);
        board.place_mark(Position::new(0, 0), Player::O);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_position_panics() {
        let board = Board::new();
        board.is_cell_empty(Position::new(3, 0));
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let board = board_from_moves(&[(0, 1, Player::X), (1, 0, Player::O), (2, 2, Player::X)]);
        let expected = vec![
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
        ];
        assert_eq!(board.empty_cells(), expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = board_from_moves(&[(0, 0, Player::X)]);
        let mut copy = board.clone();
        copy.place_mark(Position::new(2, 2), Player::O);

        assert!(board.is_cell_empty(Position::new(2, 2)));
        assert_eq!(board.marked_count(), 1);
        assert_eq!(copy.marked_count(), 2);
    }

    #[test]
    fn test_final_state_winner_reports_line() {
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (1, 0, Player::O),
            (1, 1, Player::X),
            (2, 0, Player::O),
            (2, 2, Player::X),
        ]);
        assert_eq!(
            board.final_state(),
            FinalState::Winner(WinningLine::new(Player::X, LineKind::MainDiagonal))
        );
    }

    #[test]
    fn test_final_state_draw_on_full_board() {
        // X O X
        // X O O
        // O X X
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
        assert!(board.is_full());
        assert_eq!(board.final_state(), FinalState::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X
        // O X O
        // O X X
        let board = board_from_moves(&[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 0, Player::O),
            (1, 1, Player::X),
            (1, 2, Player::O),
            (2, 1, Player::X),
            (2, 0, Player::O),
            (2, 2, Player::X),
        ]);
        assert!(board.is_full());
        assert_eq!(board.final_state().winner(), Some(Player::X));
    }

    #[test]
    fn test_reachable_boards_keep_counts_consistent() {
        let mut visited = 0usize;
        walk_reachable(&Board::new(), Player::X, &mut |board| {
            visited += 1;
            let non_empty = (0..BOARD_SIZE)
                .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
                .filter(|&pos| board.get(pos) != Mark::Empty)
                .count();
            assert_eq!(board.marked_count(), non_empty);
            assert_eq!(board.empty_cells().len() + board.marked_count(), CELL_COUNT);
        });
        assert_eq!(visited, 549_946);
    }

    #[test]
    fn test_reachable_terminal_boards_score_consistently() {
        walk_reachable(&Board::new(), Player::X, &mut |board| {
            let state = board.final_state();
            match state {
                FinalState::Undecided => assert!(!board.is_full()),
                FinalState::Draw => {
                    assert!(board.is_full());
                    assert_eq!(state.score(), Some(0));
                }
                FinalState::Winner(line) => {
                    for pos in line.kind.cells() {
                        assert_eq!(board.get(pos), line.player.mark());
                    }
                    let expected = if line.player == Player::X { 1 } else { -1 };
                    assert_eq!(state.score(), Some(expected));
                }
            }
        });
    }
}
