use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    /// X is the maximizer in minimax.
    pub fn is_maximizer(&self) -> bool {
        *self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Column(usize),
    Row(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl LineKind {
    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        match *self {
            LineKind::Column(col) => [0, 1, 2].map(|row| Position::new(row, col)),
            LineKind::Row(row) => [0, 1, 2].map(|col| Position::new(row, col)),
            LineKind::MainDiagonal => [0, 1, 2].map(|i| Position::new(i, i)),
            LineKind::AntiDiagonal => [0, 1, 2].map(|i| Position::new(BOARD_SIZE - 1 - i, i)),
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Column(col) => write!(f, "column {}", col),
            LineKind::Row(row) => write!(f, "row {}", row),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind) -> Self {
        Self { player, kind }
    }

    pub fn start(&self) -> Position {
        self.kind.cells()[0]
    }

    pub fn end(&self) -> Position {
        self.kind.cells()[BOARD_SIZE - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalState {
    Undecided,
    Winner(WinningLine),
    Draw,
}

impl FinalState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FinalState::Undecided)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            FinalState::Winner(line) => Some(line.player),
            _ => None,
        }
    }

    /// Score from X's point of view. `None` while the game is undecided.
    pub fn score(&self) -> Option<i32> {
        match self {
            FinalState::Undecided => None,
            FinalState::Winner(line) if line.player == Player::X => Some(1),
            FinalState::Winner(_) => Some(-1),
            FinalState::Draw => Some(0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsComputer,
}

impl GameMode {
    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "human vs human"),
            GameMode::HumanVsComputer => write!(f, "human vs computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Random,
    #[default]
    Optimal,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Optimal => write!(f, "optimal"),
        }
    }
}
