use common::games::tictactoe::{
    BOARD_SIZE, Difficulty, FinalState, GameMode, GameObserver, Mark, Player, Position,
};

use crate::config::EMPTY_CELL_SYMBOL;

/// Text stand-in for the game window. It keeps its own copy of what has been
/// drawn, the way a canvas would, and redraws after every change.
pub struct ConsoleRenderer {
    x_symbol: char,
    o_symbol: char,
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl ConsoleRenderer {
    pub fn new(x_symbol: char, o_symbol: char) -> Self {
        Self {
            x_symbol,
            o_symbol,
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.x_symbol,
            Mark::O => self.o_symbol,
            Mark::Empty => EMPTY_CELL_SYMBOL,
        }
    }

    pub fn render_board(&self) -> String {
        let mut out = String::from("    0   1   2\n");
        for (row, marks) in self.cells.iter().enumerate() {
            let cells: Vec<String> = marks
                .iter()
                .map(|&mark| format!(" {} ", self.symbol(mark)))
                .collect();
            out.push_str(&format!("{}  {}\n", row, cells.join("|")));
            if row + 1 < BOARD_SIZE {
                out.push_str("   ---+---+---\n");
            }
        }
        out
    }

    pub fn describe_outcome(&self, outcome: &FinalState) -> String {
        match outcome {
            FinalState::Winner(line) => format!(
                "{} wins on {}, from {} to {}",
                self.symbol(line.player.mark()),
                line.kind,
                line.start(),
                line.end()
            ),
            FinalState::Draw => "Draw, the board is full".to_string(),
            FinalState::Undecided => "Game in progress".to_string(),
        }
    }
}

impl GameObserver for ConsoleRenderer {
    fn on_mark_placed(&mut self, pos: Position, player: Player) {
        self.cells[pos.row][pos.col] = player.mark();
        println!("{} marks {}", self.symbol(player.mark()), pos);
        println!("{}", self.render_board());
    }

    fn on_game_ended(&mut self, outcome: &FinalState) {
        println!("{}", self.describe_outcome(outcome));
    }

    fn on_board_reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        println!("New game");
        println!("{}", self.render_board());
    }

    fn on_mode_changed(&mut self, mode: GameMode) {
        println!("Mode: {}", mode);
    }

    fn on_difficulty_changed(&mut self, difficulty: Difficulty) {
        println!("Computer difficulty: {}", difficulty);
    }
}
