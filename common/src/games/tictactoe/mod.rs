mod board;
mod bot_controller;
mod game_controller;
mod observer;
mod self_play;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotController, Evaluation, calculate_minimax_move, calculate_random_move, minimax,
};
pub use game_controller::{GameCommand, GameController};
pub use observer::GameObserver;
pub use self_play::{MatchTally, play_bot_match, play_series};
pub use settings::GameSettings;
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, FinalState, GameMode, GameStatus, LineKind, Mark, Player,
    Position, WinningLine,
};
