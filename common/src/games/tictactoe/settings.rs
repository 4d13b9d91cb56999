use super::types::{Difficulty, GameMode, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_player: Player,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsComputer,
            difficulty: Difficulty::Optimal,
            computer_player: Player::O,
        }
    }
}
