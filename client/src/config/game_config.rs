use common::games::tictactoe::{Difficulty, GameMode, GameSettings, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_player: Player,
    /// Fixed RNG seed for the random opponent; a fresh seed per run when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            mode: self.mode,
            difficulty: self.difficulty,
            computer_player: self.computer_player,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            mode: settings.mode,
            difficulty: settings.difficulty,
            computer_player: settings.computer_player,
            seed: None,
        }
    }
}
