use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

pub const MAX_SELF_PLAY_GAMES: u32 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub games: u32,
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("self-play games must be greater than 0".to_string());
        }
        if self.games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self-play games must not exceed {}",
                MAX_SELF_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            x_difficulty: Difficulty::Random,
            o_difficulty: Difficulty::Optimal,
            games: 100,
        }
    }
}
