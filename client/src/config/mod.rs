mod config;
mod console_config;
mod game_config;
mod self_play_config;

pub use config::{Config, get_config_manager};
pub use console_config::{ConsoleConfig, EMPTY_CELL_SYMBOL};
pub use game_config::GameConfig;
pub use self_play_config::SelfPlayConfig;
