mod config;
mod console;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::{ConfigManager, Validate};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, Player, play_series};
use common::{log, logger};

use config::{Config, get_config_manager};
use console::{ConsoleRenderer, run_interactive};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    HumanVsHuman,
    HumanVsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsComputer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Random,
    Optimal,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Random => Difficulty::Random,
            DifficultyArg::Optimal => Difficulty::Optimal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a minimax computer opponent")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Side played by the computer
    #[arg(long, value_enum)]
    computer: Option<PlayerArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Play this many computer-vs-computer games and print the tally
    #[arg(long, value_name = "GAMES")]
    self_play: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Disable log output on stderr
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.game.mode = mode.into();
        }
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty.into();
        }
        if let Some(computer) = self.computer {
            config.game.computer_player = computer.into();
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(games) = self.self_play {
            config.self_play.games = games;
        }
    }
}

fn load_config(args: &Args) -> Result<Config, String> {
    let mut config: Config = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()).get_or_create_config()?,
        None => get_config_manager().get_or_create_config()?,
    };
    args.apply_to(&mut config);
    config
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !args.quiet {
        let prefix = args.use_log_prefix.then(|| "Client".to_string());
        logger::init_logger(prefix);
    }

    let config = load_config(&args)?;
    let mut rng = SessionRng::from_seed_or_random(config.game.seed);
    log!("Session seed {}", rng.seed());

    if args.self_play.is_some() {
        let self_play = &config.self_play;
        let tally = play_series(
            self_play.x_difficulty,
            self_play.o_difficulty,
            self_play.games,
            &mut rng,
        );
        println!(
            "{} games, X ({}) vs O ({}): X won {}, O won {}, {} draws",
            tally.games(),
            self_play.x_difficulty,
            self_play.o_difficulty,
            tally.x_wins,
            tally.o_wins,
            tally.draws
        );
        return Ok(());
    }

    let renderer = ConsoleRenderer::new(config.console.x_symbol, config.console.o_symbol);
    run_interactive(
        &config.game.to_settings(),
        rng,
        renderer,
        config.console.show_help_on_start,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "tictactoe",
            "--mode",
            "human-vs-human",
            "--difficulty",
            "random",
            "--computer",
            "x",
            "--seed",
            "99",
            "--self-play",
            "5",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.game.mode, GameMode::HumanVsHuman);
        assert_eq!(config.game.difficulty, Difficulty::Random);
        assert_eq!(config.game.computer_player, Player::X);
        assert_eq!(config.game.seed, Some(99));
        assert_eq!(config.self_play.games, 5);
    }

    #[test]
    fn test_no_args_keep_config() {
        let args = Args::parse_from(["tictactoe"]);
        let mut config = Config::default();
        config.game.seed = Some(3);
        args.apply_to(&mut config);

        let expected = Config {
            game: config::GameConfig {
                seed: Some(3),
                ..config::GameConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_invalid_self_play_count_is_rejected() {
        let args = Args::parse_from(["tictactoe", "--self-play", "0"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert!(config.validate().is_err());
    }
}
