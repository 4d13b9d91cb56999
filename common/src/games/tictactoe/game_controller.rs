use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::BotController;
use super::observer::GameObserver;
use super::settings::GameSettings;
use super::types::{Difficulty, FinalState, GameMode, GameStatus, Player, Position};

/// Input coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    PlaceMark(Position),
    ToggleMode,
    Reset,
    SelectDifficulty(Difficulty),
}

/// Owns the board and turn order, and plays the computer's moves as soon as
/// it is the computer's turn.
pub struct GameController<O: GameObserver> {
    board: Board,
    current_player: Player,
    mode: GameMode,
    bot: BotController,
    status: GameStatus,
    outcome: FinalState,
    last_move: Option<Position>,
    rng: SessionRng,
    observer: O,
}

impl<O: GameObserver> GameController<O> {
    pub fn new(settings: &GameSettings, rng: SessionRng, observer: O) -> Self {
        log!(
            "New game: mode {}, difficulty {}, computer plays {}, seed {}",
            settings.mode,
            settings.difficulty,
            settings.computer_player,
            rng.seed()
        );

        let mut controller = Self {
            board: Board::new(),
            current_player: Player::X,
            mode: settings.mode,
            bot: BotController::new(settings.computer_player, settings.difficulty),
            status: GameStatus::InProgress,
            outcome: FinalState::Undecided,
            last_move: None,
            rng,
            observer,
        };
        controller.play_bot_turn();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.bot.difficulty()
    }

    pub fn computer_player(&self) -> Player {
        self.bot.player()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn outcome(&self) -> FinalState {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_bot_turn(&self) -> bool {
        self.is_running()
            && self.mode == GameMode::HumanVsComputer
            && self.current_player == self.bot.player()
    }

    pub fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::PlaceMark(pos) => {
                if let Err(e) = self.apply_move(pos) {
                    log!("Ignoring move at {}: {}", pos, e);
                }
            }
            GameCommand::ToggleMode => self.toggle_mode(),
            GameCommand::Reset => self.reset(),
            GameCommand::SelectDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }

    /// Places the current player's mark. When the computer is to move next it
    /// replies before this returns.
    pub fn apply_move(&mut self, pos: Position) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Waiting for the computer to move".to_string());
        }

        self.place_current(pos)?;
        self.play_bot_turn();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        log!("Mode set to {}", mode);
        self.observer.on_mode_changed(mode);
        self.play_bot_turn();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Applies from the next computer turn on.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.bot.set_difficulty(difficulty);
        log!("Difficulty set to {}", difficulty);
        self.observer.on_difficulty_changed(difficulty);
    }

    /// Starts a new game on an empty board. Mode and difficulty are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.outcome = FinalState::Undecided;
        self.last_move = None;

        log!("Game reset");
        self.observer.on_board_reset();
        self.play_bot_turn();
    }

    fn place_current(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_cell_empty(pos) {
            return Err("Cell is already marked".to_string());
        }

        let player = self.current_player;
        self.board.place_mark(pos, player);
        self.last_move = Some(pos);
        self.observer.on_mark_placed(pos, player);

        self.current_player = player.opponent();
        self.check_game_over();

        Ok(())
    }

    fn check_game_over(&mut self) {
        let outcome = self.board.final_state();
        if !outcome.is_terminal() {
            return;
        }

        self.outcome = outcome;
        self.status = GameStatus::Finished;

        match outcome {
            FinalState::Winner(line) => log!("{} wins on {}", line.player, line.kind),
            FinalState::Draw => log!("Game ended in a draw"),
            FinalState::Undecided => {}
        }
        self.observer.on_game_ended(&outcome);
    }

    fn play_bot_turn(&mut self) {
        if !self.is_bot_turn() {
            return;
        }

        let Some(pos) = self.bot.calculate_move(&self.board, &mut self.rng) else {
            log!("Computer found no move on a running game");
            return;
        };

        if let Err(e) = self.place_current(pos) {
            log!("Computer move at {} was rejected: {}", pos, e);
        }
    }
}
