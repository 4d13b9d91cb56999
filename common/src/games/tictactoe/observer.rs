use super::types::{Difficulty, FinalState, GameMode, Player, Position};

/// Notifications from the game core to whatever draws it.
pub trait GameObserver {
    fn on_mark_placed(&mut self, pos: Position, player: Player);

    fn on_game_ended(&mut self, outcome: &FinalState);

    fn on_board_reset(&mut self) {}

    fn on_mode_changed(&mut self, _mode: GameMode) {}

    fn on_difficulty_changed(&mut self, _difficulty: Difficulty) {}
}

impl GameObserver for () {
    fn on_mark_placed(&mut self, _pos: Position, _player: Player) {}

    fn on_game_ended(&mut self, _outcome: &FinalState) {}
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GameEvent {
    MarkPlaced(Position, Player),
    GameEnded(FinalState),
    BoardReset,
    ModeChanged(GameMode),
    DifficultyChanged(Difficulty),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
impl GameObserver for RecordingObserver {
    fn on_mark_placed(&mut self, pos: Position, player: Player) {
        self.events.push(GameEvent::MarkPlaced(pos, player));
    }

    fn on_game_ended(&mut self, outcome: &FinalState) {
        self.events.push(GameEvent::GameEnded(*outcome));
    }

    fn on_board_reset(&mut self) {
        self.events.push(GameEvent::BoardReset);
    }

    fn on_mode_changed(&mut self, mode: GameMode) {
        self.events.push(GameEvent::ModeChanged(mode));
    }

    fn on_difficulty_changed(&mut self, difficulty: Difficulty) {
        self.events.push(GameEvent::DifficultyChanged(difficulty));
    }
}
