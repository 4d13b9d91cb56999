use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::BotController;
use super::types::{Difficulty, FinalState, Player};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchTally {
    pub fn record(&mut self, outcome: &FinalState) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None if *outcome == FinalState::Draw => self.draws += 1,
            None => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game between two bots, X moving first, and returns the final state.
pub fn play_bot_match(x: Difficulty, o: Difficulty, rng: &mut SessionRng) -> FinalState {
    let bots = [BotController::new(Player::X, x), BotController::new(Player::O, o)];
    let mut board = Board::new();
    let mut to_move = Player::X;

    loop {
        let state = board.final_state();
        if state.is_terminal() {
            return state;
        }

        let bot = &bots[usize::from(to_move == Player::O)];
        let Some(pos) = bot.calculate_move(&board, rng) else {
            return state;
        };
        board.place_mark(pos, to_move);
        to_move = to_move.opponent();
    }
}

pub fn play_series(x: Difficulty, o: Difficulty, games: u32, rng: &mut SessionRng) -> MatchTally {
    let mut tally = MatchTally::default();
    for game in 0..games {
        let outcome = play_bot_match(x, o, rng);
        log!("Self-play game {}: {:?}", game + 1, outcome);
        tally.record(&outcome);
    }
    tally
}
