use common::games::tictactoe::{Difficulty, GameCommand, Position};

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>  place a mark, rows and columns count from 0
  g            switch between human vs human and human vs computer
  r            start a new game
  0            random computer opponent
  1            optimal computer opponent
  h            show this help
  q            quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(GameCommand),
    Help,
    Quit,
}

/// Maps one line of user input to an action, using the same keys as the
/// graphical game: `g`, `r`, `0`, `1`, or a cell as `row col`.
pub fn parse_input(line: &str) -> Result<InputAction, String> {
    let normalized = line.replace(',', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err("Type a command, or 'h' for help".to_string()),
        [key] => match key.to_ascii_lowercase().as_str() {
            "g" => Ok(InputAction::Command(GameCommand::ToggleMode)),
            "r" => Ok(InputAction::Command(GameCommand::Reset)),
            "0" => Ok(InputAction::Command(GameCommand::SelectDifficulty(Difficulty::Random))),
            "1" => Ok(InputAction::Command(GameCommand::SelectDifficulty(Difficulty::Optimal))),
            "h" | "help" => Ok(InputAction::Help),
            "q" | "quit" | "exit" => Ok(InputAction::Quit),
            other => Err(format!("Unknown command '{}', type 'h' for help", other)),
        },
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row '{}'", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column '{}'", col))?;
            Ok(InputAction::Command(GameCommand::PlaceMark(Position::new(row, col))))
        }
        _ => Err("Expected '<row> <col>' or a single command key".to_string()),
    }
}
