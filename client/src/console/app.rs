use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{GameController, GameSettings};
use common::log;

use super::input::{HELP_TEXT, InputAction, parse_input};
use super::renderer::ConsoleRenderer;

fn prompt(controller: &GameController<ConsoleRenderer>) -> String {
    if controller.is_running() {
        format!("{} to move ({}) > ", controller.current_player(), controller.mode())
    } else {
        "Game over, 'r' to play again or 'q' to quit > ".to_string()
    }
}

/// Reads commands from stdin until `q` or end of input.
pub fn run_interactive(
    settings: &GameSettings,
    rng: SessionRng,
    renderer: ConsoleRenderer,
    show_help: bool,
) -> io::Result<()> {
    if show_help {
        println!("{}", HELP_TEXT);
    }

    println!("{}", renderer.render_board());
    let mut controller = GameController::new(settings, rng, renderer);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", prompt(&controller));
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_input(&line) {
            Ok(InputAction::Quit) => break,
            Ok(InputAction::Help) => println!("{}", HELP_TEXT),
            Ok(InputAction::Command(command)) => controller.handle_command(command),
            Err(e) => println!("{}", e),
        }

        print!("{}", prompt(&controller));
        stdout.flush()?;
    }

    println!();
    log!("Console session ended");
    Ok(())
}
