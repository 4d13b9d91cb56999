mod app;
mod input;
mod renderer;

pub use app::run_interactive;
pub use renderer::ConsoleRenderer;
