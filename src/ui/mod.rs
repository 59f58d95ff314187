//! Terminal UI: play against a friend or the streak bot.

mod app;
mod game_view;

pub use app::App;
