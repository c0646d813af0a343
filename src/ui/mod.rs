//! Full-screen terminal UI for playing a session.

mod app;
mod game_view;

pub use app::App;
