//! Terminal UI for playing against an agent: board view, cursor and key
//! handling.

mod app;
mod game_view;

pub use app::App;
