//! Match infrastructure: the turn loop that drives two agents through a game,
//! pairings, series runner and result statistics.

mod game_loop;
mod pairing;
mod runner;
mod stats;

pub use game_loop::{play_game, GameRecord, Ply};
pub use pairing::{AgentKind, Pairing};
pub use runner::{Arena, ArenaConfig};
pub use stats::{GameResult, SeriesStats, SeriesSummary};
