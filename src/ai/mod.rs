//! Move selection strategies: uniform random, one-ply greedy, and a console
//! human player, all behind the [`Agent`] trait.

mod agent;
mod greedy;
mod human;
mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use human::{parse_and_validate, ConsoleAgent};
pub use random::RandomAgent;
