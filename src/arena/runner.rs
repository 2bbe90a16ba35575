use crate::ai::Agent;
use crate::config::BoardConfig;
use crate::error::MatchError;
use crate::game::{GameState, Player};

use super::game_loop::{play_game, GameRecord, Ply};
use super::pairing::Pairing;
use super::stats::SeriesStats;

/// Arena configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub pairing: Pairing,
    /// Colour that moves first. The first side of the pairing plays it.
    pub first_player: Player,
    pub games: usize,
    /// Base seed for random agents; unset means OS entropy.
    pub seed: Option<u64>,
    /// Print the board after every ply when playing a single game.
    pub show_board: bool,
    pub log_interval: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            pairing: Pairing::AiVsRandom,
            first_player: Player::Light,
            games: 1,
            seed: None,
            show_board: true,
            log_interval: 10,
        }
    }
}

/// Plays series of games between the agents of a pairing.
pub struct Arena {
    config: ArenaConfig,
    board: BoardConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig, board: BoardConfig) -> Self {
        Arena { config, board }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Fresh opening position for the configured board.
    pub fn initial_state(&self) -> Result<GameState, MatchError> {
        Ok(GameState::new(
            self.board.width,
            self.board.height,
            self.config.first_player,
        )?)
    }

    /// Seeds for the two sides of game `index`, distinct per side and game.
    fn seeds(&self, index: usize) -> (Option<u64>, Option<u64>) {
        let base = self
            .config
            .seed
            .map(|s| s.wrapping_add(2 * index as u64));
        (base, base.map(|s| s.wrapping_add(1)))
    }

    /// Build `(light, dark)` agents for game `index`.
    fn seat_agents(&self, index: usize) -> (Box<dyn Agent>, Box<dyn Agent>) {
        let (first_kind, second_kind) = self.config.pairing.sides();
        let (first_seed, second_seed) = self.seeds(index);
        let first = first_kind.build(first_seed);
        let second = second_kind.build(second_seed);
        match self.config.first_player {
            Player::Light => (first, second),
            Player::Dark => (second, first),
        }
    }

    /// Play one game between the given agents.
    pub fn play_one(
        &self,
        light: &mut dyn Agent,
        dark: &mut dyn Agent,
        observer: impl FnMut(&Ply, &GameState),
    ) -> Result<GameRecord, MatchError> {
        play_game(self.initial_state()?, light, dark, observer)
    }

    /// Run the whole series without observing individual plies.
    pub fn run_series(&self) -> Result<SeriesStats, MatchError> {
        self.run_series_with(|_, _| {})
    }

    /// Run the whole series, letting `observer` see every ply of every game.
    pub fn run_series_with(
        &self,
        mut observer: impl FnMut(&Ply, &GameState),
    ) -> Result<SeriesStats, MatchError> {
        let mut stats = SeriesStats::new();
        let total = self.config.games;

        tracing::info!(
            pairing = self.config.pairing.label(),
            games = total,
            width = self.board.width,
            height = self.board.height,
            first = %self.config.first_player,
            "starting series"
        );

        for index in 0..total {
            let (mut light, mut dark) = self.seat_agents(index);
            let record = self.play_one(light.as_mut(), dark.as_mut(), &mut observer)?;
            tracing::debug!(
                game = index + 1,
                light = record.score.light,
                dark = record.score.dark,
                plies = record.plies,
                "game complete"
            );
            stats.record(&record);

            let played = index + 1;
            let window = self.config.log_interval.max(1);
            if played % window == 0 && played < total {
                tracing::info!(
                    "Game {}/{} | light: {:.1}% | dark: {:.1}% | draw: {:.1}% | avg_plies: {:.1}",
                    played,
                    total,
                    stats.win_rate(Player::Light, window) * 100.0,
                    stats.win_rate(Player::Dark, window) * 100.0,
                    stats.draw_rate(window) * 100.0,
                    stats.average_plies(window),
                );
            }
        }

        let summary = stats.summary();
        tracing::info!(
            games = summary.games,
            light_wins = summary.light_wins,
            dark_wins = summary.dark_wins,
            draws = summary.draws,
            "series complete"
        );

        Ok(stats)
    }
}
