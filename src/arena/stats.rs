use crate::game::{GameOutcome, Player, Score};

use super::GameRecord;

/// Result of a single game, stripped of the final board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub score: Score,
    pub plies: usize,
    pub passes: usize,
}

impl From<&GameRecord> for GameResult {
    fn from(record: &GameRecord) -> Self {
        GameResult {
            outcome: record.outcome,
            score: record.score,
            plies: record.plies,
            passes: record.passes,
        }
    }
}

/// Series tracker. Rate helpers look at the last `last_n` games.
#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    results: Vec<GameResult>,
}

/// Whole-series totals, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub light_wins: usize,
    pub dark_wins: usize,
    pub draws: usize,
    pub light_win_rate: f32,
    pub dark_win_rate: f32,
    pub draw_rate: f32,
    pub average_plies: f32,
    pub average_light_margin: f32,
}

impl SeriesStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        self.results.push(GameResult::from(record));
    }

    pub fn games(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    fn recent(&self, last_n: usize) -> &[GameResult] {
        let start = self.results.len().saturating_sub(last_n);
        &self.results[start..]
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&GameResult) -> bool) -> f32 {
        let window = self.recent(last_n);
        if window.is_empty() {
            return 0.0;
        }
        window.iter().filter(|r| pred(r)).count() as f32 / window.len() as f32
    }

    pub fn wins(&self, player: Player) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == GameOutcome::Winner(player))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == GameOutcome::Draw)
            .count()
    }

    /// Win rate for `player` in the last N games.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.outcome == GameOutcome::Winner(player))
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.outcome == GameOutcome::Draw)
    }

    /// Average number of moves per game in the last N games.
    pub fn average_plies(&self, last_n: usize) -> f32 {
        let window = self.recent(last_n);
        if window.is_empty() {
            return 0.0;
        }
        window.iter().map(|r| r.plies).sum::<usize>() as f32 / window.len() as f32
    }

    /// Average final piece lead of `player` in the last N games.
    pub fn average_margin(&self, player: Player, last_n: usize) -> f32 {
        let window = self.recent(last_n);
        if window.is_empty() {
            return 0.0;
        }
        let total: i64 = window
            .iter()
            .map(|r| r.score.of(player) as i64 - r.score.of(player.opponent()) as i64)
            .sum();
        total as f32 / window.len() as f32
    }

    pub fn summary(&self) -> SeriesSummary {
        let all = self.results.len();
        SeriesSummary {
            games: all,
            light_wins: self.wins(Player::Light),
            dark_wins: self.wins(Player::Dark),
            draws: self.draws(),
            light_win_rate: self.win_rate(Player::Light, all),
            dark_win_rate: self.win_rate(Player::Dark, all),
            draw_rate: self.draw_rate(all),
            average_plies: self.average_plies(all),
            average_light_margin: self.average_margin(Player::Light, all),
        }
    }
}
