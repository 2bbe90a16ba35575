use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use othello::arena::{Arena, Pairing, Ply, SeriesStats};
use othello::config::AppConfig;
use othello::game::{Board, GameOutcome, Player};
use othello::logging;
use othello::ui::App;

/// Play Othello between humans, a greedy AI and random movers.
#[derive(Parser)]
#[command(name = "othello", about = "Play Othello in the terminal")]
struct Cli {
    /// Who plays whom; the first side moves first
    #[arg(long, value_enum)]
    pairing: Option<Pairing>,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Colour that moves first: light or dark
    #[arg(long, value_parser = parse_player)]
    first: Option<Player>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Play human games on the console instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Print series statistics as JSON
    #[arg(long)]
    json: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_player(raw: &str) -> Result<Player, String> {
    match raw.to_ascii_lowercase().as_str() {
        "light" | "white" | "1" => Ok(Player::Light),
        "dark" | "black" | "2" => Ok(Player::Dark),
        other => Err(format!("unknown player '{other}' (expected 'light' or 'dark')")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration; the configured filter is not known yet
    let mut config = logging::scoped("info", || AppConfig::load_or_default(&cli.config))
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(pairing) = cli.pairing {
        config.arena.pairing = pairing;
    }
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(first) = cli.first {
        config.arena.first_player = first;
    }
    config.validate().context("invalid configuration")?;

    if config.arena.pairing.has_human() && !cli.headless {
        return run_tui(&config).context("running terminal UI");
    }

    logging::init(&config.logging.filter);
    let mut stdout = io::stdout();
    let stats = run_arena(&config, cli.json, &mut stdout)?;
    write_report(&mut stdout, &stats, cli.json)?;

    Ok(())
}

/// Final output: one outcome line per game plus totals, or the JSON summary.
fn write_report(out: &mut impl Write, stats: &SeriesStats, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(&stats.summary())
            .context("serializing series summary")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    for result in stats.results() {
        writeln!(out, "{}", outcome_line(result.outcome))?;
    }
    if stats.games() > 1 {
        let summary = stats.summary();
        writeln!(
            out,
            "Light: {} wins | Dark: {} wins | Draws: {} | Avg plies: {:.1}",
            summary.light_wins, summary.dark_wins, summary.draws, summary.average_plies
        )?;
    }
    Ok(())
}

fn outcome_line(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(p) => format!("Player {} Wins", p.code()),
        GameOutcome::Draw => "It was a tie".to_string(),
    }
}

/// Play the configured series. Boards go to `out` only for a single game
/// and never alongside JSON output.
fn run_arena(config: &AppConfig, json: bool, out: &mut impl Write) -> Result<SeriesStats> {
    let arena = Arena::new(config.arena.clone(), config.board);
    let show_board = config.arena.show_board && config.arena.games == 1 && !json;

    if show_board {
        writeln!(out, "{}", arena.initial_state()?.board())?;
    }

    let mut written: io::Result<()> = Ok(());
    let stats = arena
        .run_series_with(|ply, state| {
            if show_board && written.is_ok() {
                written = write_ply(&mut *out, ply, state.board());
            }
        })
        .context("playing series")?;
    written.context("writing board")?;
    Ok(stats)
}

fn write_ply(out: &mut impl Write, ply: &Ply, board: &Board) -> io::Result<()> {
    match ply {
        Ply::Move { player, mv, flipped } => {
            writeln!(out, "{player} plays {mv}, flipping {flipped}")?
        }
        Ply::Pass { player } => writeln!(out, "No valid moves available for {player}, passing")?,
    }
    writeln!(out, "{board}")
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let (_, opponent_kind) = config.arena.pairing.sides();
    let opponent = opponent_kind.build(config.arena.seed);
    let human = config.arena.first_player;
    let mut app = App::new(config.board, config.arena.first_player, human, opponent)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
