use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::ai::Agent;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::game::{GameOutcome, GameState, Move, MoveError, Player};

pub struct App {
    game_state: GameState,
    board_config: BoardConfig,
    first_player: Player,
    human: Player,
    opponent: Box<dyn Agent>,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Human plays `human` against `opponent`. If the opponent moves first it
    /// replies straight away.
    pub fn new(
        board_config: BoardConfig,
        first_player: Player,
        human: Player,
        opponent: Box<dyn Agent>,
    ) -> Result<Self, BoardError> {
        let game_state = GameState::new(board_config.width, board_config.height, first_player)?;
        let mut app = App {
            game_state,
            board_config,
            first_player,
            human,
            opponent,
            cursor: (0, 0),
            should_quit: false,
            message: None,
        };
        app.start();
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Legal moves the human could make right now.
    pub fn hints(&self) -> Vec<Move> {
        if self.game_state.current_player() == self.human {
            self.game_state.legal_moves()
        } else {
            Vec::new()
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let (row, col) = self.cursor;
        let board = self.game_state.board();
        let (max_row, max_col) = (board.height() - 1, board.width() - 1);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.cursor.0 = row.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (row + 1).min(max_row),
            KeyCode::Left => self.cursor.1 = col.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (col + 1).min(max_col),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.message = None;
                self.place_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some(match self.message.take() {
                    Some(note) => format!("New game started! {note}"),
                    None => "New game started!".to_string(),
                });
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match GameState::new(
            self.board_config.width,
            self.board_config.height,
            self.first_player,
        ) {
            Ok(state) => {
                self.game_state = state;
                self.message = None;
                self.start();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn start(&mut self) {
        self.advance(Vec::new());
        self.cursor = self
            .hints()
            .first()
            .map(|mv| (mv.row, mv.col))
            .unwrap_or((0, 0));
    }

    /// Place a piece for the human at the cursor
    fn place_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != self.human {
            return;
        }

        let mv = Move::new(self.cursor.0, self.cursor.1);
        match self.game_state.apply_move(mv) {
            Ok(flipped) => {
                let plural = if flipped == 1 { "" } else { "s" };
                self.advance(vec![format!("You played {mv}, flipping {flipped} piece{plural}.")]);
            }
            Err(MoveError::IllegalMove { .. }) => {
                self.message = Some(format!("{mv} is not a legal move."));
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Let the opponent move and apply forced passes until the human has a
    /// move to make or the game ends.
    fn advance(&mut self, mut notes: Vec<String>) {
        while !self.game_state.is_terminal() {
            let player = self.game_state.current_player();

            if self.game_state.legal_moves().is_empty() {
                if let Err(e) = self.game_state.pass_turn() {
                    notes.push(e.to_string());
                    break;
                }
                let who = if player == self.human { "You have" } else { "Opponent has" };
                notes.push(format!("{who} no legal moves; turn passes."));
                continue;
            }

            if player == self.human {
                break;
            }

            match self.opponent.select_move(self.game_state.board(), player) {
                Some(mv) => match self.game_state.apply_move(mv) {
                    Ok(_) => notes.push(format!("{} played {mv}.", self.opponent.name())),
                    Err(e) => {
                        notes.push(format!("{} failed: {e}", self.opponent.name()));
                        break;
                    }
                },
                None => {
                    notes.push(format!("{} did not move.", self.opponent.name()));
                    break;
                }
            }
        }

        if let Some(outcome) = self.game_state.outcome() {
            let score = self.game_state.score();
            notes.push(match outcome {
                GameOutcome::Winner(p) if p == self.human => {
                    format!("You win {}-{}!", score.of(p), score.of(p.opponent()))
                }
                GameOutcome::Winner(p) => {
                    format!("{} wins {}-{}.", p.name(), score.of(p), score.of(p.opponent()))
                }
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }

        if !notes.is_empty() {
            self.message = Some(notes.join(" "));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyAgent, RandomAgent};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(human: Player) -> App {
        App::new(
            BoardConfig::default(),
            Player::Light,
            human,
            Box::new(GreedyAgent::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_cursor_starts_on_a_hint() {
        let app = app(Player::Light);
        let (row, col) = app.cursor();
        assert!(app.hints().contains(&Move::new(row, col)));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app(Player::Light);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Up));
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.cursor(), (0, 0));
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor(), (7, 7));
    }

    #[test]
    fn test_human_move_gets_a_reply() {
        let mut app = app(Player::Light);
        // cursor starts on (2, 4), the first legal Light move
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().plies(), 2);
        assert_eq!(app.state().current_player(), Player::Light);
        assert!(app.message().unwrap().contains("Greedy played"));
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut app = app(Player::Light);
        for _ in 0..8 {
            app.handle_key(key(KeyCode::Up));
            app.handle_key(key(KeyCode::Left));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().plies(), 0);
        assert_eq!(app.message(), Some("(0, 0) is not a legal move."));
    }

    #[test]
    fn test_opponent_opens_when_human_is_second() {
        let app = App::new(
            BoardConfig::default(),
            Player::Light,
            Player::Dark,
            Box::new(RandomAgent::with_seed(2)),
        )
        .unwrap();
        assert_eq!(app.state().plies(), 1);
        assert_eq!(app.state().current_player(), Player::Dark);
        assert!(!app.hints().is_empty());
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app(Player::Light);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.state().plies(), 0);
        assert!(app.message().unwrap().starts_with("New game started!"));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_game_plays_out_from_keys() {
        let mut app = App::new(
            BoardConfig { width: 4, height: 4 },
            Player::Light,
            Player::Light,
            Box::new(RandomAgent::with_seed(8)),
        )
        .unwrap();

        for _ in 0..32 {
            if app.state().is_terminal() {
                break;
            }
            let mv = app.hints()[0];
            app.cursor = (mv.row, mv.col);
            app.handle_key(key(KeyCode::Enter));
        }
        assert!(app.state().is_terminal());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
    }
}
