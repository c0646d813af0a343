use crate::controller::{GameController, GameMode, Phase};
use crate::console::outcome_message;
use crate::error::MoveError;
use crate::game::COLS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    controller: GameController,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(controller: GameController) -> Self {
        let mut app = App {
            controller,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        };
        app.answer_ai();
        app
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
                self.answer_ai();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.controller.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.controller.play(self.selected_column) {
            Ok(_) => {
                self.announce_outcome();
                self.answer_ai();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::ColumnOutOfRange(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Let the computer move if the turn is now its own.
    fn answer_ai(&mut self) {
        match self.controller.play_ai_turn() {
            Ok(Some(placement)) => {
                self.message = Some(format!("Computer played column {}", placement.column + 1));
                self.announce_outcome();
            }
            Ok(None) => {}
            Err(err) => {
                self.message = Some(format!("Computer could not move: {err}"));
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Phase::GameOver(outcome) = self.controller.phase() {
            self.message = Some(outcome_message(outcome, self.controller.mode()));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = match self.controller.mode() {
            GameMode::TwoPlayer => GameMode::TwoPlayer.label().to_string(),
            GameMode::VersusAi { ai_player } => {
                format!("{} ({})", self.controller.mode().label(), ai_player)
            }
        };
        super::game_view::render(
            frame,
            self.controller.state(),
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}
