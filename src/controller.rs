//! Turn state machine tying the board, win detection and the computer
//! opponent together. The controller owns the only `GameState` of a session.

use tracing::{debug, info};

use crate::ai::{Agent, ThreatAgent};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Placement, Player};

/// How the two seats are filled, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VersusAi { ai_player: Player },
}

impl GameMode {
    /// Mode from the number typed at the start prompt (1 = vs AI, 2 = two players).
    pub fn from_choice(choice: u8, ai_player: Player) -> Option<GameMode> {
        match choice {
            1 => Some(GameMode::VersusAi { ai_player }),
            2 => Some(GameMode::TwoPlayer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two players",
            GameMode::VersusAi { .. } => "Versus computer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    GameOver(GameOutcome),
}

pub struct GameController {
    state: GameState,
    mode: GameMode,
    agent: Option<Box<dyn Agent>>,
}

impl GameController {
    /// New session; the computer seat (if any) plays with OS randomness.
    pub fn new(mode: GameMode) -> Self {
        Self::with_agent(mode, Box::new(ThreatAgent::new()))
    }

    /// New session whose computer seat falls back to seeded random moves.
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_agent(mode, Box::new(ThreatAgent::with_seed(seed)))
    }

    pub fn with_agent(mode: GameMode, agent: Box<dyn Agent>) -> Self {
        let agent = match mode {
            GameMode::TwoPlayer => None,
            GameMode::VersusAi { .. } => Some(agent),
        };
        GameController {
            state: GameState::initial(),
            mode,
            agent,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        match self.state.outcome() {
            Some(outcome) => Phase::GameOver(outcome),
            None => Phase::AwaitingMove(self.state.active_player()),
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// True when the next move belongs to the computer.
    pub fn is_ai_turn(&self) -> bool {
        match (self.mode, self.phase()) {
            (GameMode::VersusAi { ai_player }, Phase::AwaitingMove(active)) => active == ai_player,
            _ => false,
        }
    }

    /// Play `column` (zero-based) for the active player. Rejected moves leave
    /// the session exactly as it was.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        let placement = self.state.apply_move_mut(column)?;
        if let Phase::GameOver(outcome) = self.phase() {
            info!(?outcome, turns = self.state.turn_count(), "game over");
        }
        Ok(placement)
    }

    /// Let the computer choose and play its column. Returns `Ok(None)` when
    /// it is not the computer's turn.
    pub fn play_ai_turn(&mut self) -> Result<Option<Placement>, MoveError> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let Some(agent) = self.agent.as_mut() else {
            return Ok(None);
        };
        let column = agent.select_action(&self.state).ok_or(MoveError::GameOver)?;
        debug!(agent = agent.name(), column, "computer move");
        self.play(column).map(Some)
    }

    /// Start over with an empty board, keeping the mode.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
    }
}
