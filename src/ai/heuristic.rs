use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::agent::Agent;
use super::threat::select_column;
use crate::game::GameState;

/// Opponent that completes or blocks the first near-win it sees and plays a
/// random open column otherwise.
pub struct ThreatAgent {
    rng: StdRng,
}

impl ThreatAgent {
    pub fn new() -> Self {
        ThreatAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent whose random fallback moves are reproducible
    pub fn with_seed(seed: u64) -> Self {
        ThreatAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreatAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for ThreatAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let player = state.active_player();
        let pick = select_column(state.board(), player, &mut self.rng)?;
        debug!(
            %player,
            column = pick.column,
            score = pick.score,
            threat = ?pick.threat,
            "heuristic move"
        );
        Some(pick.column)
    }

    fn name(&self) -> &str {
        "Threat scanner"
    }
}
