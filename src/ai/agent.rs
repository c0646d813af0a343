use crate::game::GameState;

/// Interface for computer opponents.
pub trait Agent {
    /// Select a column (zero-based) for the active player of `state`.
    /// Returns `None` when no column can be played.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
