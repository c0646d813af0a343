//! Computer opponent: the agent interface and the threat-scanning heuristic.

mod agent;
mod heuristic;
pub mod threat;

pub use agent::Agent;
pub use heuristic::ThreatAgent;
pub use threat::{find_near_win, score_columns, select_column, Recommendation, Threat};
