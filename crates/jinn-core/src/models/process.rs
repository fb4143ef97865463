//! Saved process snapshots.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{GoalState, ProcessId, Strategy, StrategyId};

/// The part of a session that is persisted by an explicit save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProcessSnapshot {
    pub description: String,
    pub quantification: Option<String>,
    pub environment: Option<String>,
    pub strategies: Vec<Strategy>,
    pub selected_strategy_id: Option<StrategyId>,
}

impl From<&GoalState> for ProcessSnapshot {
    fn from(state: &GoalState) -> Self {
        Self {
            description: state.description.clone(),
            quantification: state.quantification.clone(),
            environment: state.environment.clone(),
            strategies: state.strategies.clone(),
            selected_strategy_id: state.selected_strategy_id.clone(),
        }
    }
}

/// A snapshot stored for one user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedProcess {
    pub id: ProcessId,
    pub user_id: String,
    #[serde(flatten)]
    pub snapshot: ProcessSnapshot,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
