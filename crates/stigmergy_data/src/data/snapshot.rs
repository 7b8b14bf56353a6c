use super::agent::Agent;
use serde::{Deserialize, Serialize};

/// Owned copy of the population at a tick boundary, handed to consumers
/// that outlive the borrow of the engine (trace files, remote viewers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub agents: Vec<Agent>,
}

impl PopulationSnapshot {
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
