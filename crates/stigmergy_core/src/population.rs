//! The fixed-size ant population.

use crate::error::{Result, SwarmError};
use crate::lattice::Torus;
use rand::Rng;
use stigmergy_data::{Agent, Heading, PopulationSnapshot};

/// Contiguous agent storage. The length never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentPopulation {
    torus: Torus,
    agents: Vec<Agent>,
}

impl AgentPopulation {
    /// `count` agents in the canonical state: cell `(0, 0)`, heading 0.
    pub fn new(count: usize, torus: Torus) -> Self {
        Self {
            torus,
            agents: vec![Agent::default(); count],
        }
    }

    /// Adopts an explicit agent list, rejecting any agent off the lattice.
    pub fn from_agents(agents: Vec<Agent>, torus: Torus) -> Result<Self> {
        for agent in &agents {
            torus.index(agent.x, agent.y)?;
        }
        Ok(Self { torus, agents })
    }

    /// Gives every agent a uniformly random cell and heading.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (w, h) = (self.torus.width(), self.torus.height());
        for agent in &mut self.agents {
            agent.x = rng.gen_range(0..w);
            agent.y = rng.gen_range(0..h);
            agent.heading = Heading::from_index(rng.gen_range(0..Heading::COUNT));
        }
    }

    pub fn reset(&mut self) {
        self.agents.fill(Agent::default());
    }

    /// Overwrites one agent after checking it lies on the lattice.
    pub fn place(&mut self, index: usize, agent: Agent) -> Result<()> {
        self.torus.index(agent.x, agent.y)?;
        let len = self.agents.len();
        let slot = self.agents.get_mut(index).ok_or_else(|| {
            SwarmError::invalid_config(format!("agent index {index} out of range for {len}"))
        })?;
        *slot = agent;
        Ok(())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Agent> {
        self.agents.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn snapshot(&self, tick: u64) -> PopulationSnapshot {
        PopulationSnapshot {
            tick,
            width: self.torus.width(),
            height: self.torus.height(),
            agents: self.agents.clone(),
        }
    }
}
