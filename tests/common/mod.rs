pub mod macros;

use stigmergy_core::config::{AppConfig, Placement};
use stigmergy_core::engine::DynamicsEngine;
use stigmergy_core::{Agent, Heading};

#[allow(dead_code)]
pub struct EngineBuilder {
    config: AppConfig,
    agents: Option<Vec<Agent>>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.width = 16;
        config.world.height = 16;
        config.world.agent_count = 0;
        config.world.steps = 100;
        config.world.seed = Some(1);
        config.output.log_interval = 0;
        Self {
            config,
            agents: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_lattice(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_random_agents(mut self, count: usize) -> Self {
        self.config.world.agent_count = count;
        self.config.world.initial_placement = Placement::Random;
        self
    }

    pub fn with_agent(mut self, x: u16, y: u16, heading: usize) -> Self {
        self.agents
            .get_or_insert_with(Vec::new)
            .push(Agent::new(x, y, Heading::from_index(heading)));
        self
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.config.world.steps = steps;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.config.world.parallel = false;
        self
    }

    pub fn parallel(mut self) -> Self {
        self.config.world.parallel = true;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> DynamicsEngine {
        match self.agents {
            Some(agents) => DynamicsEngine::with_population(self.config, agents)
                .expect("Failed to build engine with explicit agents"),
            None => DynamicsEngine::new(self.config).expect("Failed to build engine"),
        }
    }
}

/// Reference trail parameters: κ = 0.015, η = 0.07, β = 3.5, δ = 0.2.
#[allow(dead_code)]
pub fn trail_parameters(config: &mut AppConfig) {
    config.pheromone.kappa = 0.015;
    config.pheromone.eta = 0.07;
    config.pheromone.beta = 3.5;
    config.pheromone.delta = 0.2;
}
