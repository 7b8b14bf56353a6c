//! The ant/pheromone dynamics engine.

use crate::bias::DirectionalBias;
use crate::config::{AppConfig, Placement};
use crate::error::{Result, SwarmError};
use crate::lattice::Torus;
use crate::metrics::Metrics;
use crate::observer::FrameObserver;
use crate::pheromone::LatticeField;
use crate::population::AgentPopulation;
use crate::response::FieldResponse;
use crate::systems::{field, movement};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use stigmergy_data::{Agent, EdgeTable};

#[cfg(feature = "parallel")]
use crate::pheromone::DepositBuffer;

/// Lifecycle of a run. Termination is driven only by the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Initialized,
    Running,
    Terminated,
}

/// What a finished (or aborted) run looked like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub agents: usize,
    pub final_mass: f64,
    pub peak_concentration: f64,
    pub occupied_cells: usize,
    pub elapsed_ms: u64,
}

/// Couples the agent population to the pheromone field, one tick at a time.
///
/// Each tick first moves every agent against the field as it stood at the
/// start of the tick, then deposits at the new positions and decays the
/// field once.
pub struct DynamicsEngine {
    config: AppConfig,
    seed: u64,
    torus: Torus,
    edges: EdgeTable,
    bias: DirectionalBias,
    response: FieldResponse,
    field: LatticeField,
    population: AgentPopulation,
    /// Scripted start from `with_population`, restored on `reset`.
    initial: Option<Vec<Agent>>,
    state: EngineState,
    tick: u64,
    metrics: Metrics,
    #[cfg(feature = "parallel")]
    deposits: DepositBuffer,
}

impl DynamicsEngine {
    /// Validates `config` and lays out the population per `world.initial_placement`.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::build(config)?;
        engine.place_population();
        Ok(engine)
    }

    /// Starts from an explicit agent list instead of the configured placement.
    ///
    /// The list length overrides `world.agent_count`.
    pub fn with_population(mut config: AppConfig, agents: Vec<Agent>) -> Result<Self> {
        config.world.agent_count = agents.len();
        config.validate()?;
        let mut engine = Self::build(config)?;
        engine.population = AgentPopulation::from_agents(agents.clone(), engine.torus)?;
        engine.initial = Some(agents);
        Ok(engine)
    }

    fn build(config: AppConfig) -> Result<Self> {
        let torus = Torus::new(config.world.width, config.world.height)?;
        let edges = config.edge_table()?;
        let seed = config.world.seed.unwrap_or_else(rand::random);
        tracing::debug!(
            seed,
            width = torus.width(),
            height = torus.height(),
            agents = config.world.agent_count,
            steps = config.world.steps,
            "Engine initialized"
        );
        Ok(Self {
            seed,
            torus,
            edges,
            bias: DirectionalBias::new(config.movement.bias),
            response: FieldResponse::new(config.pheromone.beta, config.pheromone.delta),
            field: LatticeField::new(torus),
            population: AgentPopulation::new(config.world.agent_count, torus),
            initial: None,
            state: EngineState::Initialized,
            tick: 0,
            metrics: Metrics::new(config.output.log_interval),
            #[cfg(feature = "parallel")]
            deposits: DepositBuffer::new(torus),
            config,
        })
    }

    fn place_population(&mut self) {
        if let Some(initial) = &self.initial {
            self.population.agents_mut().copy_from_slice(initial);
            return;
        }
        match self.config.world.initial_placement {
            Placement::Random => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                self.population.randomize(&mut rng);
            }
            Placement::Origin => self.population.reset(),
        }
    }

    /// Advances one tick and returns the updated population.
    ///
    /// Any error ends the run: the engine moves to `Terminated`.
    pub fn step(&mut self) -> Result<&AgentPopulation> {
        let steps = self.config.world.steps;
        if self.state == EngineState::Terminated || self.tick >= steps {
            self.state = EngineState::Terminated;
            return Err(SwarmError::SimulationTerminated { steps });
        }
        self.state = EngineState::Running;

        let started = Instant::now();
        if let Err(err) = self.advance() {
            tracing::error!(tick = self.tick + 1, error = %err, "Tick aborted");
            self.state = EngineState::Terminated;
            return Err(err);
        }
        self.tick += 1;

        let stats = self.field.stats();
        self.metrics
            .record_tick(started.elapsed(), self.population.len(), &stats);
        tracing::debug!(tick = self.tick, mass = stats.total_mass, "Tick complete");

        if self.tick >= steps {
            self.state = EngineState::Terminated;
        }
        Ok(&self.population)
    }

    fn advance(&mut self) -> Result<()> {
        let ctx = movement::MovementContext {
            torus: &self.torus,
            edges: &self.edges,
            bias: &self.bias,
            response: &self.response,
            field: &self.field,
            seed: self.seed,
            tick: self.tick + 1,
        };
        let eta = self.config.pheromone.eta;
        let decay = self.config.decay_factor();

        #[cfg(feature = "parallel")]
        if self.config.world.parallel {
            movement::movement_phase_parallel(self.population.agents_mut(), &ctx)?;
            return field::field_update_phase_parallel(
                &mut self.field,
                &mut self.deposits,
                self.population.agents(),
                eta,
                decay,
            );
        }

        movement::movement_phase(self.population.agents_mut(), &ctx)?;
        field::field_update_phase(&mut self.field, self.population.agents(), eta, decay)
    }

    /// Runs every remaining tick, reporting each frame to `observer`.
    ///
    /// The observer sees the population once before the first tick (only
    /// when the engine has not stepped yet), after every tick, and receives
    /// the summary when the run ends.
    pub fn run<O: FrameObserver + ?Sized>(&mut self, observer: &mut O) -> Result<RunSummary> {
        if self.state == EngineState::Initialized {
            observer.on_initialized(&self.population);
        }
        while self.state != EngineState::Terminated && self.tick < self.config.world.steps {
            self.step()?;
            observer.on_tick(self.tick, &self.population, &self.field);
        }
        self.state = EngineState::Terminated;

        let summary = self.summary();
        tracing::info!(
            ticks = summary.ticks,
            agents = summary.agents,
            mass = summary.final_mass,
            elapsed_ms = summary.elapsed_ms,
            "Simulation finished"
        );
        observer.on_terminated(&summary);
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        let stats = self.field.stats();
        RunSummary {
            seed: self.seed,
            ticks: self.tick,
            agents: self.population.len(),
            final_mass: stats.total_mass,
            peak_concentration: stats.max_concentration,
            occupied_cells: stats.occupied_cells,
            elapsed_ms: self.metrics.busy_time().as_millis() as u64,
        }
    }

    /// Clears the field and restores the starting population: the scripted
    /// agents of [`with_population`](Self::with_population), or the configured
    /// placement regenerated from the seed.
    pub fn reset(&mut self) {
        self.field.reset();
        self.place_population();
        self.tick = 0;
        self.state = EngineState::Initialized;
        self.metrics.reset();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn field(&self) -> &LatticeField {
        &self.field
    }

    pub fn population(&self) -> &AgentPopulation {
        &self.population
    }

    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    pub fn bias(&self) -> &DirectionalBias {
        &self.bias
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
