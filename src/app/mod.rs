//! Headless run loop around the dynamics engine.

use anyhow::{Context, Result};
use std::path::Path;
use stigmergy_core::config::AppConfig;
use stigmergy_core::engine::{DynamicsEngine, RunSummary};
use stigmergy_core::observer::FrameObserver;

/// Command-line adjustments layered over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub steps: Option<u64>,
    pub seed: Option<u64>,
    pub agents: Option<usize>,
    pub trace_interval: Option<u64>,
    pub sequential: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(steps) = self.steps {
            config.world.steps = steps;
        }
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        if let Some(agents) = self.agents {
            config.world.agent_count = agents;
        }
        if let Some(interval) = self.trace_interval {
            config.output.trace_interval = interval;
        }
        if self.sequential {
            config.world.parallel = false;
        }
    }
}

/// Reads `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    AppConfig::load(path).with_context(|| format!("loading {}", path.display()))
}

pub struct App {
    pub engine: DynamicsEngine,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let engine = DynamicsEngine::new(config).context("initializing engine")?;
        tracing::info!(
            seed = engine.seed(),
            agents = engine.population().len(),
            steps = engine.config().world.steps,
            parallel = engine.config().world.parallel,
            "Swarm ready"
        );
        Ok(Self { engine })
    }

    /// Runs to completion, handing every frame to `observer`.
    pub fn run<O: FrameObserver + ?Sized>(&mut self, observer: &mut O) -> Result<RunSummary> {
        self.engine.run(observer).context("simulation aborted")
    }
}
