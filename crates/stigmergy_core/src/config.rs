//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to a `config.toml` file. Every section
//! and field has a default, so a partial file only overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 120
//! height = 100
//! agent_count = 1000
//! steps = 10000
//! seed = 42
//!
//! [pheromone]
//! beta = 3.5
//! delta = 0.2
//! eta = 0.07
//! kappa = 0.015
//! ```

use crate::bias::BiasWeights;
use crate::error::{ensure_config, Result, SwarmError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stigmergy_data::{EdgeTable, EdgeVector, CANONICAL_EDGES};

/// How agents are laid out before the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Uniform random cell and heading per agent.
    #[default]
    Random,
    /// Every agent at `(0, 0)` facing heading 0.
    Origin,
}

/// Lattice, population and run-length parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub agent_count: usize,
    pub steps: u64,
    /// `None` draws a fresh seed from the OS for each run.
    pub seed: Option<u64>,
    pub initial_placement: Placement,
    /// Run the movement phase and deposits on the rayon pool.
    pub parallel: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 100,
            agent_count: 1000,
            steps: 10_000,
            seed: None,
            initial_placement: Placement::Random,
            parallel: true,
        }
    }
}

/// Sensing, deposition and decay of the pheromone field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PheromoneConfig {
    /// Osmotropotaxic sensitivity exponent β.
    pub beta: f64,
    /// Reciprocal sensory capacity δ.
    pub delta: f64,
    /// Amount laid down per ant per tick η.
    pub eta: f64,
    /// Fraction lost per tick κ.
    pub kappa: f64,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            beta: 3.5,
            delta: 0.2,
            eta: 0.07,
            kappa: 0.015,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Eight `[dx, dy]` pairs, clockwise from northwest.
    pub edge_vectors: Vec<[i32; 2]>,
    pub bias: BiasWeights,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            edge_vectors: CANONICAL_EDGES.iter().map(|e| [e.dx, e.dy]).collect(),
            bias: BiasWeights::default(),
        }
    }
}

/// Settings for the frame consumers around the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit an info-level summary every N ticks; 0 disables it.
    pub log_interval: u64,
    /// Record a trace frame every N ticks; 0 disables tracing.
    pub trace_interval: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_interval: 1000,
            trace_interval: 0,
        }
    }
}

/// Complete, immutable parameter set for one run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub pheromone: PheromoneConfig,
    pub movement: MovementConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `InvalidConfiguration` describing the first rule that fails.
    ///
    /// # Validation Rules
    /// - Lattice dimensions must be positive
    /// - β > 0, δ ≥ 0, η ≥ 0 and 0 ≤ κ < 1, all finite
    /// - The edge table holds eight distinct unit steps
    /// - Bias weights are positive and strictly decreasing
    pub fn validate(&self) -> Result<()> {
        ensure_config(self.world.width > 0, "World width must be positive")?;
        ensure_config(self.world.height > 0, "World height must be positive")?;

        let p = &self.pheromone;
        ensure_config(
            p.beta.is_finite() && p.beta > 0.0,
            "Sensing exponent beta must be positive",
        )?;
        ensure_config(
            p.delta.is_finite() && p.delta >= 0.0,
            "Sensing saturation delta must be non-negative",
        )?;
        ensure_config(
            p.eta.is_finite() && p.eta >= 0.0,
            "Deposition rate eta must be non-negative",
        )?;
        ensure_config(
            (0.0..1.0).contains(&p.kappa),
            "Decay rate kappa must be in [0, 1)",
        )?;

        self.edge_table()?;
        self.movement.bias.validate()
    }

    /// Builds the edge table, checking length, range and uniqueness.
    pub fn edge_table(&self) -> Result<EdgeTable> {
        let raw = &self.movement.edge_vectors;
        let edges: [[i32; 2]; 8] = raw.as_slice().try_into().map_err(|_| {
            SwarmError::invalid_config(format!("Edge table needs 8 vectors, got {}", raw.len()))
        })?;
        for (i, [dx, dy]) in edges.iter().enumerate() {
            ensure_config(
                (-1..=1).contains(dx) && (-1..=1).contains(dy) && (*dx, *dy) != (0, 0),
                &format!("Edge vector {i} [{dx}, {dy}] is not a unit lattice step"),
            )?;
        }
        for (i, a) in edges.iter().enumerate() {
            ensure_config(
                !edges[i + 1..].contains(a),
                &format!("Edge vector {i} [{}, {}] appears twice", a[0], a[1]),
            )?;
        }
        Ok(EdgeTable::new(edges.map(|[dx, dy]| EdgeVector::new(dx, dy))))
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Per-tick multiplier applied by decay, `1 − κ`.
    pub fn decay_factor(&self) -> f64 {
        1.0 - self.pheromone.kappa
    }
}
