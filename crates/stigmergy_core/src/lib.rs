//! # Stigmergy Core
//!
//! The ant/pheromone dynamics engine: agents on a toroidal lattice choose
//! each step from a blend of directional momentum and the local pheromone
//! concentration, then lay down pheromone that slowly decays.
//!
//! ## Architecture
//!
//! - **Leaf components**: [`lattice::Torus`], [`bias::DirectionalBias`],
//!   [`response::FieldResponse`], [`sampler`]
//! - **State**: [`pheromone::LatticeField`], [`population::AgentPopulation`]
//! - **Systems**: a movement phase that only reads the field, followed by a
//!   field-update phase that deposits and decays
//! - **Parallel processing**: Rayon-powered movement and atomic deposits
//!   behind the `parallel` feature
//! - **Deterministic simulation**: per-agent ChaCha8 streams derived from the seed
//!
//! ## Example
//!
//! ```
//! use stigmergy_core::config::AppConfig;
//! use stigmergy_core::engine::DynamicsEngine;
//! use stigmergy_core::observer::NullObserver;
//!
//! let mut config = AppConfig::default();
//! config.world.agent_count = 50;
//! config.world.steps = 20;
//! config.world.seed = Some(42);
//!
//! let mut engine = DynamicsEngine::new(config).unwrap();
//! let summary = engine.run(&mut NullObserver).unwrap();
//! assert_eq!(summary.ticks, 20);
//! assert_eq!(engine.population().len(), 50);
//! ```

/// Directional momentum weights
pub mod bias;
/// Configuration management for simulation parameters
pub mod config;
/// Tick loop and lifecycle
pub mod engine;
/// Error taxonomy
pub mod error;
/// Toroidal boundary conditions
pub mod lattice;
/// Performance metrics collection and logging
pub mod metrics;
/// Frame consumers
pub mod observer;
/// Pheromone grid
pub mod pheromone;
/// Agent storage
pub mod population;
/// Concentration to sensing weight
pub mod response;
/// Categorical sampling
pub mod sampler;
/// Movement and field-update phases
pub mod systems;

pub use config::AppConfig;
pub use engine::{DynamicsEngine, EngineState, RunSummary};
pub use error::{Result, SwarmError};
pub use metrics::{init_logging, Metrics};
pub use observer::FrameObserver;
pub use stigmergy_data::{Agent, EdgeTable, EdgeVector, Heading, PopulationSnapshot};
