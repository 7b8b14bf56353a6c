//! Error types for the dynamics engine.
//!
//! Every variant is fatal for the run: the engine never retries or skips a
//! tick, it stops and hands the error to the caller.

use thiserror::Error;

/// Main error type for stigmergy_core operations.
#[derive(Error, Debug)]
pub enum SwarmError {
    /// Parameters rejected before the simulation starts
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Sampler received weights that do not form a distribution
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// Lattice access outside the torus after wrapping
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} lattice")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u16,
        height: u16,
    },

    /// `step` called after the configured step count was reached
    #[error("Simulation already terminated after {steps} steps")]
    SimulationTerminated { steps: u64 },

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stigmergy_core operations.
pub type Result<T> = std::result::Result<T, SwarmError>;

impl SwarmError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new degenerate distribution error.
    #[must_use]
    pub fn degenerate<S: Into<String>>(msg: S) -> Self {
        Self::DegenerateDistribution(msg.into())
    }

    #[must_use]
    pub fn out_of_bounds(x: i64, y: i64, width: u16, height: u16) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}

/// Returns `InvalidConfiguration` with `msg` unless `cond` holds.
pub(crate) fn ensure_config(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(SwarmError::invalid_config(msg))
    }
}
