//! Run metrics and structured logging.

use crate::pheromone::FieldStats;
use atomic_float::AtomicF64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Counters updated once per tick by the engine.
pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    occupied_cells: AtomicU64,
    total_mass: AtomicF64,
    peak_concentration: AtomicF64,
    busy: AtomicU64,
    log_interval: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// `log_interval` of 0 silences the periodic info line.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            occupied_cells: AtomicU64::new(0),
            total_mass: AtomicF64::new(0.0),
            peak_concentration: AtomicF64::new(0.0),
            busy: AtomicU64::new(0),
            log_interval,
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, agents: usize, field: &FieldStats) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.occupied_cells
            .store(field.occupied_cells as u64, Ordering::Relaxed);
        self.total_mass.store(field.total_mass, Ordering::Relaxed);
        self.peak_concentration
            .store(field.max_concentration, Ordering::Relaxed);
        self.busy
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                agents = agents,
                mass = field.total_mass,
                peak = field.max_concentration,
                occupied = field.occupied_cells,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Clears counters after an engine reset.
    pub fn reset(&self) {
        self.tick_count.store(0, Ordering::Relaxed);
        self.agent_count.store(0, Ordering::Relaxed);
        self.occupied_cells.store(0, Ordering::Relaxed);
        self.total_mass.store(0.0, Ordering::Relaxed);
        self.peak_concentration.store(0.0, Ordering::Relaxed);
        self.busy.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.total_mass.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak_concentration(&self) -> f64 {
        self.peak_concentration.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn occupied_cells(&self) -> u64 {
        self.occupied_cells.load(Ordering::Relaxed)
    }

    /// Time spent inside `step`, summed over all ticks.
    #[must_use]
    pub fn busy_time(&self) -> Duration {
        Duration::from_micros(self.busy.load(Ordering::Relaxed))
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(10);
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.total_mass(), 0.0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new(0);
        let stats = FieldStats {
            total_mass: 0.5,
            max_concentration: 0.2,
            occupied_cells: 3,
        };
        metrics.record_tick(Duration::from_micros(40), 100, &stats);
        metrics.record_tick(Duration::from_micros(60), 100, &stats);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.agent_count(), 100);
        assert_eq!(metrics.occupied_cells(), 3);
        assert_eq!(metrics.peak_concentration(), 0.2);
        assert_eq!(metrics.busy_time(), Duration::from_micros(100));

        metrics.reset();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.agent_count(), 0);
        assert_eq!(metrics.occupied_cells(), 0);
        assert_eq!(metrics.busy_time(), Duration::ZERO);
    }
}
