//! Hook for whatever consumes the engine's frames (renderers, recorders).

use crate::engine::RunSummary;
use crate::pheromone::LatticeField;
use crate::population::AgentPopulation;

/// Synchronous per-frame notification.
///
/// Called on the engine's thread between ticks, so implementations should
/// return promptly. The borrowed state is only valid for the call.
pub trait FrameObserver {
    fn on_initialized(&mut self, _population: &AgentPopulation) {}

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField);

    fn on_terminated(&mut self, _summary: &RunSummary) {}
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl FrameObserver for NullObserver {
    fn on_tick(&mut self, _tick: u64, _population: &AgentPopulation, _field: &LatticeField) {}
}

impl<T: FrameObserver + ?Sized> FrameObserver for &mut T {
    fn on_initialized(&mut self, population: &AgentPopulation) {
        (**self).on_initialized(population);
    }

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField) {
        (**self).on_tick(tick, population, field);
    }

    fn on_terminated(&mut self, summary: &RunSummary) {
        (**self).on_terminated(summary);
    }
}

impl<A: FrameObserver, B: FrameObserver> FrameObserver for (A, B) {
    fn on_initialized(&mut self, population: &AgentPopulation) {
        self.0.on_initialized(population);
        self.1.on_initialized(population);
    }

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField) {
        self.0.on_tick(tick, population, field);
        self.1.on_tick(tick, population, field);
    }

    fn on_terminated(&mut self, summary: &RunSummary) {
        self.0.on_terminated(summary);
        self.1.on_terminated(summary);
    }
}

impl<T: FrameObserver> FrameObserver for Option<T> {
    fn on_initialized(&mut self, population: &AgentPopulation) {
        if let Some(inner) = self {
            inner.on_initialized(population);
        }
    }

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField) {
        if let Some(inner) = self {
            inner.on_tick(tick, population, field);
        }
    }

    fn on_terminated(&mut self, summary: &RunSummary) {
        if let Some(inner) = self {
            inner.on_terminated(summary);
        }
    }
}
