//! Core data structures for the stigmergy simulation.

pub mod agent;
pub mod lattice;
pub mod snapshot;
