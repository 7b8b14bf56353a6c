//! Plain data shared by the stigmergy engine and its consumers.

pub mod data;

pub use data::agent::{Agent, Heading};
pub use data::lattice::{EdgeTable, EdgeVector, CANONICAL_EDGES};
pub use data::snapshot::PopulationSnapshot;
