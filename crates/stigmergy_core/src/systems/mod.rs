//! The two ordered phases of a tick.
//!
//! Movement borrows the field immutably and the population mutably; the
//! field update borrows the field mutably. A tick therefore cannot start
//! depositing until every agent has moved.

pub mod field;
pub mod movement;
