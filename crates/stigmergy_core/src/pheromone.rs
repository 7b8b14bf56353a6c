//! Pheromone field laid down by the ants.

use crate::error::{Result, SwarmError};
use crate::lattice::Torus;
use serde::{Deserialize, Serialize};
use stigmergy_data::EdgeTable;

/// Summary statistics over the whole field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub total_mass: f64,
    pub max_concentration: f64,
    pub occupied_cells: usize,
}

/// W×H grid of non-negative concentrations.
///
/// Only [`deposit`](Self::deposit), [`decay`](Self::decay) and
/// [`reset`](Self::reset) mutate it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LatticeField {
    torus: Torus,
    cells: Vec<f64>,
}

impl LatticeField {
    /// Creates a zeroed field.
    pub fn new(torus: Torus) -> Self {
        Self {
            cells: vec![0.0; torus.cell_count()],
            torus,
        }
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Result<f64> {
        let idx = self.torus.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Concentrations of the eight neighbours of `(x, y)`, in edge-table order.
    pub fn neighborhood(&self, x: u16, y: u16, edges: &EdgeTable) -> Result<[f64; 8]> {
        let mut out = [0.0; 8];
        for (slot, edge) in out.iter_mut().zip(edges.iter()) {
            let (nx, ny) = self.torus.step(x, y, *edge);
            *slot = self.get(nx, ny)?;
        }
        Ok(out)
    }

    /// Adds `amount` to a cell; repeated calls accumulate.
    pub fn deposit(&mut self, x: u16, y: u16, amount: f64) -> Result<()> {
        if !(amount >= 0.0 && amount.is_finite()) {
            return Err(SwarmError::invalid_config(format!(
                "deposit amount must be finite and non-negative, got {amount}"
            )));
        }
        let idx = self.torus.index(x, y)?;
        self.cells[idx] += amount;
        Ok(())
    }

    /// Multiplies every cell by `factor`, which must lie in `[0, 1]`.
    pub fn decay(&mut self, factor: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(SwarmError::invalid_config(format!(
                "decay factor must be in [0, 1], got {factor}"
            )));
        }
        for cell in &mut self.cells {
            *cell *= factor;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells.fill(0.0);
    }

    /// Row-major view of all concentrations.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn total_mass(&self) -> f64 {
        self.cells.iter().sum()
    }

    pub fn max_concentration(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c > 0.0).count()
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            total_mass: self.total_mass(),
            max_concentration: self.max_concentration(),
            occupied_cells: self.occupied_cells(),
        }
    }
}

#[cfg(feature = "parallel")]
pub use buffer::DepositBuffer;

#[cfg(feature = "parallel")]
mod buffer {
    use super::LatticeField;
    use crate::error::Result;
    use crate::lattice::Torus;
    use atomic_float::AtomicF64;
    use std::sync::atomic::Ordering;

    /// Scratch grid that accepts deposits from many threads at once.
    ///
    /// Each cell is an `AtomicF64`, so concurrent deposits to the same cell
    /// add up instead of racing.
    pub struct DepositBuffer {
        torus: Torus,
        cells: Vec<AtomicF64>,
    }

    impl DepositBuffer {
        pub fn new(torus: Torus) -> Self {
            Self {
                cells: (0..torus.cell_count()).map(|_| AtomicF64::new(0.0)).collect(),
                torus,
            }
        }

        pub fn deposit(&self, x: u16, y: u16, amount: f64) -> Result<()> {
            let idx = self.torus.index(x, y)?;
            self.cells[idx].fetch_add(amount, Ordering::Relaxed);
            Ok(())
        }

        /// Moves every pending deposit into `field` and zeroes the buffer.
        pub fn drain_into(&mut self, field: &mut LatticeField) {
            debug_assert_eq!(self.torus, field.torus);
            for (target, cell) in field.cells.iter_mut().zip(&self.cells) {
                let amount = cell.swap(0.0, Ordering::Relaxed);
                if amount > 0.0 {
                    *target += amount;
                }
            }
        }
    }
}
