//! Toroidal lattice geometry.

use crate::error::{Result, SwarmError};
use serde::{Deserialize, Serialize};
use stigmergy_data::EdgeVector;

/// Dimensions of the W×H torus plus the wrapping rule.
///
/// Cells are stored row-major, so `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torus {
    width: u16,
    height: u16,
}

impl Torus {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SwarmError::invalid_config(format!(
                "lattice dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Maps `(i, j)` back onto the torus.
    ///
    /// `-1` becomes the last index on its axis and the axis size becomes `0`;
    /// in-range values are unchanged. Larger offsets wrap by Euclidean
    /// remainder.
    #[inline]
    pub fn wrap(&self, i: i64, j: i64) -> (u16, u16) {
        (
            i.rem_euclid(self.width as i64) as u16,
            j.rem_euclid(self.height as i64) as u16,
        )
    }

    /// Cell reached from `(x, y)` by one edge vector.
    #[inline]
    pub fn step(&self, x: u16, y: u16, edge: EdgeVector) -> (u16, u16) {
        self.wrap(x as i64 + edge.dx as i64, y as i64 + edge.dy as i64)
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }

    /// Flat index of `(x, y)`, or `OutOfBounds`.
    #[inline]
    pub fn index(&self, x: u16, y: u16) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(SwarmError::out_of_bounds(
                x as i64,
                y as i64,
                self.width,
                self.height,
            ))
        }
    }
}
