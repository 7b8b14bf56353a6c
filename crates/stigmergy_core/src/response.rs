//! Osmotropotaxic response to pheromone concentration.

/// `(1 + c / (1 + δ·c))^β`: unity on bare lattice, saturating at high
/// concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldResponse {
    beta: f64,
    delta: f64,
}

impl FieldResponse {
    /// `beta` is the sensitivity exponent, `delta` the reciprocal sensory capacity.
    pub fn new(beta: f64, delta: f64) -> Self {
        Self { beta, delta }
    }

    #[inline]
    pub fn weight(&self, concentration: f64) -> f64 {
        debug_assert!(concentration >= 0.0, "negative concentration {concentration}");
        (1.0 + concentration / (1.0 + self.delta * concentration)).powf(self.beta)
    }

    pub fn weights(&self, concentrations: &[f64; 8]) -> [f64; 8] {
        (*concentrations).map(|c| self.weight(c))
    }

    /// Limit of [`weight`](Self::weight) as concentration grows; infinite when δ = 0.
    pub fn saturation(&self) -> f64 {
        if self.delta == 0.0 {
            f64::INFINITY
        } else {
            (1.0 / self.delta + 1.0).powf(self.beta)
        }
    }
}
