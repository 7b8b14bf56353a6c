//! Directional momentum: ants prefer to keep going the way they face.

use crate::error::{ensure_config, Result};
use serde::{Deserialize, Serialize};
use stigmergy_data::Heading;

/// Forward and left/right-symmetric turn weights in 45° increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasWeights {
    pub w0: f64,
    pub w45: f64,
    pub w90: f64,
    pub w135: f64,
    pub w180: f64,
}

impl Default for BiasWeights {
    fn default() -> Self {
        Self {
            w0: 1.0,
            w45: 0.5,
            w90: 0.25,
            w135: 1.0 / 12.0,
            w180: 1.0 / 20.0,
        }
    }
}

impl BiasWeights {
    /// Weights must be finite, positive and strictly decreasing with turn angle.
    pub fn validate(&self) -> Result<()> {
        let ordered = [self.w0, self.w45, self.w90, self.w135, self.w180];
        ensure_config(
            ordered.iter().all(|w| w.is_finite() && *w > 0.0),
            "Directional bias weights must be finite and positive",
        )?;
        ensure_config(
            ordered.windows(2).all(|pair| pair[0] > pair[1]),
            "Directional bias weights must satisfy w0 > w45 > w90 > w135 > w180",
        )
    }
}

/// Precomputed angular preference, rotated per heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalBias {
    base: [f64; 8],
}

impl DirectionalBias {
    pub fn new(weights: BiasWeights) -> Self {
        let BiasWeights {
            w0,
            w45,
            w90,
            w135,
            w180,
        } = weights;
        // Oriented for heading 1 ("north").
        Self {
            base: [w45, w0, w45, w90, w135, w180, w135, w90],
        }
    }

    /// Bias vector for `heading`; index `heading` carries the forward weight.
    #[inline]
    pub fn weights(&self, heading: Heading) -> [f64; 8] {
        let mut rotated = self.base;
        rotated.rotate_right((heading.index() + Heading::COUNT - 1) % Heading::COUNT);
        rotated
    }

    /// Turn probabilities on a bare lattice, where the field is neutral.
    pub fn turn_probabilities(&self, heading: Heading) -> [f64; 8] {
        let mut weights = self.weights(heading);
        let total: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= total;
        }
        weights
    }
}

impl Default for DirectionalBias {
    fn default() -> Self {
        Self::new(BiasWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_weight_sits_at_heading() {
        let bias = DirectionalBias::default();
        for h in Heading::all() {
            let w = bias.weights(h);
            assert_eq!(w[h.index()], 1.0, "heading {h}");
            assert_eq!(w[h.reversed().index()], 1.0 / 20.0, "heading {h}");
        }
    }

    #[test]
    fn test_rotation_is_permutation_of_base() {
        let bias = DirectionalBias::default();
        let mut base = bias.weights(Heading::from_index(1));
        base.sort_by(f64::total_cmp);
        for h in Heading::all() {
            let mut w = bias.weights(h);
            w.sort_by(f64::total_cmp);
            assert_eq!(w, base);
        }
    }

    #[test]
    fn test_heading_zero_layout() {
        let w = DirectionalBias::default().weights(Heading::from_index(0));
        assert_eq!(w, [1.0, 0.5, 0.25, 1.0 / 12.0, 1.0 / 20.0, 1.0 / 12.0, 0.25, 0.5]);
    }

    #[test]
    fn test_validation() {
        assert!(BiasWeights::default().validate().is_ok());
        let flat = BiasWeights {
            w45: 1.0,
            ..BiasWeights::default()
        };
        assert!(flat.validate().is_err());
        let zero = BiasWeights {
            w180: 0.0,
            ..BiasWeights::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_turn_probabilities_sum_to_one() {
        let p = DirectionalBias::default().turn_probabilities(Heading::from_index(5));
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }
}
