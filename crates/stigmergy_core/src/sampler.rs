//! Categorical sampling over non-negative weights.

use crate::error::{Result, SwarmError};
use rand::Rng;

/// Returns the smallest index whose normalized cumulative weight exceeds `u`.
///
/// `u` is a uniform draw in `[0, 1)`. Fails with `DegenerateDistribution` if
/// any weight is negative or not finite, or if the weights sum to zero.
pub fn choose(weights: &[f64], u: f64) -> Result<usize> {
    let mut total = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w < 0.0 {
            return Err(SwarmError::degenerate(format!("weight {i} is {w}")));
        }
        total += w;
    }
    if !(total > 0.0 && total.is_finite()) {
        return Err(SwarmError::degenerate(format!(
            "total weight {total} over {} entries",
            weights.len()
        )));
    }

    // Accumulates in the same order as `total`, so the last entry is exactly 1.0.
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative / total > u {
            return Ok(i);
        }
    }
    Err(SwarmError::degenerate(format!(
        "draw {u} is not below the cumulative total"
    )))
}

/// Draws exactly one uniform value from `rng`, then [`choose`]s with it.
pub fn sample<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize> {
    let u: f64 = rng.gen();
    choose(weights, u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_weights_split_evenly() {
        let weights = [1.0; 8];
        let draws = 8000;
        let mut counts = [0usize; 8];
        for k in 0..draws {
            let u = (k as f64 + 0.5) / draws as f64;
            counts[choose(&weights, u).unwrap()] += 1;
        }
        for count in counts {
            assert_eq!(count, draws / 8);
        }
    }

    #[test]
    fn test_boundaries() {
        let weights = [1.0, 0.0, 3.0];
        assert_eq!(choose(&weights, 0.0).unwrap(), 0);
        assert_eq!(choose(&weights, 0.2499).unwrap(), 0);
        assert_eq!(choose(&weights, 0.25).unwrap(), 2);
        assert_eq!(choose(&weights, 0.999_999).unwrap(), 2);
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let weights = [0.0, 2.0, 0.0, 2.0];
        for k in 0..100 {
            let i = choose(&weights, k as f64 / 100.0).unwrap();
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        for u in [0.0, 0.5, 0.99] {
            assert!(matches!(
                choose(&[0.0; 8], u),
                Err(SwarmError::DegenerateDistribution(_))
            ));
        }
        assert!(choose(&[1.0, -0.5], 0.1).is_err());
        assert!(choose(&[1.0, f64::NAN], 0.1).is_err());
        assert!(choose(&[], 0.1).is_err());
        assert!(choose(&[1.0], 1.0).is_err());
    }

    #[test]
    fn test_sample_consumes_one_draw() {
        let weights = [0.0; 4];
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert!(sample(&weights, &mut a).is_err());
        let _: f64 = b.gen();
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_weights_untouched() {
        let weights = [0.3, 0.2, 0.5];
        let copy = weights;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        sample(&weights, &mut rng).unwrap();
        assert_eq!(weights, copy);
    }
}
