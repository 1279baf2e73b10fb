use rand::Rng;
use rand::distr::Distribution;

use crate::error::{MathError, MathResult};

/// A triangular distribution over `[min, max]` peaking at `mode`.
///
/// Sampling uses the inverse CDF, so one uniform draw yields one sample.
/// A degenerate distribution (`min == max`) is a point mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularDistribution {
    min: f32,
    mode: f32,
    max: f32,
}

impl TriangularDistribution {
    /// Create a distribution, rejecting parameters outside `min <= mode <= max`.
    pub fn new(min: f32, mode: f32, max: f32) -> MathResult<Self> {
        let finite = min.is_finite() && mode.is_finite() && max.is_finite();
        if !finite || min > mode || mode > max {
            return Err(MathError::InvalidDistribution { min, mode, max });
        }
        Ok(Self { min, mode, max })
    }

    /// Lower bound of the support.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Most likely value.
    pub fn mode(&self) -> f32 {
        self.mode
    }

    /// Upper bound of the support.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Expected value, `(min + mode + max) / 3`.
    pub fn mean(&self) -> f32 {
        (self.min + self.mode + self.max) / 3.0
    }

    /// Map a uniform draw `u` in `[0, 1)` onto the distribution.
    pub fn inverse_cdf(&self, u: f32) -> f32 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return self.min;
        }

        let split = (self.mode - self.min) / range;
        let value = if u < split {
            self.min + (u * range * (self.mode - self.min)).sqrt()
        } else {
            self.max - ((1.0 - u) * range * (self.max - self.mode)).sqrt()
        };
        // Rounding near the endpoints can step a hair outside the support.
        value.clamp(self.min, self.max)
    }
}

impl Distribution<f32> for TriangularDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.inverse_cdf(rng.random::<f32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_mode_below_min() {
        let err = TriangularDistribution::new(0.5, 0.1, 1.0).unwrap_err();
        assert!(matches!(err, MathError::InvalidDistribution { .. }));
    }

    #[test]
    fn rejects_mode_above_max() {
        assert!(TriangularDistribution::new(0.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(TriangularDistribution::new(0.0, f32::NAN, 1.0).is_err());
        assert!(TriangularDistribution::new(0.0, 0.5, f32::INFINITY).is_err());
    }

    #[test]
    fn degenerate_is_point_mass() {
        let dist = TriangularDistribution::new(0.3, 0.3, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 0.3);
        }
    }

    #[test]
    fn inverse_cdf_endpoints() {
        let dist = TriangularDistribution::new(1.0, 2.0, 4.0).unwrap();
        assert!((dist.inverse_cdf(0.0) - 1.0).abs() < 1e-6);
        assert!((dist.inverse_cdf(0.999_999) - 4.0).abs() < 1e-2);
        // At the split point the sample is the mode.
        assert!((dist.inverse_cdf(1.0 / 3.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn mode_at_min_is_allowed() {
        let dist = TriangularDistribution::new(0.05, 0.05, 0.2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let below_midpoint = (0..10_000)
            .map(|_| dist.sample(&mut rng))
            .filter(|v| *v < 0.125)
            .count();
        // Density is skewed towards the lower bound.
        assert!(below_midpoint > 5_000);
    }

    #[test]
    fn empirical_mean_matches() {
        let dist = TriangularDistribution::new(0.05, 0.6, 1.1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| dist.sample(&mut rng) as f64).sum();
        let mean = sum / n as f64;
        assert!((mean - dist.mean() as f64).abs() < 0.02, "mean was {mean}");
    }

    proptest! {
        #[test]
        fn samples_stay_within_bounds(
            min in -100.0f32..100.0,
            a in 0.0f32..1.0,
            width in 0.0f32..50.0,
            seed in any::<u64>(),
        ) {
            let max = min + width;
            let mode = min + a * width;
            let dist = TriangularDistribution::new(min, mode.clamp(min, max), max).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..10_000 {
                let v = dist.sample(&mut rng);
                prop_assert!((min..=max).contains(&v), "{v} outside [{min}, {max}]");
            }
        }
    }
}
