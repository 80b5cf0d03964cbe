use rand::Rng;
use std::f32::consts::PI;

use crate::error::{Error, Result};
use crate::math::tensor::Tensor;

/// Weight initialization scheme.
///
/// Biases are always zeroed by the layer; an `Initializer` only decides how
/// the weight tensor is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    /// Uniform on the half-open interval `[low, high)`.
    Uniform { low: f32, high: f32 },
    /// He initialization: N(0, sqrt(2 / fan_in)). Suits ReLU layers.
    He,
    /// Xavier (Glorot) initialization: N(0, sqrt(1 / fan_in)). Suits
    /// sigmoid/tanh layers.
    Xavier,
}

impl Default for Initializer {
    /// Uniform on `[-0.5, 0.5)`, the scheme every freshly built network uses.
    fn default() -> Self {
        Initializer::Uniform { low: -0.5, high: 0.5 }
    }
}

impl Initializer {
    /// Overwrites every element of `weights`.
    ///
    /// Fan-in is the first dimension of the tensor (`input_size` for a
    /// `[input_size, output_size]` weight matrix). `Uniform` bounds must be
    /// finite with `low < high`; otherwise nothing is written and
    /// [`Error::Allocation`] is returned.
    pub fn fill<R: Rng + ?Sized>(&self, weights: &mut Tensor, rng: &mut R) -> Result<()> {
        match *self {
            Initializer::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(Error::Allocation(format!(
                        "uniform bounds [{}, {}) are not a finite, non-empty range",
                        low, high
                    )));
                }
                fill_uniform(weights, low, high, rng);
            }
            Initializer::He => fill_normal(weights, 2.0, rng),
            Initializer::Xavier => fill_normal(weights, 1.0, rng),
        }
        Ok(())
    }
}

/// Caller guarantees `low < high`, both finite.
pub(crate) fn fill_uniform<R: Rng + ?Sized>(weights: &mut Tensor, low: f32, high: f32, rng: &mut R) {
    for w in weights.data_mut() {
        *w = rng.gen_range(low..high);
    }
}

fn fill_normal<R: Rng + ?Sized>(weights: &mut Tensor, gain: f32, rng: &mut R) {
    let fan_in = weights.shape()[0] as f32;
    let std_dev = (gain / fan_in).sqrt();
    for w in weights.data_mut() {
        *w = sample_standard_normal(rng) * std_dev;
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    // Both uniforms in (0, 1] to avoid log(0).
    let u1: f32 = 1.0 - rng.gen::<f32>();
    let u2: f32 = 1.0 - rng.gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_uniform_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut t = Tensor::new(&[32, 32]).unwrap();
        Initializer::default().fill(&mut t, &mut rng).unwrap();
        assert!(t.data().iter().all(|&w| (-0.5..0.5).contains(&w)));
        // Not all the same value.
        assert!(t.data().iter().any(|&w| w != t.data()[0]));
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = Tensor::new(&[4, 3]).unwrap();
        let mut b = Tensor::new(&[4, 3]).unwrap();
        Initializer::He.fill(&mut a, &mut StdRng::seed_from_u64(42)).unwrap();
        Initializer::He.fill(&mut b, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn xavier_spread_tracks_fan_in() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut t = Tensor::new(&[400, 50]).unwrap();
        Initializer::Xavier.fill(&mut t, &mut rng).unwrap();
        let n = t.len() as f32;
        let mean = t.data().iter().sum::<f32>() / n;
        let var = t.data().iter().map(|w| (w - mean).powi(2)).sum::<f32>() / n;
        // Expected variance 1/400.
        assert!(mean.abs() < 0.01);
        assert!((var - 1.0 / 400.0).abs() < 0.0005);
        assert!(t.data().iter().all(|w| w.is_finite()));
    }

    #[test]
    fn empty_or_nan_uniform_range_is_allocation_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut t = Tensor::from_data(&[2], vec![7.0, 7.0]).unwrap();
        for init in [
            Initializer::Uniform { low: 0.5, high: 0.5 },
            Initializer::Uniform { low: 1.0, high: -1.0 },
            Initializer::Uniform { low: f32::NAN, high: 1.0 },
            Initializer::Uniform { low: 0.0, high: f32::INFINITY },
        ] {
            let err = init.fill(&mut t, &mut rng).unwrap_err();
            assert!(matches!(err, Error::Allocation(_)), "{init:?}: {err:?}");
        }
        assert_eq!(t.data(), &[7.0, 7.0]);
    }
}
