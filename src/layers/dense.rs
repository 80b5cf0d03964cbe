use rand::Rng;

use crate::error::{Error, Result};
use crate::init::initializer::{fill_uniform, Initializer};
use crate::math::tensor::Tensor;

/// A dense layer's parameters.
///
/// `weights` has shape `[input_size, output_size]`, `biases` has shape
/// `[output_size]`. The activation name is kept verbatim; nothing in the core
/// interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Tensor,
    biases: Tensor,
    activation: String,
}

impl Layer {
    /// Allocates an uninitialized layer. Call [`Layer::initialize`] before use.
    pub fn new(input_size: usize, output_size: usize, activation: &str) -> Result<Layer> {
        let weights = Tensor::new(&[input_size, output_size])?;
        let biases = Tensor::new(&[output_size])?;

        Ok(Layer {
            weights,
            biases,
            activation: activation.to_owned(),
        })
    }

    /// Assembles a layer from decoded parts, checking that the shapes agree.
    pub fn from_parts(weights: Tensor, biases: Tensor, activation: String) -> Result<Layer> {
        if weights.dims() != 2 {
            return Err(Error::Shape(format!(
                "layer weights must be 2-D, got shape {:?}",
                weights.shape()
            )));
        }
        if biases.dims() != 1 {
            return Err(Error::Shape(format!(
                "layer biases must be 1-D, got shape {:?}",
                biases.shape()
            )));
        }
        if weights.shape()[1] != biases.shape()[0] {
            return Err(Error::Shape(format!(
                "weights {:?} do not match biases {:?}",
                weights.shape(),
                biases.shape()
            )));
        }
        Ok(Layer { weights, biases, activation })
    }

    /// Uniform `[-0.5, 0.5)` weights and zero biases.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fill_uniform(&mut self.weights, -0.5, 0.5, rng);
        self.biases.zero();
    }

    /// Fills the weights with `init` and zeroes the biases. On error the
    /// layer is left unchanged.
    pub fn initialize_with<R: Rng + ?Sized>(&mut self, init: &Initializer, rng: &mut R) -> Result<()> {
        init.fill(&mut self.weights, rng)?;
        self.biases.zero();
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.weights.shape()[0]
    }

    pub fn output_size(&self) -> usize {
        self.weights.shape()[1]
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    /// Weight values in row-major `[input_size, output_size]` order. Only the
    /// values are exposed so the layer's shape cannot change.
    pub fn weights_data_mut(&mut self) -> &mut [f32] {
        self.weights.data_mut()
    }

    pub fn biases(&self) -> &Tensor {
        &self.biases
    }

    pub fn biases_data_mut(&mut self) -> &mut [f32] {
        self.biases.data_mut()
    }

    pub fn activation(&self) -> &str {
        &self.activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_sets_weight_and_bias_shapes() {
        let layer = Layer::new(4, 3, "relu").unwrap();
        assert_eq!(layer.weights().shape(), &[4, 3]);
        assert_eq!(layer.biases().shape(), &[3]);
        assert_eq!(layer.activation(), "relu");
        assert_eq!(layer.input_size(), 4);
        assert_eq!(layer.output_size(), 3);
    }

    #[test]
    fn new_rejects_zero_width() {
        assert!(matches!(Layer::new(0, 3, "relu"), Err(Error::Allocation(_))));
        assert!(matches!(Layer::new(3, 0, "relu"), Err(Error::Allocation(_))));
    }

    #[test]
    fn initialize_zeroes_biases_and_bounds_weights() {
        let mut layer = Layer::new(10, 8, "sigmoid").unwrap();
        layer.biases_data_mut().fill(9.0);
        layer.initialize(&mut StdRng::seed_from_u64(1));
        assert!(layer.biases().data().iter().all(|&b| b == 0.0));
        assert!(layer.weights().data().iter().all(|&w| (-0.5..0.5).contains(&w)));
    }

    #[test]
    fn from_parts_rejects_mismatched_biases() {
        let weights = Tensor::new(&[4, 3]).unwrap();
        let biases = Tensor::new(&[2]).unwrap();
        let err = Layer::from_parts(weights, biases, "relu".into()).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn from_parts_rejects_wrong_rank() {
        let weights = Tensor::new(&[12]).unwrap();
        let biases = Tensor::new(&[3]).unwrap();
        assert!(Layer::from_parts(weights, biases, "relu".into()).is_err());
    }

    #[test]
    fn data_mutators_keep_shapes() {
        let mut layer = Layer::new(3, 2, "relu").unwrap();
        layer.weights_data_mut().copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        layer.biases_data_mut()[1] = -1.0;
        assert_eq!(layer.weights().shape(), &[3, 2]);
        assert_eq!(layer.weights().data()[5], 6.0);
        assert_eq!(layer.biases().data()[1], -1.0);
        assert_eq!(layer.output_size(), 2);
    }

    #[test]
    fn initialize_with_bad_range_leaves_layer_untouched() {
        let mut layer = Layer::new(2, 2, "relu").unwrap();
        layer.weights_data_mut().fill(3.0);
        layer.biases_data_mut().fill(4.0);
        let before = layer.clone();
        let bad = Initializer::Uniform { low: 1.0, high: 1.0 };
        let err = layer.initialize_with(&bad, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::Allocation(_)));
        assert_eq!(layer, before);
    }

    #[test]
    fn initialize_with_he_zeroes_biases() {
        let mut layer = Layer::new(8, 4, "relu").unwrap();
        layer.biases_data_mut().fill(1.0);
        layer.initialize_with(&Initializer::He, &mut StdRng::seed_from_u64(2)).unwrap();
        assert!(layer.biases().data().iter().all(|&b| b == 0.0));
    }
}
