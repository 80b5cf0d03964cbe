use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::codec;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::math::tensor::Tensor;
use crate::train::{train_network, TrainConfig};

/// Ordered stack of dense layers; layer `i` feeds layer `i + 1`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds and initializes `num_layers` layers.
    ///
    /// `layer_sizes` holds `num_layers + 1` widths (input first) and
    /// `activations` one name per layer.
    pub fn new<S, R>(
        num_layers: usize,
        layer_sizes: &[usize],
        activations: &[S],
        rng: &mut R,
    ) -> Result<Network>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if layer_sizes.len() != num_layers + 1 {
            return Err(Error::Shape(format!(
                "{} layers need {} layer sizes, got {}",
                num_layers,
                num_layers + 1,
                layer_sizes.len()
            )));
        }
        if activations.len() != num_layers {
            return Err(Error::Shape(format!(
                "{} layers need {} activation functions, got {}",
                num_layers,
                num_layers,
                activations.len()
            )));
        }

        let mut layers = Vec::with_capacity(num_layers);
        for (sizes, activation) in layer_sizes.windows(2).zip(activations) {
            let mut layer = Layer::new(sizes[0], sizes[1], activation.as_ref())?;
            layer.initialize(rng);
            layers.push(layer);
        }
        Ok(Network { layers })
    }

    /// Wraps already-built layers, checking that adjacent widths line up.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(Error::Shape(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    i,
                    pair[0].output_size(),
                    i + 1,
                    pair[1].input_size()
                )));
            }
        }
        Ok(Network { layers })
    }

    /// Re-randomizes every layer in place.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.initialize(rng);
        }
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Width of the first layer's input, `None` for an empty network.
    pub fn input_size(&self) -> Option<usize> {
        self.layers.first().map(Layer::input_size)
    }

    /// Width of the last layer's output, `None` for an empty network.
    pub fn output_size(&self) -> Option<usize> {
        self.layers.last().map(Layer::output_size)
    }

    /// Writes the network in the binary model format, replacing `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Error::io(format!("cannot open {} for writing", path.display()), e)
        })?;
        let mut writer = BufWriter::new(file);
        codec::encode_network(self, &mut writer)?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("cannot write {}", path.display()), e))?;

        log::info!("saved {} layer(s) to {}", self.num_layers(), path.display());
        Ok(())
    }

    /// Reads a network previously written by [`Network::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::io(format!("cannot open {} for reading", path.display()), e)
        })?;
        let mut reader = BufReader::new(file);
        let network = codec::decode_network(&mut reader)?;

        log::info!("loaded {} layer(s) from {}", network.num_layers(), path.display());
        Ok(network)
    }

    /// See [`train_network`]; no optimization method is defined yet.
    pub fn train(&mut self, inputs: &Tensor, targets: &Tensor, config: &TrainConfig) -> Result<()> {
        train_network(self, inputs, targets, config)
    }
}
