use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{Error, Result};
use crate::network::network::Network;

/// A serializable description of a network architecture.
///
/// Fields:
/// - `layer_sizes` : widths from input to output; one more entry than there
///                   are layers
/// - `activations` : activation name per layer, stored verbatim
/// - `seed`        : optional seed for reproducible initialization
///
/// `NetworkSpec` lives in JSON independently of the binary model file, so an
/// architecture can be kept under version control and rebuilt on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
    pub activations: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn num_layers(&self) -> usize {
        self.activations.len()
    }

    /// Builds and initializes the network, seeding from `seed` when set.
    pub fn build(&self) -> Result<Network> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::new(self.num_layers(), &self.layer_sizes, &self.activations, &mut rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::io(format!("cannot open {} for writing", path), e))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("cannot write {}", path), e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("cannot open {} for reading", path), e))?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
