pub mod error;
pub mod math;
pub mod init;
pub mod layers;
pub mod network;
pub mod codec;
pub mod train;
pub mod dataset;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::tensor::Tensor;
pub use init::initializer::Initializer;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use train::{train_network, TrainConfig};
pub use dataset::{enumerate_classes, ImageDataset, ImageShape};
