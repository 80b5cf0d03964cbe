use crate::error::{Error, Result};

/// Hyperparameters for a `train_network` run.
///
/// # Fields
/// - `epochs`        : number of full passes over the training data
/// - `learning_rate` : step size; must be finite and positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f32,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f32) -> Self {
        TrainConfig { epochs, learning_rate }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::Training("epochs must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::Training(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
