use crate::error::{Error, Result};
use crate::math::tensor::Tensor;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// Entry point for fitting `network` to `inputs` / `targets`.
///
/// `inputs` is `[samples, input_size]` and `targets` is
/// `[samples, output_size]`. Every argument is checked against the network
/// and shape problems are reported as [`Error::Training`].
///
/// No optimization method (loss, gradients, update rule) is defined for this
/// model format, so once the arguments pass validation this returns
/// [`Error::NotImplemented`] and leaves the network unchanged.
pub fn train_network(
    network: &mut Network,
    inputs: &Tensor,
    targets: &Tensor,
    config: &TrainConfig,
) -> Result<()> {
    config.validate()?;

    let (input_size, output_size) = match (network.input_size(), network.output_size()) {
        (Some(i), Some(o)) => (i, o),
        _ => return Err(Error::Training("network has no layers".into())),
    };

    if inputs.dims() != 2 || targets.dims() != 2 {
        return Err(Error::Training(format!(
            "inputs and targets must be [samples, features], got {:?} and {:?}",
            inputs.shape(),
            targets.shape()
        )));
    }
    if inputs.shape()[0] != targets.shape()[0] {
        return Err(Error::Training(format!(
            "{} input samples but {} target samples",
            inputs.shape()[0],
            targets.shape()[0]
        )));
    }
    if inputs.shape()[1] != input_size {
        return Err(Error::Training(format!(
            "network expects {} inputs per sample, got {}",
            input_size,
            inputs.shape()[1]
        )));
    }
    if targets.shape()[1] != output_size {
        return Err(Error::Training(format!(
            "network produces {} outputs per sample, targets have {}",
            output_size,
            targets.shape()[1]
        )));
    }

    log::debug!(
        "train_network: {} samples, {} epochs, lr {}",
        inputs.shape()[0],
        config.epochs,
        config.learning_rate
    );
    Err(Error::NotImplemented("train_network"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn network() -> Network {
        Network::new(2, &[4, 3, 2], &["relu", "sigmoid"], &mut StdRng::seed_from_u64(11)).unwrap()
    }

    fn zeros(shape: &[usize]) -> Tensor {
        let mut t = Tensor::new(shape).unwrap();
        t.zero();
        t
    }

    #[test]
    fn valid_arguments_report_not_implemented() {
        let mut net = network();
        let before = net.clone();
        let err = train_network(&mut net, &zeros(&[8, 4]), &zeros(&[8, 2]), &TrainConfig::new(3, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
        assert_eq!(net, before);
    }

    #[test]
    fn wrong_input_width_is_training_error() {
        let err = train_network(&mut network(), &zeros(&[8, 5]), &zeros(&[8, 2]), &TrainConfig::new(1, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::Training(_)));
    }

    #[test]
    fn wrong_target_width_is_training_error() {
        let err = train_network(&mut network(), &zeros(&[8, 4]), &zeros(&[8, 3]), &TrainConfig::new(1, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::Training(_)));
    }

    #[test]
    fn sample_count_mismatch_is_training_error() {
        let err = train_network(&mut network(), &zeros(&[8, 4]), &zeros(&[7, 2]), &TrainConfig::new(1, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::Training(_)));
    }

    #[test]
    fn flat_inputs_are_training_error() {
        let err = train_network(&mut network(), &zeros(&[4]), &zeros(&[2]), &TrainConfig::new(1, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::Training(_)));
    }

    #[test]
    fn bad_hyperparameters_are_training_error() {
        let (x, y) = (zeros(&[2, 4]), zeros(&[2, 2]));
        assert!(matches!(
            train_network(&mut network(), &x, &y, &TrainConfig::new(0, 0.1)),
            Err(Error::Training(_))
        ));
        assert!(matches!(
            train_network(&mut network(), &x, &y, &TrainConfig::new(1, f32::NAN)),
            Err(Error::Training(_))
        ));
    }

    #[test]
    fn empty_network_is_training_error() {
        let mut net = Network::default();
        let err = train_network(&mut net, &zeros(&[2, 4]), &zeros(&[2, 2]), &TrainConfig::new(1, 0.1))
            .unwrap_err();
        assert!(matches!(err, Error::Training(_)));
    }
}
