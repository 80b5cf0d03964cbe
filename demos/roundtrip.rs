use rand::rngs::StdRng;
use rand::SeedableRng;
use strata_nn::Network;

fn main() -> strata_nn::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let network = Network::new(2, &[4, 3, 2], &["relu", "sigmoid"], &mut rng)?;

    let path = std::env::temp_dir().join("strata-nn-roundtrip.bin");
    network.save(&path)?;
    let restored = Network::load(&path)?;

    for (i, layer) in restored.layers().iter().enumerate() {
        println!(
            "Layer {i}: {} weights {:?}, biases {:?}",
            layer.activation(),
            layer.weights().shape(),
            layer.biases().shape()
        );
    }
    println!("Identical after reload: {}", restored == network);

    std::fs::remove_file(&path).ok();
    Ok(())
}
