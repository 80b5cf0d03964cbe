//! strata-nn command line
//!
//! Builds, saves and inspects binary model files, and counts the classes of
//! an image-folder dataset.
//!
//! Run with:
//!   cargo run -- new --sizes 4,3,2 --activations relu,sigmoid -o model.bin
//!   cargo run -- inspect model.bin
//!   cargo run -- classes path/to/dataset
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use strata_nn::{enumerate_classes, Error, Network, NetworkSpec};

#[derive(Parser)]
#[command(name = "strata-nn")]
#[command(about = "Create and inspect feed-forward network model files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a freshly initialized network and save it
    New {
        /// Layer widths from input to output, e.g. 4,3,2
        #[arg(long, value_delimiter = ',', required_unless_present = "config")]
        sizes: Vec<usize>,

        /// One activation name per layer, e.g. relu,sigmoid
        #[arg(long, value_delimiter = ',', required_unless_present = "config")]
        activations: Vec<String>,

        /// Seed for reproducible weights
        #[arg(long)]
        seed: Option<u64>,

        /// JSON network spec to use instead of --sizes/--activations
        #[arg(long, conflicts_with_all = ["sizes", "activations"])]
        config: Option<PathBuf>,

        /// Output model file
        #[arg(short, long, default_value = "model.bin")]
        output: PathBuf,
    },

    /// Print the layers of a saved model
    Inspect {
        model: PathBuf,
    },

    /// Count the class folders of a dataset directory
    Classes {
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::New { sizes, activations, seed, config, output } => {
            let mut spec = match config {
                Some(path) => NetworkSpec::load_json(&path.to_string_lossy())?,
                None => NetworkSpec { layer_sizes: sizes, activations, seed: None },
            };
            if seed.is_some() {
                spec.seed = seed;
            }
            let network = spec.build()?;
            network.save(&output)?;
            println!("Saved {} layer(s) to {}", network.num_layers(), output.display());
        }
        Commands::Inspect { model } => {
            let network = Network::load(&model)?;
            println!("{}: {} layer(s)", model.display(), network.num_layers());
            for (i, layer) in network.layers().iter().enumerate() {
                println!(
                    "  [{i}] {:>4} -> {:<4} {:<12} weights {:?} biases {:?}",
                    layer.input_size(),
                    layer.output_size(),
                    layer.activation(),
                    layer.weights().shape(),
                    layer.biases().shape(),
                );
            }
        }
        Commands::Classes { path } => {
            let count = enumerate_classes(&path)?;
            println!("{count} class folder(s) in {} (each folder is one class)", path.display());
        }
    }
    Ok(())
}

fn exit_status(e: &Error) -> u8 {
    match e {
        Error::Io { .. } => 2,
        Error::CorruptStream(_) => 3,
        Error::Directory(_) => 4,
        Error::Shape(_) | Error::Allocation(_) | Error::Config(_) => 5,
        _ => 1,
    }
}
