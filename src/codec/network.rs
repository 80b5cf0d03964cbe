use std::io::{Read, Write};

use crate::codec::layer::{decode_layer, encode_layer};
use crate::codec::primitives::{read_i32, size_to_i32, write_i32};
use crate::error::{Error, Result};
use crate::network::network::Network;

/// Writes the layer count followed by each layer in evaluation order.
pub fn encode_network<W: Write + ?Sized>(network: &Network, writer: &mut W) -> Result<()> {
    write_i32(writer, size_to_i32(network.num_layers(), "layer count")?, "layer count")?;
    for layer in network.layers() {
        encode_layer(layer, writer)?;
    }
    Ok(())
}

/// Reads a network written by [`encode_network`]. Bytes after the last
/// layer are left unread.
pub fn decode_network<R: Read + ?Sized>(reader: &mut R) -> Result<Network> {
    let num_layers = read_i32(reader, "layer count")?;
    if num_layers < 0 {
        return Err(Error::CorruptStream(format!("layer count {} is negative", num_layers)));
    }

    let mut layers = Vec::new();
    for i in 0..num_layers {
        let layer = decode_layer(reader).map_err(|e| match e {
            Error::CorruptStream(msg) => Error::CorruptStream(format!(
                "layer {} of {}: {}",
                i, num_layers, msg
            )),
            other => other,
        })?;
        layers.push(layer);
    }
    Network::from_layers(layers)
}
