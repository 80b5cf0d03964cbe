use std::io::{Read, Write};

use crate::codec::primitives::{read_bytes, read_i32, size_to_i32, write_error, write_i32};
use crate::codec::tensor::{decode_tensor, encode_tensor};
use crate::error::{Error, Result};
use crate::layers::dense::Layer;

/// Writes the activation name (length includes a NUL terminator), then the
/// weights and biases tensors.
pub fn encode_layer<W: Write + ?Sized>(layer: &Layer, writer: &mut W) -> Result<()> {
    let name = layer.activation().as_bytes();
    let length = size_to_i32(name.len() + 1, "activation length")?;
    write_i32(writer, length, "activation length")?;
    writer
        .write_all(name)
        .and_then(|_| writer.write_all(&[0]))
        .map_err(|e| write_error("activation name", e))?;

    encode_tensor(layer.weights(), writer)?;
    encode_tensor(layer.biases(), writer)
}

/// Reads a layer written by [`encode_layer`].
pub fn decode_layer<R: Read + ?Sized>(reader: &mut R) -> Result<Layer> {
    let length = read_i32(reader, "activation length")?;
    if length <= 0 {
        return Err(Error::CorruptStream(format!("activation length {} is not positive", length)));
    }
    let mut name = read_bytes(reader, length as usize, "activation name")?;
    if name.last() == Some(&0) {
        name.pop();
    }
    let activation = String::from_utf8(name)
        .map_err(|_| Error::CorruptStream("activation name is not valid UTF-8".into()))?;

    let weights = decode_tensor(reader)?;
    let biases = decode_tensor(reader)?;

    log::debug!("decoded layer {:?} ({})", weights.shape(), activation);
    Layer::from_parts(weights, biases, activation)
}
