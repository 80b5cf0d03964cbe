use std::io::{Read, Write};

use crate::codec::primitives::{read_f32s, read_i32, size_to_i32, write_f32s, write_i32};
use crate::error::{Error, Result};
use crate::math::tensor::Tensor;

/// Writes `dims`, the shape, then the flat data.
pub fn encode_tensor<W: Write + ?Sized>(tensor: &Tensor, writer: &mut W) -> Result<()> {
    write_i32(writer, size_to_i32(tensor.dims(), "tensor dims")?, "tensor dims")?;
    for &dim in tensor.shape() {
        write_i32(writer, size_to_i32(dim, "tensor dimension")?, "tensor shape")?;
    }
    write_f32s(writer, tensor.data(), "tensor data")
}

/// Reads a tensor written by [`encode_tensor`].
pub fn decode_tensor<R: Read + ?Sized>(reader: &mut R) -> Result<Tensor> {
    let dims = read_i32(reader, "tensor dims")?;
    if dims <= 0 {
        return Err(Error::Allocation(format!("tensor declares {} dimensions", dims)));
    }

    let mut shape = Vec::new();
    for _ in 0..dims {
        let dim = read_i32(reader, "tensor shape")?;
        if dim <= 0 {
            return Err(Error::Allocation(format!("tensor declares dimension {}", dim)));
        }
        shape.push(dim as usize);
    }

    let size = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| Error::Allocation(format!("tensor shape {:?} is too large", shape)))?;
    let data = read_f32s(reader, size, "tensor data")?;

    log::debug!("decoded tensor {:?}", shape);
    Tensor::from_data(&shape, data)
}
