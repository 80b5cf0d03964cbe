//! Fixed-width scalars in the byte order of the host.
//!
//! The model format has no byte-order marker, so files move only between
//! machines of the same endianness.

use std::io::{ErrorKind, Read, Write};

use crate::error::{Error, Result};

const WORD: usize = 4;

/// Maps a read failure: running out of bytes means the stream is corrupt,
/// anything else is a genuine I/O error.
pub(crate) fn read_error(what: &str, e: std::io::Error) -> Error {
    if e.kind() == ErrorKind::UnexpectedEof {
        Error::CorruptStream(format!("stream ended while reading {}", what))
    } else {
        Error::io(format!("error reading {}", what), e)
    }
}

pub(crate) fn write_error(what: &str, e: std::io::Error) -> Error {
    Error::io(format!("error writing {}", what), e)
}

pub fn read_i32<R: Read + ?Sized>(reader: &mut R, what: &str) -> Result<i32> {
    let mut buf = [0u8; WORD];
    reader.read_exact(&mut buf).map_err(|e| read_error(what, e))?;
    Ok(i32::from_ne_bytes(buf))
}

pub fn write_i32<W: Write + ?Sized>(writer: &mut W, value: i32, what: &str) -> Result<()> {
    writer.write_all(&value.to_ne_bytes()).map_err(|e| write_error(what, e))
}

/// Converts a size to the on-disk `i32`, failing if it does not fit.
pub fn size_to_i32(value: usize, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        Error::Allocation(format!("{} {} does not fit a 32-bit integer", what, value))
    })
}

/// Reads exactly `count` bytes without trusting `count` for pre-allocation.
pub fn read_bytes<R: Read + ?Sized>(reader: &mut R, count: usize, what: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    (&mut *reader)
        .take(count as u64)
        .read_to_end(&mut buf)
        .map_err(|e| read_error(what, e))?;
    if buf.len() < count {
        return Err(Error::CorruptStream(format!(
            "stream ended while reading {}: expected {} bytes, found {}",
            what,
            count,
            buf.len()
        )));
    }
    Ok(buf)
}

/// Reads `count` native-endian `f32` values.
pub fn read_f32s<R: Read + ?Sized>(reader: &mut R, count: usize, what: &str) -> Result<Vec<f32>> {
    let byte_len = count.checked_mul(WORD).ok_or_else(|| {
        Error::CorruptStream(format!("{} declares {} values, too many to read", what, count))
    })?;
    let bytes = read_bytes(reader, byte_len, what)?;
    Ok(bytes
        .chunks_exact(WORD)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

pub fn write_f32s<W: Write + ?Sized>(writer: &mut W, values: &[f32], what: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity(values.len() * WORD);
    for v in values {
        bytes.extend_from_slice(&v.to_ne_bytes());
    }
    writer.write_all(&bytes).map_err(|e| write_error(what, e))
}
