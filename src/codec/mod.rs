//! Binary model format.
//!
//! ```text
//! i32                      num_layers
//! per layer:
//!   i32                    activation_length (name bytes + 1 terminator)
//!   u8[activation_length]  activation name, NUL terminated
//!   tensor                 weights
//!   tensor                 biases
//! tensor:
//!   i32                    dims
//!   i32[dims]              shape
//!   f32[product(shape)]    data
//! ```
//!
//! All integers and floats use the host byte order. There is no magic number
//! or version field.

pub mod primitives;
pub mod tensor;
pub mod layer;
pub mod network;

pub use tensor::{encode_tensor, decode_tensor};
pub use layer::{encode_layer, decode_layer};
pub use network::{encode_network, decode_network};
