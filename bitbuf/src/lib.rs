mod buffer;
mod error;
mod field;
mod word;

pub use buffer::BitBuffer;
pub use error::{Error, Result};
pub use field::Field;
pub use word::{reverse_bits, reverse_bits_in_bytes};
