use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`BitBuffer`](crate::BitBuffer) operations.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bit count the operation cannot accept.
    #[error("invalid bit count {count} (expected 1..={max})")]
    InvalidArgument { count: usize, max: usize },

    /// A read past the end of the occupied bit range.
    #[error("read of {count} bits at offset {start} exceeds a buffer of {len} bits")]
    OutOfRange {
        start: usize,
        count: usize,
        len: usize,
    },

    /// A pop requesting more bits than the buffer holds.
    #[error("cannot pop {requested} bits from a buffer of {available} bits")]
    InsufficientData { requested: usize, available: usize },
}
