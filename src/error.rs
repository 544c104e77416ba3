//! Typed errors for decoding and for the file-backed driver.

use std::io;
use thiserror::Error;

/// Errors that can occur while expanding a compressed block stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream ended in the middle of a literal payload, a match header, or
    /// a match offset — either the input was truncated or it is not a valid
    /// stream produced by this codec.
    #[error("compressed stream ended in the middle of a block")]
    UnexpectedEnd,

    /// A match block's offset decoded to zero, which is never valid.
    #[error("match block offset is zero")]
    ZeroOffset,

    /// A match block's offset reaches further back than any octet produced so
    /// far.
    #[error("match offset {offset} exceeds current output length {output_len}")]
    OffsetOutOfBounds { offset: usize, output_len: usize },

    /// Decoding would exceed the caller-supplied output bound.
    #[error("decoded output would exceed the {limit}-byte bound")]
    BoundsOverflow { limit: usize },
}

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read input file: {0}")]
    InputUnreadable(#[source] io::Error),

    #[error("cannot write output file: {0}")]
    OutputUnwritable(#[source] io::Error),

    #[error("malformed compressed stream: {0}")]
    Decode(#[from] DecodeError),

    #[error("usage: lz77r -encode <in> <out> | -decode <in> <out>")]
    Usage,
}
