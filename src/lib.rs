#![forbid(unsafe_code)]

//! A byte-oriented LZ77-style dictionary codec.
//!
//! The compressed stream is a concatenation of self-delimiting blocks: literal
//! runs and back-references. There is no envelope around it — no magic bytes,
//! no length prefix, no checksum. See [`frame`] for the exact wire format.

pub mod cli;
pub mod error;
pub mod frame;
pub mod raw;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

/// Maximum back-reference reach: offsets must satisfy `1 <= offset <= MAX_OFFSET`.
pub const MAX_OFFSET: u32 = 65534;

/// Maximum encodable match length (the 7-bit length field in a match header).
pub const MAX_MATCH_LEN: usize = 127;

/// Shortest match worth emitting as a back-reference instead of literals.
pub const MIN_MATCH_LEN: usize = 3;

/// Maximum octets carried by a single literal block header.
pub const MAX_LITERAL_LEN: usize = 127;

/// Width, in bits, of the direct-addressed hash index (`2^HASH_BITS` slots).
pub const HASH_BITS: u32 = 16;

pub use error::{DecodeError, DriverError};
pub use raw::compress::{compress, compress_into, encoded_size};
pub use raw::decompress::{decompress, decompress_into};
