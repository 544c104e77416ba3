//! The wire format: a concatenation of literal and match blocks.
//!
//! Each block begins with a header octet `H`. If the high bit is clear, `H`
//! is the length of a literal run (`0..=127`) whose payload follows verbatim.
//! If the high bit is set, the low seven bits of `H` give a match length
//! (`3..=127`) and the two octets that follow are a big-endian offset
//! (`1..=65534`). There is no terminator; the decoder stops once it has
//! consumed exactly the compressed length.

use byteorder::{ByteOrder, BigEndian};
use fehler::{throw, throws};

use crate::error::DecodeError;
use crate::{MAX_LITERAL_LEN, MAX_MATCH_LEN, MIN_MATCH_LEN};

const MATCH_BIT: u8 = 0x80;
const LEN_MASK: u8 = 0x7F;

/// One decoded block, borrowing from the compressed input where possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Literal(&'a [u8]),
    Match { len: u8, offset: u16 },
}

/// Append a literal block header. `payload.len()` must be in `0..=127`; this
/// is an invariant upheld by the encoder (see `raw::compress`), not validated
/// here, since fragmenting longer runs is the caller's job.
pub fn write_literal(output: &mut Vec<u8>, payload: &[u8]) {
    debug_assert!(payload.len() <= MAX_LITERAL_LEN);
    output.push(payload.len() as u8);
    output.extend_from_slice(payload);
}

/// Append a match block header. `len` must be in `3..=127` and `offset` in
/// `1..=65534`; upheld by the encoder, checked here only in debug builds.
pub fn write_match(output: &mut Vec<u8>, len: u8, offset: u16) {
    debug_assert!((MIN_MATCH_LEN as u8..=MAX_MATCH_LEN as u8).contains(&len));
    debug_assert!(offset >= 1);
    output.push(MATCH_BIT | len);
    let mut buf = [0u8; 2];
    BigEndian::write_u16(&mut buf, offset);
    output.extend_from_slice(&buf);
}

/// Parse one block starting at `input[pos]`. Returns the block and the
/// position just past it, or `None` if `pos == input.len()`.
#[throws(DecodeError)]
pub fn read_block(input: &[u8], pos: usize) -> Option<(Block<'_>, usize)> {
    if pos == input.len() {
        return None;
    }
    let header = input[pos];
    let len = (header & LEN_MASK) as usize;

    if header & MATCH_BIT == 0 {
        let start = pos + 1;
        let end = start + len;
        if end > input.len() {
            throw!(DecodeError::UnexpectedEnd);
        }
        Some((Block::Literal(&input[start..end]), end))
    } else {
        let offset_start = pos + 1;
        let offset_end = offset_start + 2;
        if offset_end > input.len() {
            throw!(DecodeError::UnexpectedEnd);
        }
        let offset = BigEndian::read_u16(&input[offset_start..offset_end]);
        Some((Block::Match { len: len as u8, offset }, offset_end))
    }
}
