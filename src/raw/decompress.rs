//! The streaming expander: the exact inverse of [`crate::raw::compress`].

use fehler::{throw, throws};

use crate::error::DecodeError;
use crate::frame::{read_block, Block};

/// Expand `input`, appending the reconstructed octets to `output`.
///
/// `limit` bounds the total size `output` may reach (including whatever it
/// already held on entry); exceeding it is reported as
/// [`DecodeError::BoundsOverflow`] rather than growing without bound. Callers
/// with no natural bound should use [`decompress`], which passes
/// `usize::MAX`.
#[throws(DecodeError)]
pub fn decompress_into(input: &[u8], output: &mut Vec<u8>, limit: usize) {
    let mut pos = 0;
    while pos < input.len() {
        let (block, next) = read_block(input, pos)?.expect("pos < input.len() guarantees a block");
        match block {
            Block::Literal(bytes) => {
                if output.len() + bytes.len() > limit {
                    throw!(DecodeError::BoundsOverflow { limit });
                }
                output.extend_from_slice(bytes);
            }
            Block::Match { len, offset } => {
                let len = len as usize;
                let offset = offset as usize;
                if offset == 0 {
                    throw!(DecodeError::ZeroOffset);
                }
                if offset > output.len() {
                    throw!(DecodeError::OffsetOutOfBounds { offset, output_len: output.len() });
                }
                if output.len() + len > limit {
                    throw!(DecodeError::BoundsOverflow { limit });
                }
                copy_overlapping(output, offset, len);
            }
        }
        pos = next;
    }
}

/// Expand `input` into a freshly allocated, unbounded buffer.
#[throws(DecodeError)]
pub fn decompress(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    decompress_into(input, &mut output, usize::MAX)?;
    output
}

/// Append `len` octets copied from `offset` positions before the current
/// cursor. Non-overlapping copies (`offset >= len`) go through a single
/// slice copy; overlapping ones (`offset < len`, i.e. a run-length
/// extension) must proceed one octet at a time since later octets in the
/// copy depend on earlier ones just produced by the same copy.
fn copy_overlapping(output: &mut Vec<u8>, offset: usize, len: usize) {
    let old_len = output.len();
    if offset >= len {
        output.resize(old_len + len, 0);
        let (head, tail) = output.split_at_mut(old_len);
        tail.copy_from_slice(&head[old_len - offset..][..len]);
    } else {
        output.reserve(len);
        for i in 0..len {
            let b = output[old_len - offset + i];
            output.push(b);
        }
    }
}
