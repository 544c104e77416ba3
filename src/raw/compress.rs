//! The greedy, single-pass encoder.
//!
//! Exposes two entry points rather than overloading a nullable output buffer:
//! [`encoded_size`] measures the compressed length without allocating a
//! single output octet, and [`compress_into`]/[`compress`] materialize it.
//! Both share one internal driver (`run`) generic over a [`Sink`], following
//! the teacher's pattern of a single loop generic over `W: Write` — widened
//! here to also admit a sink that only counts bytes.

use crate::frame;
use crate::raw::hash::{HashIndex, Match};
use crate::MAX_MATCH_LEN;

/// Where emitted blocks go: either materialized into a buffer, or merely
/// counted. Both observe the identical stream of block decisions, which is
/// what keeps [`encoded_size`] and [`compress_into`] in lockstep.
trait Sink {
    fn write_literal(&mut self, bytes: &[u8]);
    fn write_match(&mut self, len: u8, offset: u16);
}

struct VecSink<'a> {
    output: &'a mut Vec<u8>,
}

impl<'a> Sink for VecSink<'a> {
    fn write_literal(&mut self, bytes: &[u8]) {
        frame::write_literal(self.output, bytes);
    }

    fn write_match(&mut self, len: u8, offset: u16) {
        frame::write_match(self.output, len, offset);
    }
}

#[derive(Default)]
struct CountSink {
    len: usize,
}

impl Sink for CountSink {
    fn write_literal(&mut self, bytes: &[u8]) {
        self.len += 1 + bytes.len();
    }

    fn write_match(&mut self, _len: u8, _offset: u16) {
        self.len += 3;
    }
}

/// Drain the pending literal accumulator, oldest bytes first, splitting into
/// blocks of at most 127 octets each.
fn flush_literals<S: Sink>(sink: &mut S, input: &[u8], idx: usize, literal_count: usize) {
    let mut remaining = literal_count;
    let mut start = idx - literal_count;
    while remaining > 0 {
        let chunk = remaining.min(crate::MAX_LITERAL_LEN);
        sink.write_literal(&input[start..start + chunk]);
        start += chunk;
        remaining -= chunk;
    }
}

/// Emit a match of the given total length as one or more consecutive match
/// blocks sharing `offset`, each within the 7-bit length field's range.
///
/// The source's 7-bit length field can only address `3..=127`, but the match
/// finder may report matches up to 255 octets long; splitting evenly (rather
/// than peeling off a fixed 127-octet head) guarantees every resulting chunk
/// stays at or above the 3-octet minimum, which a naive 127/remainder split
/// cannot guarantee for lengths like 128 or 129.
fn emit_match<S: Sink>(sink: &mut S, len: usize, offset: u16) {
    let chunks = (len + MAX_MATCH_LEN - 1) / MAX_MATCH_LEN;
    let base = len / chunks;
    let mut extra = len % chunks;
    for _ in 0..chunks {
        let chunk_len = if extra > 0 {
            extra -= 1;
            base + 1
        } else {
            base
        };
        sink.write_match(chunk_len as u8, offset);
    }
}

/// The encoder's main loop. Preserves the source control-flow contract
/// exactly: the loop runs while `idx <= input.len()`, the match finder is
/// consulted only when `idx + 2 < input.len()`, and a match is deferred into
/// the literal accumulator whenever literals are already pending — even a
/// length-3 match, which is otherwise the minimum profitable length. This is
/// required for byte-identical output against any other implementation of
/// this format, not merely a style choice.
fn run<S: Sink>(input: &[u8], sink: &mut S) {
    let mut hash = HashIndex::new();
    let mut idx = 0usize;
    let mut literal_count = 0usize;
    let n = input.len();

    while idx <= n {
        let found = if idx + 2 < n {
            hash.find(input, idx)
        } else {
            Match { len: 1, offset: 0 }
        };
        let len = found.len;

        if len > 3 || idx == n {
            flush_literals(sink, input, idx, literal_count);
            literal_count = 0;
        }

        if len > 2 && literal_count == 0 {
            emit_match(sink, len, found.offset as u16);
        } else {
            literal_count += len;
        }

        for _ in 0..len {
            hash.update(input, idx);
            idx += 1;
        }
    }
}

/// Compute the exact compressed length of `input` without materializing it.
pub fn encoded_size(input: &[u8]) -> usize {
    let mut sink = CountSink::default();
    run(input, &mut sink);
    sink.len
}

/// Compress `input`, appending the compressed stream to `output`.
pub fn compress_into(input: &[u8], output: &mut Vec<u8>) {
    let mut sink = VecSink { output };
    run(input, &mut sink);
}

/// Compress `input` into a freshly allocated buffer.
///
/// The buffer is pre-sized to `input.len() + ceil(input.len() / 127)`, the
/// safe worst case for all-literal, maximally fragmented output — no
/// reallocation occurs for any input.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let worst_case_headers = (input.len() + crate::MAX_LITERAL_LEN - 1) / crate::MAX_LITERAL_LEN;
    let mut output = Vec::with_capacity(input.len() + worst_case_headers);
    compress_into(input, &mut output);
    output
}
