#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77r::decompress;

fuzz_target!(|data: &[u8]| {
    // arbitrary bytes are not necessarily a valid stream; decoding must
    // either succeed or report a DecodeError, never panic.
    let _ = decompress(data);
});
