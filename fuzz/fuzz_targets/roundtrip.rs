#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77r::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    let compressed = compress(data);
    let decompressed = decompress(&compressed).expect("our own output must always decode");
    assert_eq!(decompressed, data);
});
