use lz77r::error::DecodeError;
use lz77r::testutil::{mixed_compressibility, pseudo_random, repeated_byte};
use lz77r::{compress, compress_into, decompress, decompress_into, encoded_size};

fn assert_round_trips(input: &[u8]) {
    let compressed = compress(input);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn scenario_empty_input() {
    assert_eq!(compress(b""), Vec::<u8>::new());
    assert_eq!(decompress(b"").unwrap(), Vec::<u8>::new());
}

#[test]
fn scenario_single_octet() {
    let compressed = compress(b"A");
    assert_eq!(compressed, vec![0x01, b'A']);
    assert_eq!(decompress(&compressed).unwrap(), b"A");
}

#[test]
fn scenario_run_of_identical_octets() {
    let input = vec![b'A'; 8];
    let compressed = compress(&input);
    // one-octet literal seed, then a single match of length 7 at offset 1:
    // the hash slot written while encoding idx=0 already resolves idx=1's
    // lookup to a valid back-reference, so only one literal byte is ever
    // pending when the flush triggers.
    assert_eq!(compressed, vec![0x01, b'A', 0x87, 0x00, 0x01]);
    assert_round_trips(&input);
}

#[test]
fn scenario_periodic_pattern() {
    assert_round_trips(b"ABCABCABCABC");
}

#[test]
fn scenario_inputs_at_or_below_match_threshold() {
    for len in 0..=3 {
        let input = repeated_byte(b'x', len);
        assert_round_trips(&input);
    }
}

#[test]
fn scenario_million_random_octets_round_trips_without_crashing() {
    let input = pseudo_random(1_000_000, 7);
    let compressed = compress(&input);
    // incompressible data should not blow up wildly; a handful of literal
    // headers is the expected overhead.
    assert!(compressed.len() <= input.len() + input.len() / 64 + 16);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn scenario_million_copies_of_a_is_small() {
    let input = repeated_byte(b'A', 1_000_000);
    let compressed = compress(&input);
    assert!(compressed.len() < 30_000);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn mixed_compressibility_round_trips() {
    let input = mixed_compressibility(200_000, 99);
    assert_round_trips(&input);
}

#[test]
fn encoded_size_agrees_with_materialized_output() {
    for input in [
        repeated_byte(b'z', 500),
        pseudo_random(5_000, 3),
        b"ABCABCABCABCABCABC".to_vec(),
    ] {
        let mut buf = Vec::new();
        compress_into(&input, &mut buf);
        assert_eq!(encoded_size(&input), buf.len());
    }
}

#[test]
fn every_match_is_a_valid_back_reference() {
    let input = mixed_compressibility(50_000, 123);
    let compressed = compress(&input);

    let mut in_pos = 0usize;
    let mut out_pos = 0usize;
    while in_pos < compressed.len() {
        let header = compressed[in_pos];
        if header & 0x80 == 0 {
            let len = header as usize;
            let payload = &compressed[in_pos + 1..in_pos + 1 + len];
            assert_eq!(payload, &input[out_pos..out_pos + len]);
            in_pos += 1 + len;
            out_pos += len;
        } else {
            let len = (header & 0x7F) as usize;
            let offset =
                u16::from_be_bytes([compressed[in_pos + 1], compressed[in_pos + 2]]) as usize;
            assert!(offset >= 1 && offset <= out_pos);
            assert_eq!(
                &input[out_pos..out_pos + len],
                &input[out_pos - offset..out_pos - offset + len]
            );
            in_pos += 3;
            out_pos += len;
        }
    }
    assert_eq!(out_pos, input.len());
}

#[test]
fn fault_truncated_mid_match_header() {
    let err = decompress(&[0x01, b'a', 0x85, 0x00]).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedEnd));
}

#[test]
fn fault_offset_exceeds_output_length() {
    let err = decompress(&[0x01, b'a', 0x83, 0x00, 0x05]).unwrap_err();
    assert!(matches!(err, DecodeError::OffsetOutOfBounds { .. }));
}

#[test]
fn fault_bounds_overflow_against_caller_limit() {
    let input = repeated_byte(b'B', 10_000);
    let compressed = compress(&input);
    let mut output = Vec::new();
    let err = decompress_into(&compressed, &mut output, 100).unwrap_err();
    assert!(matches!(err, DecodeError::BoundsOverflow { limit: 100 }));
}

#[test]
fn determinism_same_input_same_output() {
    let input = mixed_compressibility(20_000, 55);
    assert_eq!(compress(&input), compress(&input));
}
