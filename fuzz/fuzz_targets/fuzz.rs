#![no_main]

use std::io::Write;

use bounded_gunzip::{DecompressionError, decompress};
use flate2::Compression;
use flate2::write::GzEncoder;
use libfuzzer_sys::fuzz_target;

/// Arbitrary bytes must come back as a result, never a panic, and a success
/// may never claim more bytes than the destination holds.
fn verify_decompression_robustness(data: &[u8]) {
    // Capacity derived from the input so small and large buffers both get hit.
    let capacity = data.first().map_or(0, |&b| b as usize * 16);
    let mut output = vec![0u8; capacity];
    if let Ok(written) = decompress(data, &mut output) {
        assert!(written <= capacity, "count {written} exceeds capacity {capacity}");
    }
}

/// `decompress(gzip(data))` must equal `data` at exact capacity and report
/// `InsufficientCapacity` one byte short.
fn verify_round_trip(data: &[u8]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(data).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut output = vec![0u8; data.len()];
    match decompress(&compressed, &mut output) {
        Ok(n) => {
            if n != data.len() || output != data {
                panic!(
                    "Round-trip mismatch!\nInput len: {}\nCompressed len: {}\nReported len: {}",
                    data.len(),
                    compressed.len(),
                    n
                );
            }
        }
        Err(e) => panic!(
            "Round-trip failed! Valid gzip rejected.\nError: {:?}\nInput len: {}",
            e,
            data.len()
        ),
    }

    if !data.is_empty() {
        let mut short = vec![0u8; data.len() - 1];
        assert_eq!(
            decompress(&compressed, &mut short),
            Err(DecompressionError::InsufficientCapacity)
        );
    }
}

fuzz_target!(|data: &[u8]| {
    verify_decompression_robustness(data);
    verify_round_trip(data);
});
