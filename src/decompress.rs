use crate::error::DecompressionError;
use libdeflater::{DecompressionError as DecoderStatus, Decompressor};

type Result<T> = core::result::Result<T, DecompressionError>;

/// Decompresses one gzip member from `input` into `output` in a single step.
///
/// The whole of `input` is handed to the decoder at once and `output.len()` is
/// the hard capacity: nothing is ever written past it and nothing is
/// allocated for the output. On success the returned count is the decoder's
/// own tally of emitted bytes, so `output[..n]` is the full decoded stream.
/// Bytes past `n` are unspecified.
///
/// Only the gzip container is accepted; zlib-wrapped and raw deflate streams
/// are rejected as [`DecompressionError::InvalidStream`].
///
/// # Errors
/// * [`DecompressionError::InsufficientCapacity`] if the stream does not fit.
///   Nothing about the partial output is reported; retry the whole call with a
///   larger buffer.
/// * [`DecompressionError::InvalidStream`] for anything else: bad magic or
///   header, corrupt body, truncation, CRC-32 or length mismatch.
///
/// # Panics
/// Panics if the decoder context cannot be allocated. The panic unwinds in
/// Rust callers; across the C ABI it aborts the process.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    // Scoped to this call; dropping it releases the decoder on every path.
    let mut decoder = Decompressor::new();

    let outcome = decoder
        .gzip_decompress(input, output)
        .map_err(|status| match status {
            DecoderStatus::InsufficientSpace => DecompressionError::InsufficientCapacity,
            _ => DecompressionError::InvalidStream,
        });

    drop(decoder);

    if let Ok(written) = outcome {
        debug_assert!(written <= output.len());
    }

    log::trace!(
        "gunzip: {} bytes in, capacity {}, outcome {:?}",
        input.len(),
        output.len(),
        outcome
    );

    outcome
}

/// Encodes an outcome the way the C helper did: the byte count on success,
/// `-2` when the buffer was too small, `-1` for a bad stream.
pub fn status_code(outcome: &Result<usize>) -> isize {
    match outcome {
        // A slice never holds more than isize::MAX bytes.
        Ok(written) => *written as isize,
        Err(e) => e.code() as isize,
    }
}
