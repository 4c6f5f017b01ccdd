//! C-ABI shim: exports `bounded_gunzip` with the integer-coded contract.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! ```c
//! int bounded_gunzip(const uint8_t *src, int src_len, uint8_t *dst, int dst_len);
//! ```
//!
//! Returns the number of bytes written, `-2` if `dst` is too small, or `-1`
//! for invalid arguments and invalid streams.

use core::ffi::c_int;
use core::slice;

use crate::decompress::{decompress, status_code};
use crate::error::DecompressionError;

const INVALID: c_int = DecompressionError::InvalidStream.code();

/// # Safety
/// `src` must be valid for `src_len` reads and `dst` for `dst_len` writes,
/// and the two regions must not overlap. Either pointer may be null only
/// when its length is zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bounded_gunzip(
    src: *const u8,
    src_len: c_int,
    dst: *mut u8,
    dst_len: c_int,
) -> c_int {
    if src_len < 0 || dst_len < 0 {
        return INVALID;
    }
    if (src.is_null() && src_len != 0) || (dst.is_null() && dst_len != 0) {
        return INVALID;
    }

    let input: &[u8] = if src_len == 0 {
        &[]
    } else {
        // SAFETY: caller guarantees `src` points to `src_len` readable bytes.
        unsafe { slice::from_raw_parts(src, src_len as usize) }
    };
    let output: &mut [u8] = if dst_len == 0 {
        &mut []
    } else {
        // SAFETY: caller guarantees `dst` points to `dst_len` writable bytes
        // not aliased by `src`.
        unsafe { slice::from_raw_parts_mut(dst, dst_len as usize) }
    };

    // Bounded by dst_len, so it fits.
    status_code(&decompress(input, output)) as c_int
}

#[cfg(test)]
mod tests {
    use core::ptr;
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    const EMPTY_MEMBER: [u8; 20] = [
        0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, //
        0x03, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn test_success_returns_count() {
        let compressed = gzip(b"dive-log-42");
        let mut out = [0u8; 11];
        let rc = unsafe {
            bounded_gunzip(
                compressed.as_ptr(),
                compressed.len() as c_int,
                out.as_mut_ptr(),
                out.len() as c_int,
            )
        };
        assert_eq!(rc, 11);
        assert_eq!(&out, b"dive-log-42");
    }

    #[test]
    fn test_short_destination() {
        let compressed = gzip(b"dive-log-42");
        let mut out = [0u8; 5];
        let rc = unsafe {
            bounded_gunzip(
                compressed.as_ptr(),
                compressed.len() as c_int,
                out.as_mut_ptr(),
                out.len() as c_int,
            )
        };
        assert_eq!(rc, -2);
    }

    #[test]
    fn test_corrupt_stream() {
        let garbage = [0x00u8, 0x01, 0x02];
        let mut out = [0u8; 16];
        let rc = unsafe { bounded_gunzip(garbage.as_ptr(), 3, out.as_mut_ptr(), 16) };
        assert_eq!(rc, -1);
    }

    #[test]
    fn test_negative_lengths() {
        let mut out = [0u8; 4];
        let rc = unsafe { bounded_gunzip(EMPTY_MEMBER.as_ptr(), -1, out.as_mut_ptr(), 4) };
        assert_eq!(rc, -1);
        let rc = unsafe { bounded_gunzip(EMPTY_MEMBER.as_ptr(), 20, out.as_mut_ptr(), -4) };
        assert_eq!(rc, -1);
    }

    #[test]
    fn test_null_pointers() {
        let mut out = [0u8; 4];
        let rc = unsafe { bounded_gunzip(ptr::null(), 20, out.as_mut_ptr(), 4) };
        assert_eq!(rc, -1);
        let rc = unsafe { bounded_gunzip(EMPTY_MEMBER.as_ptr(), 20, ptr::null_mut(), 4) };
        assert_eq!(rc, -1);
        // Empty input through a null pointer is just an invalid stream.
        let rc = unsafe { bounded_gunzip(ptr::null(), 0, out.as_mut_ptr(), 4) };
        assert_eq!(rc, -1);
    }

    #[test]
    fn test_null_destination_with_zero_capacity() {
        let rc = unsafe { bounded_gunzip(EMPTY_MEMBER.as_ptr(), 20, ptr::null_mut(), 0) };
        assert_eq!(rc, 0);
    }
}
