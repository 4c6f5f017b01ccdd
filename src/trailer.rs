// --- Constants ---

/// gzip magic bytes (ID1, ID2).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Fixed part of a member header: ID1 ID2 CM FLG MTIME(4) XFL OS.
const HEADER_LEN: usize = 10;

/// CRC-32 followed by ISIZE, both little-endian.
const TRAILER_LEN: usize = 8;

/// Smallest byte count that can hold a header and a trailer.
pub const MIN_MEMBER_LEN: usize = HEADER_LEN + TRAILER_LEN;

/// The last 8 bytes of a gzip member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipTrailer {
    /// CRC-32 of the uncompressed data.
    pub crc32: u32,
    /// Uncompressed length modulo 2^32.
    pub isize: u32,
}

/// Reads the trailer of `input` without decoding anything.
///
/// Returns `None` when `input` is too short to be a member or does not start
/// with the gzip magic. The values are not verified; a forged or truncated
/// stream yields whatever its last 8 bytes say.
pub fn trailer(input: &[u8]) -> Option<GzipTrailer> {
    if input.len() < MIN_MEMBER_LEN || input[..2] != GZIP_MAGIC {
        return None;
    }

    let tail = &input[input.len() - TRAILER_LEN..];
    Some(GzipTrailer {
        crc32: u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]),
        isize: u32::from_le_bytes([tail[4], tail[5], tail[6], tail[7]]),
    })
}

/// Uncompressed size claimed by the trailer. Only a hint: it wraps at 4 GiB
/// and comes from untrusted input.
pub fn size_hint(input: &[u8]) -> Option<usize> {
    trailer(input).map(|t| t.isize as usize)
}
