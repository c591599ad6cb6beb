//! `Vec`-based one-shot convenience wrappers around the block codec.

use super::compress::{compress_bound, compress_default};
use super::decompress_api::decompress_safe;
use super::decompress_core::DecompressError;

/// Compress `src` into a freshly allocated buffer using the default (fast,
/// acceleration 1) strategy, sized exactly to the compressed length.
///
/// Returns an empty `Vec` if `src` exceeds `LZ4_MAX_INPUT_SIZE` — mirrors
/// [`compress_bound`]'s own "0 means oversized input" convention rather than
/// panicking on a buffer it deliberately sized to zero.
pub fn compress_block_to_vec(src: &[u8]) -> Vec<u8> {
    let bound = compress_bound(src.len() as i32).max(0) as usize;
    if bound == 0 {
        return Vec::new();
    }
    let mut dst = vec![0u8; bound];
    let written = compress_default(src, &mut dst).expect("dst sized via compress_bound");
    dst.truncate(written);
    dst
}

/// Decompress a single LZ4 block into a freshly allocated buffer of exactly
/// `original_len` bytes.
pub fn decompress_block_to_vec(
    compressed: &[u8],
    original_len: usize,
) -> Result<Vec<u8>, DecompressError> {
    let mut dst = vec![0u8; original_len];
    let written = decompress_safe(compressed, &mut dst)?;
    dst.truncate(written);
    Ok(dst)
}
