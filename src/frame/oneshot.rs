//! `Vec`-based one-shot convenience wrappers around the frame API.
//!
//! These are thin allocating helpers over [`lz4f_compress_frame`] and
//! [`lz4f_decompress`] for callers who do not want to size and manage their
//! own destination buffers.

use crate::frame::compress::lz4f_compress_frame;
use crate::frame::decompress::{lz4f_create_decompression_context, lz4f_decompress};
use crate::frame::header::lz4f_compress_frame_bound;
use crate::frame::types::{Lz4FError, LZ4F_VERSION};

/// Compress `src` into a freshly allocated LZ4 frame using default preferences.
///
/// The destination buffer is sized via [`lz4f_compress_frame_bound`], so the
/// underlying call can never fail with `OutputTooSmall` given a valid `src`.
pub fn compress_frame_to_vec(src: &[u8]) -> Vec<u8> {
    let bound = lz4f_compress_frame_bound(src.len(), None);
    let mut dst = vec![0u8; bound];
    let written =
        lz4f_compress_frame(&mut dst, src, None).expect("dst sized via lz4f_compress_frame_bound");
    dst.truncate(written);
    dst
}

/// Decompress a complete LZ4 frame into a freshly allocated `Vec<u8>`.
///
/// Drives [`lz4f_decompress`] to completion, growing the output as blocks are
/// produced. Stops early (without error) if no progress can be made on a
/// truncated frame, matching the "stall" behaviour of the streaming API.
pub fn decompress_frame_to_vec(compressed: &[u8]) -> Result<Vec<u8>, Lz4FError> {
    let mut dctx = lz4f_create_decompression_context(LZ4F_VERSION)?;
    let mut out = Vec::new();
    let mut buf = [0u8; 64 * 1024];
    let mut pos = 0usize;

    loop {
        if pos >= compressed.len() {
            break;
        }
        let (consumed, written, hint) =
            lz4f_decompress(&mut dctx, Some(&mut buf), &compressed[pos..], None)?;
        out.extend_from_slice(&buf[..written]);
        pos += consumed;
        if consumed == 0 && written == 0 {
            // No progress possible on the remaining bytes — truncated input.
            break;
        }
        if hint == 0 {
            break;
        }
    }
    Ok(out)
}
