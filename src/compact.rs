//! Compaction of a composable hash into its 512-bit storage form.

use crate::block::{CompactBlock, HashBlock};
use crate::COMPACT_BLOCK_LEN;

/// Compacts a 128-byte composable hash into 64 bytes.
///
/// The 64 canonical digits are read as a base-257 number and converted to
/// base 256, truncated to 512 bits, little-endian. The conversion is a pure
/// function of the hash; it is lossy only in the sliver above 2^512, which
/// is what makes the compact form non-composable.
#[allow(clippy::cast_possible_truncation)] // stores are masked to one byte
pub fn compact(hash: &HashBlock, compact: &mut CompactBlock) {
    let out = &mut compact.0;
    *out = [0; COMPACT_BLOCK_LEN];
    // Most significant digit first: out = out * 257 + digit, mod 2^512.
    for &element in hash.0.iter().rev() {
        let mut carry = u32::from(canonical_digit(element));
        for byte in out.iter_mut() {
            let wide = u32::from(*byte) * 257 + carry;
            *byte = (wide & 0xFF) as u8;
            carry = wide >> 8;
        }
    }
}

/// Lift a centered element into the canonical digit range `[0, 256]`.
#[allow(clippy::cast_sign_loss)] // non-negative after the fold
fn canonical_digit(v: i16) -> u16 {
    debug_assert!((-128..=128).contains(&v));
    if v < 0 {
        (v + 257) as u16
    } else {
        v as u16
    }
}
