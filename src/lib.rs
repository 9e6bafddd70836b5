#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::all, clippy::pedantic))]
#![cfg_attr(
    not(test),
    allow(
        clippy::module_name_repetitions,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc
    )
)]
//! SWIFFT compression function (n = 64, m = 32, p = 257).
//!
//! Maps a 2048-bit input block, optionally signed by a 2048-bit sign block,
//! to a 1024-bit hash that remains composable: hash blocks form a ring
//! element-wise, so hashes can be added, subtracted and multiplied while
//! staying valid hashes of the correspondingly combined inputs. A separate
//! compaction step trades composability for a 512-bit encoding.
//!
//! ```ignore
//! use swifft_core::{compute, HashBlock, InputBlock};
//!
//! let input = InputBlock([0u8; 256]);
//! let mut hash = HashBlock::ZERO;
//! compute(&input, &mut hash);
//! ```
//!
//! Batched variants of every operation live in [`batch`]; with the
//! `parallel` feature they fan out over rayon once a batch exceeds
//! [`BLOCKS_PARALLELIZATION_THRESHOLD`].

/// Prime modulus of the coefficient ring.
pub const P: i16 = 257;
/// Number of elements in a hash block.
pub const N: usize = 64;
/// Number of 8-byte groups in a full input block.
pub const M: usize = 32;
/// Input block size in bytes (2048 bits).
pub const INPUT_BLOCK_LEN: usize = 256;
/// Composable hash block size in bytes (1024 bits).
pub const OUTPUT_BLOCK_LEN: usize = 128;
/// Compact hash size in bytes (512 bits).
pub const COMPACT_BLOCK_LEN: usize = 64;

pub mod batch;
mod block;
mod compact;
mod compress;
mod fft;
mod key;
mod lane;
pub mod pattern;
mod tables;
#[cfg(test)]
pub(crate) mod test_support;

pub use crate::batch::{FftOutput, BLOCKS_PARALLELIZATION_THRESHOLD};
pub use crate::block::{CompactBlock, HashBlock, InputBlock, SignBlock};
pub use crate::compact::compact;
pub use crate::compress::{compute, compute_signed};
pub use crate::fft::{fft, fftsum};
