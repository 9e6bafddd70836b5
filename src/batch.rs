//! Multi-block drivers.
//!
//! Every single-block operation has a `*_multiple` form over parallel
//! slices, observationally equivalent to applying the single-block call per
//! index in block order. Blocks are data-independent, so with the
//! `parallel` feature enabled batches larger than
//! [`BLOCKS_PARALLELIZATION_THRESHOLD`] are fanned out across the rayon
//! pool; output never depends on which branch ran.
//!
//! Slice lengths carry the block count; mismatched lengths are caller bugs
//! and panic.

use crate::block::{CompactBlock, HashBlock, InputBlock, SignBlock};
use crate::compact::compact;
use crate::compress::{compute, compute_signed};
use crate::fft::{fft, fftsum};
use crate::key::PI_KEY;
use crate::{M, N};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum number of blocks above which a batched driver may parallelize.
pub const BLOCKS_PARALLELIZATION_THRESHOLD: usize = 8;

/// FFT output for one full block: `M * N` partially reduced elements.
pub type FftOutput = [i16; M * N];

#[cfg(feature = "parallel")]
fn for_each_pair<O, I, F>(outputs: &mut [O], inputs: &[I], op: F)
where
    O: Send,
    I: Sync,
    F: Fn(&mut O, &I) + Sync,
{
    if outputs.len() > BLOCKS_PARALLELIZATION_THRESHOLD {
        outputs
            .par_iter_mut()
            .zip(inputs.par_iter())
            .for_each(|(output, input)| op(output, input));
    } else {
        for (output, input) in outputs.iter_mut().zip(inputs) {
            op(output, input);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_pair<O, I, F>(outputs: &mut [O], inputs: &[I], op: F)
where
    F: Fn(&mut O, &I),
{
    for (output, input) in outputs.iter_mut().zip(inputs) {
        op(output, input);
    }
}

#[cfg(feature = "parallel")]
fn for_each_triple<O, A, B, F>(outputs: &mut [O], first: &[A], second: &[B], op: F)
where
    O: Send,
    A: Sync,
    B: Sync,
    F: Fn(&mut O, &A, &B) + Sync,
{
    if outputs.len() > BLOCKS_PARALLELIZATION_THRESHOLD {
        outputs
            .par_iter_mut()
            .zip(first.par_iter())
            .zip(second.par_iter())
            .for_each(|((output, a), b)| op(output, a, b));
    } else {
        for ((output, a), b) in outputs.iter_mut().zip(first).zip(second) {
            op(output, a, b);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_triple<O, A, B, F>(outputs: &mut [O], first: &[A], second: &[B], op: F)
where
    F: Fn(&mut O, &A, &B),
{
    for ((output, a), b) in outputs.iter_mut().zip(first).zip(second) {
        op(output, a, b);
    }
}

/// [`compute`] over `inputs.len()` independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn compute_multiple(inputs: &[InputBlock], outputs: &mut [HashBlock]) {
    assert_eq!(inputs.len(), outputs.len());
    for_each_pair(outputs, inputs, |output, input| compute(input, output));
}

/// [`compute_signed`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn compute_multiple_signed(
    inputs: &[InputBlock],
    signs: &[SignBlock],
    outputs: &mut [HashBlock],
) {
    assert_eq!(inputs.len(), signs.len());
    assert_eq!(inputs.len(), outputs.len());
    for_each_triple(outputs, inputs, signs, |output, input, sign| {
        compute_signed(input, sign, output);
    });
}

/// The FFT phase over independent full blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn fft_multiple(inputs: &[InputBlock], signs: &[SignBlock], fftouts: &mut [FftOutput]) {
    assert_eq!(inputs.len(), signs.len());
    assert_eq!(inputs.len(), fftouts.len());
    for_each_triple(fftouts, inputs, signs, |fftout, input, sign| {
        fft(&input.0, &sign.0, fftout);
    });
}

/// The keyed reduction over independent full blocks, sharing one key.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn fftsum_multiple(fftouts: &[FftOutput], outputs: &mut [HashBlock]) {
    assert_eq!(fftouts.len(), outputs.len());
    for_each_pair(outputs, fftouts, |output, fftout| {
        fftsum(&PI_KEY, fftout, &mut output.0);
    });
}

/// [`HashBlock::set`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn set_multiple(outputs: &mut [HashBlock], operands: &[HashBlock]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, HashBlock::set);
}

/// [`HashBlock::add`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn add_multiple(outputs: &mut [HashBlock], operands: &[HashBlock]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, HashBlock::add);
}

/// [`HashBlock::sub`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn sub_multiple(outputs: &mut [HashBlock], operands: &[HashBlock]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, HashBlock::sub);
}

/// [`HashBlock::mul`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn mul_multiple(outputs: &mut [HashBlock], operands: &[HashBlock]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, HashBlock::mul);
}

/// [`HashBlock::const_set`] with one constant per block.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn const_set_multiple(outputs: &mut [HashBlock], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, |output, &operand| {
        output.const_set(operand);
    });
}

/// [`HashBlock::const_add`] with one constant per block.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn const_add_multiple(outputs: &mut [HashBlock], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, |output, &operand| {
        output.const_add(operand);
    });
}

/// [`HashBlock::const_sub`] with one constant per block.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn const_sub_multiple(outputs: &mut [HashBlock], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, |output, &operand| {
        output.const_sub(operand);
    });
}

/// [`HashBlock::const_mul`] with one constant per block.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn const_mul_multiple(outputs: &mut [HashBlock], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len());
    for_each_pair(outputs, operands, |output, &operand| {
        output.const_mul(operand);
    });
}

/// [`compact`] over independent blocks.
///
/// # Panics
///
/// Panics when the slice lengths differ.
pub fn compact_multiple(hashes: &[HashBlock], compacts: &mut [CompactBlock]) {
    assert_eq!(hashes.len(), compacts.len());
    for_each_pair(compacts, hashes, |output, hash| compact(hash, output));
}
