//! The single-block compression facade.

use crate::block::{HashBlock, InputBlock, SignBlock};
use crate::fft::{fft, fftsum};
use crate::key::PI_KEY;
use crate::{M, N};

/// Compresses one 256-byte input block into a composable hash.
///
/// Equivalent to [`compute_signed`] with the all-zeros sign block.
pub fn compute(input: &InputBlock, output: &mut HashBlock) {
    compute_signed(input, &SignBlock::ZERO, output);
}

/// Compresses one signed input block into a composable hash.
///
/// Runs the FFT phase into stack scratch, then the keyed reduction with the
/// public pi-derived key. The result is canonically reduced; no allocation,
/// no failure path.
pub fn compute_signed(input: &InputBlock, sign: &SignBlock, output: &mut HashBlock) {
    let mut fftout = [0i16; M * N];
    fft(&input.0, &sign.0, &mut fftout);
    fftsum(&PI_KEY, &fftout, &mut output.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PI_KEY;
    use crate::pattern::patterned_input;

    // input[0] = 1 sets only coefficient 0 of group 0, so the transform is
    // all-ones there and the hash is the first 64 key elements.
    const H1: [i16; N] = [
        -27, -30, -30, 54, -6, 92, -109, 47, -102, 22, -118, 98, -38, 98, -99, -29, 29, 60, 105,
        -100, 106, -105, 76, -96, 20, 115, 77, 116, -69, 32, 110, -14, 124, -4, 16, -33, -97, 102,
        -71, 9, 51, -105, -75, 40, -41, -62, 68, -24, 62, 75, -60, -26, -125, 82, 34, 118, 7, 16,
        -9, -27, -6, 73, 26, -27,
    ];

    // Pinned digest of the patterned block (bytes 0, 1, ..., 255).
    const H_PATTERNED: [i16; N] = [
        -91, 117, -47, -20, 109, 11, 69, -46, -33, -35, 62, 19, 98, 103, -10, 10, -11, 83, -87,
        115, 18, -113, 120, -20, 16, 18, -73, -112, -53, 86, 18, -70, 75, -33, -128, 79, -6, -48,
        -116, 54, 15, -124, 101, -121, 125, -67, 37, -51, -15, 38, -79, -13, 95, 66, 104, 117,
        119, -85, 21, -98, 23, -113, 44, -35,
    ];

    #[test]
    fn zero_input_hashes_to_zero() {
        let mut by_compute = HashBlock([1; N]);
        compute(&InputBlock::default(), &mut by_compute);
        assert_eq!(by_compute, HashBlock::ZERO);

        let mut by_signed = HashBlock([1; N]);
        compute_signed(&InputBlock::default(), &SignBlock::ZERO, &mut by_signed);
        assert_eq!(by_signed, HashBlock::ZERO);
    }

    #[test]
    fn unit_input_reveals_first_key_row() {
        let mut input = InputBlock::default();
        input.0[0] = 1;
        let mut hash = HashBlock::ZERO;
        compute(&input, &mut hash);
        assert_eq!(hash.0, H1);
        assert_eq!(&hash.0, &PI_KEY[..N]);
    }

    #[test]
    fn unit_input_with_sign_negates() {
        let mut input = InputBlock::default();
        input.0[0] = 1;
        let mut sign = SignBlock::ZERO;
        sign.0[0] = 0xFF;

        let mut signed = HashBlock::ZERO;
        compute_signed(&input, &sign, &mut signed);

        let mut plain = HashBlock::ZERO;
        compute(&input, &mut plain);
        assert_ne!(signed, plain);

        let mut sum = signed;
        sum.add(&plain);
        assert_eq!(sum, HashBlock::ZERO);
    }

    #[test]
    fn zero_sign_block_is_the_unsigned_compression() {
        let input = patterned_input(7, 13);
        let mut unsigned = HashBlock::ZERO;
        compute(&input, &mut unsigned);
        let mut signed = HashBlock::ZERO;
        compute_signed(&input, &SignBlock::ZERO, &mut signed);
        assert_eq!(unsigned, signed);
    }

    #[test]
    fn patterned_block_matches_pinned_digest() {
        let mut hash = HashBlock::ZERO;
        compute(&patterned_input(1, 0), &mut hash);
        assert_eq!(hash.0, H_PATTERNED);
    }

    #[test]
    fn compression_is_deterministic() {
        let input = patterned_input(11, 7);
        let mut first = HashBlock::ZERO;
        let mut second = HashBlock::ZERO;
        compute(&input, &mut first);
        compute(&input, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn disjoint_bit_patterns_hash_additively() {
        // Bits that never collide occupy distinct ring coefficients, so the
        // transform (and with it the hash) is additive across them.
        let mut a = InputBlock::default();
        a.0[0] = 0b0000_0101;
        let mut b = InputBlock::default();
        b.0[0] = 0b1010_0000;
        b.0[100] = 0x3C;
        let mut union = InputBlock::default();
        union.0[0] = 0b1010_0101;
        union.0[100] = 0x3C;

        let mut hash_a = HashBlock::ZERO;
        let mut hash_b = HashBlock::ZERO;
        let mut hash_union = HashBlock::ZERO;
        compute(&a, &mut hash_a);
        compute(&b, &mut hash_b);
        compute(&union, &mut hash_union);

        let mut combined = hash_a;
        combined.add(&hash_b);
        assert_eq!(combined, hash_union);
    }

    #[test]
    fn outputs_are_always_canonical() {
        for mult in [1u8, 3, 89, 247] {
            let mut hash = HashBlock::ZERO;
            compute(&patterned_input(mult, mult.wrapping_mul(31)), &mut hash);
            assert!(hash.0.iter().all(|&v| (-128..=128).contains(&v)));
        }
    }
}
