//! Straightforward reference implementations used to cross-check the
//! butterfly engine in tests.

use crate::tables::{OMEGA, REV3};

/// Fast modular exponentiation helper used in tests.
pub(crate) fn pow_mod_wide(base: u32, exp: usize, modulus: u32) -> u16 {
    let mut base = base % modulus;
    let mut exp = exp;
    let mut result: u32 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result * base) % modulus;
        }
        base = (base * base) % modulus;
        exp >>= 1;
    }
    result as u16
}

/// Term-by-term evaluation of the grouped transform
/// `F(x)_i = sum_K x_K * OMEGA^((2i+1) K)` with `K = 8l + rev3(c)`.
///
/// Returns canonical residues in `[0, 256]`, 64 per 8-byte group.
pub(crate) fn naive_fft(input: &[u8], sign: &[u8]) -> Vec<u16> {
    assert_eq!(input.len(), sign.len());
    assert_eq!(input.len() % 8, 0);

    let mut out = Vec::with_capacity(input.len() * 8);
    for (bytes, signs) in input.chunks_exact(8).zip(sign.chunks_exact(8)) {
        let mut coeffs = [0i32; 64];
        for (c, (&byte, &sign_byte)) in bytes.iter().zip(signs.iter()).enumerate() {
            for l in 0..8 {
                if (byte >> l) & 1 == 1 {
                    coeffs[8 * l + REV3[c]] = if sign_byte != 0 { -1 } else { 1 };
                }
            }
        }
        for i in 0..64 {
            let mut acc = 0i32;
            for (k, &x_k) in coeffs.iter().enumerate() {
                if x_k != 0 {
                    let w = pow_mod_wide(OMEGA, ((2 * i + 1) * k) % 128, 257);
                    acc += x_k * i32::from(w);
                }
            }
            out.push(acc.rem_euclid(257) as u16);
        }
    }
    out
}

/// Reference keyed reduction over naive transform output; returns the
/// canonical centered hash.
pub(crate) fn naive_fftsum(key: &[i16], transformed: &[u16]) -> [i16; crate::N] {
    assert_eq!(key.len(), transformed.len());
    assert_eq!(transformed.len() % crate::N, 0);

    let mut out = [0i16; crate::N];
    for (j, slot) in out.iter_mut().enumerate() {
        let mut acc = 0i64;
        for (kchunk, ychunk) in key
            .chunks_exact(crate::N)
            .zip(transformed.chunks_exact(crate::N))
        {
            acc += i64::from(kchunk[j]) * i64::from(ychunk[j]);
        }
        let r = acc.rem_euclid(257);
        *slot = if r > 128 { (r - 257) as i16 } else { r as i16 };
    }
    out
}
