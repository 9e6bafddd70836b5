//! The two phases of the SWIFFT compression: the butterfly network (`fft`)
//! and the keyed linear combination (`fftsum`).

use crate::lane::LaneVec;
use crate::tables::{FFT_TABLE, MULTIPLIERS};
use crate::N;

type Z8 = LaneVec<8>;

/// Computes the FFT phase over `m = input.len() / 8` groups of 8 bytes.
///
/// `input` and `sign` are read byte-for-byte in parallel; a nonzero sign
/// byte negates the coefficients of its input byte. `fftout` receives
/// `64 * m` partially reduced elements (the `qReduce` range `[-127, 383]`),
/// 64 per group, contiguous in group order.
///
/// The interleaving of `q_reduce` and `shift` between the butterfly stages
/// is load-bearing: together with the centered tables it keeps every
/// intermediate inside a signed 16-bit lane without reducing after each
/// operation.
///
/// # Panics
///
/// Panics when `input` and `sign` differ in length, when the length is not
/// a multiple of 8, or when `fftout` is not exactly 8 times as long.
pub fn fft(input: &[u8], sign: &[u8], fftout: &mut [i16]) {
    assert_eq!(input.len(), sign.len());
    assert_eq!(input.len() % 8, 0);
    assert_eq!(fftout.len(), input.len() * 8);

    let groups = input
        .chunks_exact(8)
        .zip(sign.chunks_exact(8))
        .zip(fftout.chunks_exact_mut(N));
    for ((bytes, signs), out) in groups {
        let mut v = [Z8::ZERO; 8];
        for (k, (&byte, &sign_byte)) in bytes.iter().zip(signs.iter()).enumerate() {
            let entry = Z8::from(FFT_TABLE[usize::from(sign_byte != 0)][usize::from(byte)]);
            // Row 0's multiplier is the identity; for the rest the centered
            // table and multiplier entries keep the raw product inside i16.
            v[k] = if k == 0 {
                entry
            } else {
                entry * Z8::from(MULTIPLIERS[k])
            };
        }

        (v[0], v[1]) = Z8::add_sub(v[0], v[1]);
        (v[2], v[3]) = Z8::add_sub(v[2], v[3]);
        (v[4], v[5]) = Z8::add_sub(v[4], v[5]);
        (v[6], v[7]) = Z8::add_sub(v[6], v[7]);

        v[2] = v[2].q_reduce();
        v[3] = v[3].shift(4);
        v[6] = v[6].q_reduce();
        v[7] = v[7].shift(4);

        (v[0], v[2]) = Z8::add_sub(v[0], v[2]);
        (v[1], v[3]) = Z8::add_sub(v[1], v[3]);
        (v[4], v[6]) = Z8::add_sub(v[4], v[6]);
        (v[5], v[7]) = Z8::add_sub(v[5], v[7]);

        v[4] = v[4].q_reduce();
        v[5] = v[5].shift(2);
        v[6] = v[6].shift(4);
        v[7] = v[7].shift(6);

        (v[0], v[4]) = Z8::add_sub(v[0], v[4]);
        (v[1], v[5]) = Z8::add_sub(v[1], v[5]);
        (v[2], v[6]) = Z8::add_sub(v[2], v[6]);
        (v[3], v[7]) = Z8::add_sub(v[3], v[7]);

        for (row, lanes) in out.chunks_exact_mut(8).zip(v.iter()) {
            row.copy_from_slice(&lanes.q_reduce().into_inner());
        }
    }
}

/// Collapses FFT output into one 64-element hash by a keyed multiply-
/// accumulate, then canonicalizes.
///
/// `key` and `fftout` share the same `64 * m` layout. The inner `q_reduce`
/// bounds each accumulated term by the `qReduce` range, so the i16
/// accumulators hold any `m` up to 85; callers of the compression facade
/// use m = 32.
///
/// # Panics
///
/// Panics when `key` and `fftout` differ in length or the length is not a
/// multiple of 64.
pub fn fftsum(key: &[i16], fftout: &[i16], out: &mut [i16; N]) {
    assert_eq!(key.len(), fftout.len());
    assert_eq!(fftout.len() % N, 0);
    debug_assert!(fftout.len() / N <= 85, "i16 accumulators overflow past m = 85");

    let mut acc = [Z8::ZERO; 8];
    for (fft_group, key_group) in fftout.chunks_exact(N).zip(key.chunks_exact(N)) {
        let rows = acc
            .iter_mut()
            .zip(fft_group.chunks_exact(8).zip(key_group.chunks_exact(8)));
        for (a, (f, k)) in rows {
            *a += Z8::from_lanes(f).safe_mult(Z8::from_lanes(k)).q_reduce();
        }
    }
    for (row, a) in out.chunks_exact_mut(8).zip(acc.iter()) {
        row.copy_from_slice(&a.mod_p().into_inner());
    }
}
