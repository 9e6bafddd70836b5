use crate::lane::{mod_p, LaneVec};
use crate::{COMPACT_BLOCK_LEN, INPUT_BLOCK_LEN, N, OUTPUT_BLOCK_LEN};
use core::convert::TryFrom;

type Z8 = LaneVec<8>;

/// 256-byte (2048-bit) input block: 32 groups of 8 coefficient bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBlock(pub [u8; INPUT_BLOCK_LEN]);

impl InputBlock {
    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; INPUT_BLOCK_LEN] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; INPUT_BLOCK_LEN] {
        self.0
    }
}

impl Default for InputBlock {
    fn default() -> Self {
        Self([0; INPUT_BLOCK_LEN])
    }
}

impl From<[u8; INPUT_BLOCK_LEN]> for InputBlock {
    fn from(bytes: [u8; INPUT_BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for InputBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}

/// 256-byte sign block paired with an [`InputBlock`].
///
/// Byte `k` selects the sign of the coefficients carried by input byte `k`:
/// `0x00` leaves them positive, any other value (conventionally `0xFF`)
/// negates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignBlock(pub [u8; INPUT_BLOCK_LEN]);

impl SignBlock {
    /// The process-wide all-zeros sign block.
    pub const ZERO: Self = Self([0; INPUT_BLOCK_LEN]);

    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; INPUT_BLOCK_LEN] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; INPUT_BLOCK_LEN] {
        self.0
    }
}

impl Default for SignBlock {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[u8; INPUT_BLOCK_LEN]> for SignBlock {
    fn from(bytes: [u8; INPUT_BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SignBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}

/// A composable SWIFFT hash: 64 elements of `Z_257` in the canonical
/// centered system `[-128, 128]` (1024 bits as little-endian i16).
///
/// Hash blocks form a ring element-wise; every operation below ends in a
/// canonical reduction, so any sequence of them yields a valid hash block.
/// Distinct operands never alias under Rust borrows; `h += h` is written by
/// copying the operand first (`HashBlock` is `Copy`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HashBlock(pub [i16; N]);

impl HashBlock {
    /// The zero hash: identity of `add`, absorbing element of `mul`.
    pub const ZERO: Self = Self([0; N]);

    /// Borrow the underlying elements.
    #[must_use]
    pub const fn as_elements(&self) -> &[i16; N] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [i16; N] {
        self.0
    }

    /// Serialize as 128 little-endian bytes.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; OUTPUT_BLOCK_LEN] {
        let mut out = [0; OUTPUT_BLOCK_LEN];
        for (chunk, v) in out.chunks_exact_mut(2).zip(self.0.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Deserialize from 128 little-endian bytes; values are taken as-is.
    #[must_use]
    pub fn from_le_bytes(bytes: &[u8; OUTPUT_BLOCK_LEN]) -> Self {
        let mut out = [0; N];
        for (v, chunk) in out.iter_mut().zip(bytes.chunks_exact(2)) {
            *v = i16::from_le_bytes([chunk[0], chunk[1]]);
        }
        Self(out)
    }

    /// Copy `operand` into `self`, element-wise.
    pub fn set(&mut self, operand: &Self) {
        self.0 = operand.0;
    }

    /// `self[i] = modP(self[i] + operand[i])`.
    pub fn add(&mut self, operand: &Self) {
        self.zip_lanes(operand, |a, b| (a + b).mod_p());
    }

    /// `self[i] = modP(self[i] - operand[i])`.
    pub fn sub(&mut self, operand: &Self) {
        self.zip_lanes(operand, |a, b| (a - b).mod_p());
    }

    /// `self[i] = modP(self[i] * operand[i])`.
    pub fn mul(&mut self, operand: &Self) {
        self.zip_lanes(operand, |a, b| (a * b).mod_p());
    }

    /// Set every element to `modP(operand)`.
    pub fn const_set(&mut self, operand: i16) {
        self.0 = [mod_p(operand); N];
    }

    /// Add the broadcast constant to every element.
    pub fn const_add(&mut self, operand: i16) {
        self.map_lanes(Z8::splat(mod_p(operand)), |a, c| (a + c).mod_p());
    }

    /// Subtract the broadcast constant from every element.
    pub fn const_sub(&mut self, operand: i16) {
        self.map_lanes(Z8::splat(mod_p(operand)), |a, c| (a - c).mod_p());
    }

    /// Multiply every element by the broadcast constant.
    pub fn const_mul(&mut self, operand: i16) {
        self.map_lanes(Z8::splat(mod_p(operand)), |a, c| (a * c).mod_p());
    }

    fn zip_lanes(&mut self, rhs: &Self, op: impl Fn(Z8, Z8) -> Z8) {
        for (out, rhs) in self.0.chunks_exact_mut(8).zip(rhs.0.chunks_exact(8)) {
            let lanes = op(Z8::from_lanes(out), Z8::from_lanes(rhs));
            out.copy_from_slice(&lanes.into_inner());
        }
    }

    fn map_lanes(&mut self, operand: Z8, op: impl Fn(Z8, Z8) -> Z8) {
        for out in self.0.chunks_exact_mut(8) {
            let lanes = op(Z8::from_lanes(out), operand);
            out.copy_from_slice(&lanes.into_inner());
        }
    }
}

impl Default for HashBlock {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[i16; N]> for HashBlock {
    fn from(elements: [i16; N]) -> Self {
        Self(elements)
    }
}

impl TryFrom<&[i16]> for HashBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[i16]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}

/// 64-byte (512-bit) compact hash; not composable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactBlock(pub [u8; COMPACT_BLOCK_LEN]);

impl CompactBlock {
    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; COMPACT_BLOCK_LEN] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; COMPACT_BLOCK_LEN] {
        self.0
    }
}

impl Default for CompactBlock {
    fn default() -> Self {
        Self([0; COMPACT_BLOCK_LEN])
    }
}

impl From<[u8; COMPACT_BLOCK_LEN]> for CompactBlock {
    fn from(bytes: [u8; COMPACT_BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for CompactBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}
