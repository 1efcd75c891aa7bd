// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word engines for the two SHA-2 families.
//!
//! `u32` drives SHA-224/256 and `u64` drives SHA-384/512 and SHA-512/t. The
//! trait carries everything that differs between the two widths (constants,
//! rotate/shift amounts, block and length-field sizes) so the compression
//! loop and the streaming engine are written once.

use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not, Shr};

use zeroize::Zeroize;

use crate::backend::Backend;
use crate::consts::{BLOCK_LEN_256, BLOCK_LEN_512, K256, K512};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// SHA-2 word: `u32` (SHA-256 family) or `u64` (SHA-512 family).
///
/// All additions are modular; wrapping is the specified behaviour.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + Send
    + Sync
    + Zeroize
    + 'static
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Message block of this family (`[u8; 64]` or `[u8; 128]`)
    type Block: Copy + AsRef<[u8]> + AsMut<[u8]> + Send + Sync + 'static;

    /// Zero word
    const ZERO: Self;

    /// Word size in bytes
    const BYTES: usize;

    /// Block size in bytes
    const BLOCK_LEN: usize;

    /// Size of the big-endian bit-length field written by padding
    const LENGTH_FIELD_LEN: usize;

    /// Largest message, in bytes, whose bit length fits the length field
    const MAX_MESSAGE_LEN: u128;

    /// Round constants; the slice length is the round count
    const K: &'static [Self];

    /// All-zero block
    const ZERO_BLOCK: Self::Block;

    /// Rotate amounts of Σ0
    const BIG_SIGMA0: [u32; 3];

    /// Rotate amounts of Σ1
    const BIG_SIGMA1: [u32; 3];

    /// Rotate, rotate, shift amounts of σ0
    const SMALL_SIGMA0: [u32; 3];

    /// Rotate, rotate, shift amounts of σ1
    const SMALL_SIGMA1: [u32; 3];

    /// self + rhs (mod 2^w)
    fn wrapping_add(self, rhs: Self) -> Self;

    /// ROTR^n(self)
    fn rotate_right(self, n: u32) -> Self;

    /// Parse one big-endian word. `chunk.len()` must equal [`Word::BYTES`].
    fn from_be_chunk(chunk: &[u8]) -> Self;

    /// Write the leading `out.len()` bytes of the big-endian encoding.
    ///
    /// Shorter outputs implement digest truncation (SHA-512/224 ends on half
    /// a word).
    fn write_be(self, out: &mut [u8]);

    /// Encode `message_len` bytes as the padding bit-length field.
    ///
    /// `out.len()` must equal [`Word::LENGTH_FIELD_LEN`] and `message_len`
    /// must not exceed [`Word::MAX_MESSAGE_LEN`].
    fn write_bit_len(message_len: u128, out: &mut [u8]);

    /// Split `data` into whole blocks and the trailing remainder (no copy)
    fn split_blocks(data: &[u8]) -> (&[Self::Block], &[u8]);

    /// Route `blocks` to the backend's compression function for this width
    fn compress<B: Backend>(state: &mut [Self; 8], blocks: &[Self::Block]);

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    #[inline(always)]
    fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (x & z) ^ (y & z)
    }

    /// Σ0(x)
    #[inline(always)]
    fn big_sigma0(self) -> Self {
        let [r0, r1, r2] = Self::BIG_SIGMA0;
        self.rotate_right(r0) ^ self.rotate_right(r1) ^ self.rotate_right(r2)
    }

    /// Σ1(x)
    #[inline(always)]
    fn big_sigma1(self) -> Self {
        let [r0, r1, r2] = Self::BIG_SIGMA1;
        self.rotate_right(r0) ^ self.rotate_right(r1) ^ self.rotate_right(r2)
    }

    /// σ0(x)
    #[inline(always)]
    fn small_sigma0(self) -> Self {
        let [r0, r1, s] = Self::SMALL_SIGMA0;
        self.rotate_right(r0) ^ self.rotate_right(r1) ^ (self >> s)
    }

    /// σ1(x)
    #[inline(always)]
    fn small_sigma1(self) -> Self {
        let [r0, r1, s] = Self::SMALL_SIGMA1;
        self.rotate_right(r0) ^ self.rotate_right(r1) ^ (self >> s)
    }
}

// FIPS 180-4 Section 4.1.2
impl Word for u32 {
    type Block = [u8; BLOCK_LEN_256];

    const ZERO: Self = 0;
    const BYTES: usize = 4;
    const BLOCK_LEN: usize = BLOCK_LEN_256;
    const LENGTH_FIELD_LEN: usize = 8;
    const MAX_MESSAGE_LEN: u128 = (u64::MAX >> 3) as u128;
    const K: &'static [Self] = &K256;
    const ZERO_BLOCK: Self::Block = [0u8; BLOCK_LEN_256];

    const BIG_SIGMA0: [u32; 3] = [2, 13, 22];
    const BIG_SIGMA1: [u32; 3] = [6, 11, 25];
    const SMALL_SIGMA0: [u32; 3] = [7, 18, 3];
    const SMALL_SIGMA1: [u32; 3] = [17, 19, 10];

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        u32::rotate_right(self, n)
    }

    #[inline(always)]
    fn from_be_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(chunk);
        u32::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes()[..out.len()]);
    }

    #[inline]
    fn write_bit_len(message_len: u128, out: &mut [u8]) {
        debug_assert!(message_len <= Self::MAX_MESSAGE_LEN);
        let bits = (message_len << 3) as u64;
        out.copy_from_slice(&bits.to_be_bytes());
    }

    #[inline(always)]
    fn split_blocks(data: &[u8]) -> (&[Self::Block], &[u8]) {
        data.as_chunks::<BLOCK_LEN_256>()
    }

    #[inline(always)]
    fn compress<B: Backend>(state: &mut [Self; 8], blocks: &[Self::Block]) {
        B::compress256(state, blocks);
    }
}

// FIPS 180-4 Section 4.1.3
impl Word for u64 {
    type Block = [u8; BLOCK_LEN_512];

    const ZERO: Self = 0;
    const BYTES: usize = 8;
    const BLOCK_LEN: usize = BLOCK_LEN_512;
    const LENGTH_FIELD_LEN: usize = 16;
    const MAX_MESSAGE_LEN: u128 = u128::MAX >> 3;
    const K: &'static [Self] = &K512;
    const ZERO_BLOCK: Self::Block = [0u8; BLOCK_LEN_512];

    const BIG_SIGMA0: [u32; 3] = [28, 34, 39];
    const BIG_SIGMA1: [u32; 3] = [14, 18, 41];
    const SMALL_SIGMA0: [u32; 3] = [1, 8, 7];
    const SMALL_SIGMA1: [u32; 3] = [19, 61, 6];

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        u64::rotate_right(self, n)
    }

    #[inline(always)]
    fn from_be_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        u64::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes()[..out.len()]);
    }

    #[inline]
    fn write_bit_len(message_len: u128, out: &mut [u8]) {
        debug_assert!(message_len <= Self::MAX_MESSAGE_LEN);
        let bits = message_len << 3;
        out.copy_from_slice(&bits.to_be_bytes());
    }

    #[inline(always)]
    fn split_blocks(data: &[u8]) -> (&[Self::Block], &[u8]) {
        data.as_chunks::<BLOCK_LEN_512>()
    }

    #[inline(always)]
    fn compress<B: Backend>(state: &mut [Self; 8], blocks: &[Self::Block]) {
        B::compress512(state, blocks);
    }
}
