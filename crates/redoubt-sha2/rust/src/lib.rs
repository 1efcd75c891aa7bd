// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable SHA-2 compression per FIPS 180-4 Sections 6.2.2 and 6.4.2
//!
//! Works on every target and is the reference the accelerated backends are
//! tested against. One generic routine covers both families; the word type
//! supplies constants, rotation amounts and round count.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;

use redoubt_sha2_core::Backend;

/// Portable backend, always available
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Portable;

impl Backend for Portable {
    fn name() -> &'static str {
        "portable"
    }

    #[inline]
    fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
        compress256(state, blocks);
    }

    #[inline]
    fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
        compress512(state, blocks);
    }
}

/// Apply the SHA-256 compression function to each block in order
pub fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    compress::compress_blocks::<u32>(state, blocks);
}

/// Apply the SHA-512 compression function to each block in order
pub fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
    compress::compress_blocks::<u64>(state, blocks);
}
