// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

use redoubt_sha2_core::{Backend, Variant};

use crate::{Portable, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

thread_local! {
    static COMPRESSIONS_256: Cell<usize> = const { Cell::new(0) };
    static COMPRESSIONS_512: Cell<usize> = const { Cell::new(0) };
}

/// Portable backend that counts compressed blocks per thread
pub(crate) struct Counting;

impl Counting {
    pub(crate) fn reset_counts() {
        COMPRESSIONS_256.with(|c| c.set(0));
        COMPRESSIONS_512.with(|c| c.set(0));
    }

    pub(crate) fn compressions() -> usize {
        COMPRESSIONS_256.with(Cell::get) + COMPRESSIONS_512.with(Cell::get)
    }
}

impl Backend for Counting {
    fn name() -> &'static str {
        "counting"
    }

    fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
        COMPRESSIONS_256.with(|c| c.set(c.get() + blocks.len()));
        Portable::compress256(state, blocks);
    }

    fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
        COMPRESSIONS_512.with(|c| c.set(c.get() + blocks.len()));
        Portable::compress512(state, blocks);
    }
}

/// One-shot digest through the statically typed hasher of `variant`
pub(crate) fn typed_digest(variant: Variant, data: &[u8]) -> Vec<u8> {
    let digest = match variant {
        Variant::Sha224 => Sha224::digest(data).map(|d| d.to_vec()),
        Variant::Sha256 => Sha256::digest(data).map(|d| d.to_vec()),
        Variant::Sha384 => Sha384::digest(data).map(|d| d.to_vec()),
        Variant::Sha512 => Sha512::digest(data).map(|d| d.to_vec()),
        Variant::Sha512_224 => Sha512_224::digest(data).map(|d| d.to_vec()),
        Variant::Sha512_256 => Sha512_256::digest(data).map(|d| d.to_vec()),
    };

    digest.expect("Failed to digest(..)")
}
