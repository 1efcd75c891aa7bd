// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Recording backend: captures every block handed to the compression
//! function and leaves the state untouched, so the padded message layout and
//! the output serialization can be asserted byte for byte.

use std::cell::RefCell;

use crate::backend::Backend;

thread_local! {
    static BLOCKS_256: RefCell<Vec<[u8; 64]>> = const { RefCell::new(Vec::new()) };
    static BLOCKS_512: RefCell<Vec<[u8; 128]>> = const { RefCell::new(Vec::new()) };
}

pub(crate) struct Recording;

impl Recording {
    pub(crate) fn clear() {
        BLOCKS_256.with(|b| b.borrow_mut().clear());
        BLOCKS_512.with(|b| b.borrow_mut().clear());
    }

    pub(crate) fn blocks256() -> Vec<[u8; 64]> {
        BLOCKS_256.with(|b| b.borrow().clone())
    }

    pub(crate) fn blocks512() -> Vec<[u8; 128]> {
        BLOCKS_512.with(|b| b.borrow().clone())
    }
}

impl Backend for Recording {
    fn name() -> &'static str {
        "recording"
    }

    fn compress256(_state: &mut [u32; 8], blocks: &[[u8; 64]]) {
        BLOCKS_256.with(|b| b.borrow_mut().extend_from_slice(blocks));
    }

    fn compress512(_state: &mut [u64; 8], blocks: &[[u8; 128]]) {
        BLOCKS_512.with(|b| b.borrow_mut().extend_from_slice(blocks));
    }
}

/// Bytes `0, 1, 2, ..` wrapping at 256
pub(crate) fn counter(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Message bytes recovered from the recorded blocks (padding stripped by
/// length)
pub(crate) fn concat<const N: usize>(blocks: &[[u8; N]], len: usize) -> Vec<u8> {
    blocks.iter().flatten().copied().take(len).collect()
}
