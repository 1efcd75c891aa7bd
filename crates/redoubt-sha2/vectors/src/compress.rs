// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw compression-function vectors.
//!
//! Each vector starts from the SHA-256 (or SHA-512) IV and applies the
//! compression function to unpadded blocks, so a backend can be checked in
//! isolation from buffering and padding.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use redoubt_sha2_core::consts::{H0_SHA256, H0_SHA512};

use crate::message::Message;

/// SHA-256 compression vector: H0_SHA256 chained over `blocks`
#[derive(Debug, Clone, Copy)]
pub struct CompressVector256 {
    /// Short description
    pub name: &'static str,
    /// Whole 64-byte blocks, no padding
    pub blocks: Message,
    /// Chaining value after the last block
    pub expected: [u32; 8],
}

/// SHA-512 compression vector: H0_SHA512 chained over `blocks`
#[derive(Debug, Clone, Copy)]
pub struct CompressVector512 {
    /// Short description
    pub name: &'static str,
    /// Whole 128-byte blocks, no padding
    pub blocks: Message,
    /// Chaining value after the last block
    pub expected: [u64; 8],
}

/// SHA-256 compression vectors
pub const COMPRESS256_VECTORS: &[CompressVector256] = &[
    CompressVector256 {
        name: "zero block",
        blocks: Message::Repeat { byte: 0x00, count: 64 },
        expected: [
            0xda5698be, 0x17b9b469, 0x62335799, 0x779fbeca, 0x8ce5d491, 0xc0d26243, 0xbafef9ea,
            0x1837a9d8,
        ],
    },
    CompressVector256 {
        name: "0xff block",
        blocks: Message::Repeat { byte: 0xff, count: 64 },
        expected: [
            0xef0c748d, 0xf4da50a8, 0xd6c43c01, 0x3edc3ce7, 0x6c9d9fa9, 0xa1458ade, 0x56eb86c0,
            0xa64492d2,
        ],
    },
    CompressVector256 {
        name: "counter block",
        blocks: Message::Counter(64),
        expected: [
            0xfc99a2df, 0x88f42a7a, 0x7bb9d180, 0x33cdc6a2, 0x0256755f, 0x9d5b9a50, 0x44a9cc31,
            0x5abe84a7,
        ],
    },
    CompressVector256 {
        name: "two chained counter blocks",
        blocks: Message::Counter(128),
        expected: [
            0x593253ad, 0xfb4cc018, 0xbe611395, 0x485e47c1, 0x5a5b271d, 0xfb8da14f, 0xe8f77fb4,
            0xd05eacbc,
        ],
    },
];

/// SHA-512 compression vectors
pub const COMPRESS512_VECTORS: &[CompressVector512] = &[
    CompressVector512 {
        name: "zero block",
        blocks: Message::Repeat { byte: 0x00, count: 128 },
        expected: [
            0xcf7881d5774acbe8, 0x533362e0fbc78070, 0x0267639d87460eda, 0x3086cb40e85931b0,
            0x717dc95288a023a3, 0x96bab2c14ce0b5e0, 0x6fc4fe04eae33e0b, 0x91f4d80cbd668bee,
        ],
    },
    CompressVector512 {
        name: "0xff block",
        blocks: Message::Repeat { byte: 0xff, count: 128 },
        expected: [
            0x735853abed200986, 0xbce240ae39514b66, 0xa29990426e1a8fbd, 0x0ac837a0a52e0ea8,
            0xfee8ee0b8cab5205, 0x39a328b4967af0c1, 0x5df8c9151fa46065, 0x7177948afe01e0fd,
        ],
    },
    CompressVector512 {
        name: "counter block",
        blocks: Message::Counter(128),
        expected: [
            0x8e03953cd57cd687, 0x9321270afa70c582, 0x7bb5b69be59a8f01, 0x30147e94f2aedf7b,
            0xdc01c56c92343ca8, 0xbd837bb7f0208f5a, 0x23e155694516b6f1, 0x47099d491a30b151,
        ],
    },
    CompressVector512 {
        name: "two chained counter blocks",
        blocks: Message::Counter(256),
        expected: [
            0x74b944c38f7a7195, 0x11989774dc0cd179, 0xa04cd1c68e178f16, 0xc8fa2489be592019,
            0xd11c84a02523deba, 0x0ee864154f8728ae, 0xef4bd59c69cb5c09, 0xc85c6ddb0b1c762e,
        ],
    },
];

/// Run every SHA-256 compression vector through `compress`.
///
/// Each vector is checked twice: all blocks in one call, then one call per
/// block. Both must land on the same chaining value.
pub fn run_compress256_vectors<F>(mut compress: F) -> Result<(), String>
where
    F: FnMut(&mut [u32; 8], &[[u8; 64]]),
{
    let mut failures = Vec::new();

    for vector in COMPRESS256_VECTORS {
        let bytes = vector.blocks.to_bytes();
        let (blocks, rest) = bytes.as_chunks::<64>();
        debug_assert!(rest.is_empty());

        let mut batched = H0_SHA256;
        compress(&mut batched, blocks);

        let mut stepped = H0_SHA256;
        for block in blocks {
            compress(&mut stepped, core::slice::from_ref(block));
        }

        if batched != vector.expected {
            failures.push(format!(
                "{}: batched mismatch\n  expected: {:08x?}\n  got:      {:08x?}",
                vector.name, vector.expected, batched
            ));
        }
        if stepped != vector.expected {
            failures.push(format!(
                "{}: per-block mismatch\n  expected: {:08x?}\n  got:      {:08x?}",
                vector.name, vector.expected, stepped
            ));
        }
    }

    // No blocks, no change
    let mut untouched = H0_SHA256;
    compress(&mut untouched, &[]);
    if untouched != H0_SHA256 {
        failures.push(String::from("empty block slice modified the state"));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}

/// Run every SHA-512 compression vector through `compress`.
pub fn run_compress512_vectors<F>(mut compress: F) -> Result<(), String>
where
    F: FnMut(&mut [u64; 8], &[[u8; 128]]),
{
    let mut failures = Vec::new();

    for vector in COMPRESS512_VECTORS {
        let bytes = vector.blocks.to_bytes();
        let (blocks, rest) = bytes.as_chunks::<128>();
        debug_assert!(rest.is_empty());

        let mut batched = H0_SHA512;
        compress(&mut batched, blocks);

        let mut stepped = H0_SHA512;
        for block in blocks {
            compress(&mut stepped, core::slice::from_ref(block));
        }

        if batched != vector.expected {
            failures.push(format!(
                "{}: batched mismatch\n  expected: {:016x?}\n  got:      {:016x?}",
                vector.name, vector.expected, batched
            ));
        }
        if stepped != vector.expected {
            failures.push(format!(
                "{}: per-block mismatch\n  expected: {:016x?}\n  got:      {:016x?}",
                vector.name, vector.expected, stepped
            ));
        }
    }

    let mut untouched = H0_SHA512;
    compress(&mut untouched, &[]);
    if untouched != H0_SHA512 {
        failures.push(String::from("empty block slice modified the state"));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
