// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors and test runners shared by every SHA-2 backend.
//!
//! Backends call the runners from their own test suites so the portable,
//! x86 and ARM crates are held to the same tables.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod compress;
mod hash;
mod hex;
mod message;

pub use compress::{
    COMPRESS256_VECTORS, COMPRESS512_VECTORS, CompressVector256, CompressVector512,
    run_compress256_vectors, run_compress512_vectors,
};
pub use hash::{HashVector, MSG_448, MSG_896, SHA2_VECTORS, run_hash_vectors, vectors_for};
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use message::{Message, counter_bytes};
