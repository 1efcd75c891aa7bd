// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Compression backend contract.
///
/// Every implementation must be bit-identical to FIPS 180-4 Section 6.2.2
/// (SHA-256) and Section 6.4.2 (SHA-512) for every state and block. Blocks are
/// processed in order; an empty slice leaves `state` untouched.
///
/// Backends are zero-sized types selected statically through generics, so the
/// per-block loop never goes through dynamic dispatch.
pub trait Backend {
    /// Human readable backend name
    fn name() -> &'static str;

    /// Apply the SHA-256 compression function to each 64-byte block
    fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]);

    /// Apply the SHA-512 compression function to each 128-byte block
    fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]);
}
