// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression with the ARMv8 cryptographic extension
//!
//! Only the 32-bit family is accelerated here. Callers must check
//! [`is_supported`] before calling [`compress256`].
//!
//! References:
//! - Arm Architecture Reference Manual for A-profile, SHA256H / SHA256H2 /
//!   SHA256SU0 / SHA256SU1

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, target_arch = "aarch64"))]
mod tests;

#[cfg(target_arch = "aarch64")]
mod sha2_ce;

#[cfg(target_arch = "aarch64")]
cpufeatures::new!(sha2_detection, "sha2");

/// Whether the running CPU implements the SHA-256 instructions.
///
/// The probe runs once and is cached.
#[inline]
pub fn is_supported() -> bool {
    #[cfg(target_arch = "aarch64")]
    {
        sha2_detection::get()
    }

    #[cfg(not(target_arch = "aarch64"))]
    false
}

/// Apply the SHA-256 compression function to each block in order.
///
/// # Safety
///
/// [`is_supported`] must have returned `true` on this CPU.
#[cfg(target_arch = "aarch64")]
#[inline]
pub unsafe fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    if blocks.is_empty() {
        return;
    }

    // SAFETY: the caller guarantees the SHA2 extension
    unsafe { sha2_ce::compress256(state, blocks) }
}
