// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression with the x86 SHA extensions (SHA-NI)
//!
//! Only the 32-bit family is accelerated: the SHA extensions have no SHA-512
//! counterpart on x86_64. Callers must check [`is_supported`] before calling
//! [`compress256`].
//!
//! References:
//! - Intel SHA Extensions: New Instructions Supporting the Secure Hash
//!   Algorithm on Intel Architecture Processors (July 2013)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, target_arch = "x86_64"))]
mod tests;

#[cfg(target_arch = "x86_64")]
mod sha_ni;

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(sha_ni_detection, "sha", "sse2", "ssse3", "sse4.1");

/// Whether the running CPU supports SHA-NI (plus the SSE levels it needs).
///
/// The CPUID probe runs once and is cached.
#[inline]
pub fn is_supported() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        sha_ni_detection::get()
    }

    #[cfg(not(target_arch = "x86_64"))]
    false
}

/// Apply the SHA-256 compression function to each block in order.
///
/// # Safety
///
/// [`is_supported`] must have returned `true` on this CPU.
#[cfg(target_arch = "x86_64")]
#[inline]
pub unsafe fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    if blocks.is_empty() {
        return;
    }

    // SAFETY: the caller guarantees SHA-NI, SSE2, SSSE3 and SSE4.1
    unsafe { sha_ni::compress256(state, blocks) }
}
