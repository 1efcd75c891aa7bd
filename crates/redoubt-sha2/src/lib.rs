// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 hash family per FIPS 180-4 with secure memory handling
//!
//! SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224 and SHA-512/256 over byte
//! messages, one-shot or streamed. SHA-256 compression uses the x86_64 SHA
//! extensions or the ARMv8 cryptographic extension when the running CPU has
//! them; everything else runs on the portable backend. All backends produce
//! identical results.
//!
//! Chaining values and buffered input are zeroized on finalize, reset and
//! drop.
//!
//! ```
//! use redoubt_sha2::{Sha256, Variant, hash};
//!
//! let one_shot = hash(Variant::Sha256, b"abc")?;
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab")?;
//! hasher.update(b"c")?;
//! let streamed = hasher.finalize()?;
//!
//! assert_eq!(one_shot.as_bytes(), streamed.as_slice());
//! # Ok::<(), redoubt_sha2::Sha2Error>(())
//! ```
//!
//! # Features
//!
//! - `pure-rust`: never compile in the accelerated backends
//! - `test-utils`: expose constructors that preload the message length
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod backend;
mod context;
mod digest;
mod feature_detector;
mod hasher;

pub use backend::{Auto, BackendKind, active_backend};
pub use context::Context;
pub use digest::Digest;
pub use hasher::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
pub use redoubt_sha2_core::consts;
pub use redoubt_sha2_core::{Backend, Family, Phase, Sha2Error, Variant};
pub use redoubt_sha2_rust::Portable;

/// Digest length of `variant` in bytes
pub const fn digest_len(variant: Variant) -> usize {
    variant.digest_len()
}

/// Block length of `variant` in bytes
pub const fn block_len(variant: Variant) -> usize {
    variant.block_len()
}

/// One-shot digest of `data`.
///
/// Fails with [`Sha2Error::LengthOverflow`] only when `data` is longer than
/// the variant's length field allows.
pub fn hash(variant: Variant, data: &[u8]) -> Result<Digest, Sha2Error> {
    let mut context = Context::new(variant);
    context.update(data)?;
    context.finalize()
}

/// SHA-256 compression on the runtime-selected backend.
///
/// No padding, no length accounting: each 64-byte block is folded into
/// `state` in order.
pub fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    <Auto as Backend>::compress256(state, blocks);
}

/// SHA-512 compression (portable on every target).
///
/// No padding, no length accounting: each 128-byte block is folded into
/// `state` in order.
pub fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
    <Auto as Backend>::compress512(state, blocks);
}
