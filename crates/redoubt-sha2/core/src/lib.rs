// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core building blocks shared by every SHA-2 backend.
//!
//! - [`Word`]: the 32-bit and 64-bit word engines (σ/Σ/Ch/Maj, big-endian
//!   codecs, block splitting, length-field encoding).
//! - [`consts`]: round constants and the six initial hash values.
//! - [`Variant`] / [`Family`]: compiled-in variant descriptors.
//! - [`Backend`]: the compression contract implemented by the portable and
//!   accelerated crates.
//! - [`Engine`]: the streaming state machine (buffering, padding,
//!   finalization, length accounting).
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod backend;
pub mod consts;
mod engine;
mod error;
mod variant;
mod word;

pub use backend::Backend;
pub use engine::{Engine, Phase};
pub use error::Sha2Error;
pub use variant::{Family, Variant};
pub use word::Word;
