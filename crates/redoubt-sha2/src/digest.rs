// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use redoubt_sha2_core::Variant;
use redoubt_sha2_core::consts::MAX_DIGEST_LEN;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Digest of any SHA-2 variant.
///
/// Holds up to 64 bytes; [`Digest::as_bytes`] exposes exactly
/// `variant.digest_len()` of them. Equality is constant time. The bytes are
/// wiped on drop.
#[derive(Clone)]
pub struct Digest {
    variant: Variant,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    pub(crate) fn new(variant: Variant, bytes: [u8; MAX_DIGEST_LEN]) -> Self {
        Self { variant, bytes }
    }

    /// Variant that produced this digest
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Digest length in bytes (never zero)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.variant.digest_len()
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Variants are public knowledge; only the bytes need constant time
        let same_variant = Choice::from(u8::from(self.variant == other.variant));
        same_variant & self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().ct_eq(other).into()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}, {:x})", self.variant, self)
    }
}

impl Zeroize for Digest {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Digest {}
