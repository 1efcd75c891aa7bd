// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant descriptors: immutable, compiled-in per-variant parameters.

use core::fmt;

use crate::consts::{
    BLOCK_LEN_256, BLOCK_LEN_512, SHA224_LEN, SHA256_LEN, SHA384_LEN, SHA512_224_LEN,
    SHA512_256_LEN, SHA512_LEN,
};

/// Word-width family a variant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 32-bit words, 64-byte blocks, 64 rounds (SHA-224, SHA-256)
    Sha256,
    /// 64-bit words, 128-byte blocks, 80 rounds (SHA-384, SHA-512, SHA-512/t)
    Sha512,
}

impl Family {
    /// Block size in bytes
    pub const fn block_len(self) -> usize {
        match self {
            Family::Sha256 => BLOCK_LEN_256,
            Family::Sha512 => BLOCK_LEN_512,
        }
    }

    /// Word width in bits
    pub const fn word_bits(self) -> u32 {
        match self {
            Family::Sha256 => 32,
            Family::Sha512 => 64,
        }
    }

    /// Number of compression rounds
    pub const fn rounds(self) -> usize {
        match self {
            Family::Sha256 => 64,
            Family::Sha512 => 80,
        }
    }

    /// Size of the big-endian bit-length field appended by padding
    pub const fn length_field_len(self) -> usize {
        match self {
            Family::Sha256 => 8,
            Family::Sha512 => 16,
        }
    }
}

/// One named member of the SHA-2 family.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// SHA-224 (truncated SHA-256 with its own IV)
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384 (truncated SHA-512 with its own IV)
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
}

impl Variant {
    /// Every variant, in FIPS 180-4 order
    pub const ALL: [Variant; 6] = [
        Variant::Sha224,
        Variant::Sha256,
        Variant::Sha384,
        Variant::Sha512,
        Variant::Sha512_224,
        Variant::Sha512_256,
    ];

    /// Word-width family
    pub const fn family(self) -> Family {
        match self {
            Variant::Sha224 | Variant::Sha256 => Family::Sha256,
            Variant::Sha384 | Variant::Sha512 | Variant::Sha512_224 | Variant::Sha512_256 => {
                Family::Sha512
            }
        }
    }

    /// Digest length in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Variant::Sha224 => SHA224_LEN,
            Variant::Sha256 => SHA256_LEN,
            Variant::Sha384 => SHA384_LEN,
            Variant::Sha512 => SHA512_LEN,
            Variant::Sha512_224 => SHA512_224_LEN,
            Variant::Sha512_256 => SHA512_256_LEN,
        }
    }

    /// Block length in bytes
    pub const fn block_len(self) -> usize {
        self.family().block_len()
    }

    /// Word width in bits
    pub const fn word_bits(self) -> u32 {
        self.family().word_bits()
    }

    /// Number of compression rounds
    pub const fn rounds(self) -> usize {
        self.family().rounds()
    }

    /// Size of the padding length field in bytes
    pub const fn length_field_len(self) -> usize {
        self.family().length_field_len()
    }

    /// Standard name, e.g. `"SHA-512/256"`
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha224 => "SHA-224",
            Variant::Sha256 => "SHA-256",
            Variant::Sha384 => "SHA-384",
            Variant::Sha512 => "SHA-512",
            Variant::Sha512_224 => "SHA-512/224",
            Variant::Sha512_256 => "SHA-512/256",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
