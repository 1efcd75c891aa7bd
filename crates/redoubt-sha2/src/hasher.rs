// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Statically typed hashers, one per variant.
//!
//! Each hasher is a thin wrapper over the streaming engine with the variant's
//! IV and a fixed-size output array.

use core::fmt;

use redoubt_sha2_core::consts::{
    H0_SHA224, H0_SHA256, H0_SHA384, H0_SHA512, H0_SHA512_224, H0_SHA512_256, SHA224_LEN,
    SHA256_LEN, SHA384_LEN, SHA512_224_LEN, SHA512_256_LEN, SHA512_LEN,
};
use redoubt_sha2_core::{Backend, Engine, Phase, Sha2Error, Variant, Word};

use crate::backend::Auto;

macro_rules! define_hasher {
    (
        $(#[$meta:meta])*
        $name:ident, $word:ty, $iv:ident, $variant:expr, $len:ident
    ) => {
        $(#[$meta])*
        pub struct $name<B: Backend = Auto> {
            engine: Engine<$word, B>,
        }

        impl $name {
            /// Variant computed by this hasher
            pub const VARIANT: Variant = $variant;

            /// Digest length in bytes
            pub const DIGEST_LEN: usize = $len;

            /// Block length in bytes
            pub const BLOCK_LEN: usize = <$word as Word>::BLOCK_LEN;

            /// Fresh hasher using the runtime-selected backend
            pub fn new() -> Self {
                Self::with_backend()
            }

            /// One-shot digest of `data`
            pub fn digest(data: &[u8]) -> Result<[u8; $len], Sha2Error> {
                let mut hasher = Self::new();
                hasher.update(data)?;
                hasher.finalize()
            }
        }

        impl<B: Backend> $name<B> {
            /// Fresh hasher using backend `B`
            pub fn with_backend() -> Self {
                Self {
                    engine: Engine::new(&$iv),
                }
            }

            /// Current lifecycle phase
            pub fn phase(&self) -> Phase {
                self.engine.phase()
            }

            /// True once a digest was produced and before any reset
            pub fn is_finalized(&self) -> bool {
                self.engine.phase() == Phase::Finalized
            }

            /// Absorb `data`. Empty input is a no-op.
            pub fn update(&mut self, data: &[u8]) -> Result<(), Sha2Error> {
                self.engine.update(data)
            }

            /// Consume the hasher and produce the digest
            pub fn finalize(mut self) -> Result<[u8; $len], Sha2Error> {
                self.finalize_mut()
            }

            /// Produce the digest and leave the hasher finalized
            pub fn finalize_mut(&mut self) -> Result<[u8; $len], Sha2Error> {
                let mut out = [0u8; $len];
                self.engine.finalize_into(&mut out)?;

                Ok(out)
            }

            /// Produce the digest and start over
            pub fn finalize_reset(&mut self) -> Result<[u8; $len], Sha2Error> {
                let out = self.finalize_mut()?;
                self.engine.reset();

                Ok(out)
            }

            /// Discard everything absorbed
            pub fn reset(&mut self) {
                self.engine.reset();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<B: Backend> Clone for $name<B> {
            fn clone(&self) -> Self {
                Self {
                    engine: self.engine.clone(),
                }
            }
        }

        impl<B: Backend> fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("engine", &self.engine)
                    .finish()
            }
        }
    };
}

define_hasher!(
    /// SHA-224 hasher (28-byte digest)
    Sha224, u32, H0_SHA224, Variant::Sha224, SHA224_LEN
);

define_hasher!(
    /// SHA-256 hasher (32-byte digest)
    Sha256, u32, H0_SHA256, Variant::Sha256, SHA256_LEN
);

define_hasher!(
    /// SHA-384 hasher (48-byte digest)
    Sha384, u64, H0_SHA384, Variant::Sha384, SHA384_LEN
);

define_hasher!(
    /// SHA-512 hasher (64-byte digest)
    Sha512, u64, H0_SHA512, Variant::Sha512, SHA512_LEN
);

define_hasher!(
    /// SHA-512/224 hasher (28-byte digest)
    #[allow(non_camel_case_types)]
    Sha512_224, u64, H0_SHA512_224, Variant::Sha512_224, SHA512_224_LEN
);

define_hasher!(
    /// SHA-512/256 hasher (32-byte digest)
    #[allow(non_camel_case_types)]
    Sha512_256, u64, H0_SHA512_256, Variant::Sha512_256, SHA512_256_LEN
);
