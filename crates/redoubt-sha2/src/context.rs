// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant chosen at runtime.

use core::fmt;

use redoubt_sha2_core::consts::{
    H0_SHA224, H0_SHA256, H0_SHA384, H0_SHA512, H0_SHA512_224, H0_SHA512_256, MAX_DIGEST_LEN,
};
use redoubt_sha2_core::{Backend, Engine, Family, Phase, Sha2Error, Variant};

use crate::backend::Auto;
use crate::digest::Digest;

enum Inner<B: Backend> {
    Sha256(Engine<u32, B>),
    Sha512(Engine<u64, B>),
}

impl<B: Backend> Inner<B> {
    fn new(variant: Variant) -> Self {
        match variant.family() {
            Family::Sha256 => Inner::Sha256(Engine::new(iv32(variant))),
            Family::Sha512 => Inner::Sha512(Engine::new(iv64(variant))),
        }
    }
}

impl<B: Backend> Clone for Inner<B> {
    fn clone(&self) -> Self {
        match self {
            Inner::Sha256(engine) => Inner::Sha256(engine.clone()),
            Inner::Sha512(engine) => Inner::Sha512(engine.clone()),
        }
    }
}

/// Streaming hash context for a variant picked at runtime.
///
/// Lifecycle: `Ready` → `Absorbing` → `Finalized`. A finalized context
/// rejects `update` and every `finalize*` call with
/// [`Sha2Error::AlreadyFinalized`] until [`Context::reset`].
///
/// ```
/// use redoubt_sha2::{Context, Variant};
///
/// let mut ctx = Context::new(Variant::Sha256);
/// ctx.update(b"a")?;
/// ctx.update(b"bc")?;
/// let digest = ctx.finalize()?;
///
/// assert_eq!(digest.as_bytes()[..4], [0xbau8, 0x78, 0x16, 0xbf]);
/// # Ok::<(), redoubt_sha2::Sha2Error>(())
/// ```
pub struct Context<B: Backend = Auto> {
    variant: Variant,
    inner: Inner<B>,
}

impl Context {
    /// Fresh context using the runtime-selected backend
    pub fn new(variant: Variant) -> Self {
        Self::with_backend(variant)
    }

    /// Context that believes `message_len` bytes were already absorbed
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_message_len(variant: Variant, message_len: u128) -> Self {
        let inner = match variant.family() {
            Family::Sha256 => {
                Inner::Sha256(Engine::with_message_len(iv32(variant), message_len))
            }
            Family::Sha512 => {
                Inner::Sha512(Engine::with_message_len(iv64(variant), message_len))
            }
        };

        Self { variant, inner }
    }
}

impl<B: Backend> Context<B> {
    /// Fresh context using backend `B`
    pub fn with_backend(variant: Variant) -> Self {
        Self {
            variant,
            inner: Inner::new(variant),
        }
    }

    /// Variant this context computes
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        match &self.inner {
            Inner::Sha256(engine) => engine.phase(),
            Inner::Sha512(engine) => engine.phase(),
        }
    }

    /// Bytes absorbed since creation or the last reset
    pub fn message_len(&self) -> u128 {
        match &self.inner {
            Inner::Sha256(engine) => engine.message_len(),
            Inner::Sha512(engine) => engine.message_len(),
        }
    }

    /// Absorb `data`. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha2Error> {
        match &mut self.inner {
            Inner::Sha256(engine) => engine.update(data),
            Inner::Sha512(engine) => engine.update(data),
        }
    }

    /// Consume the context and produce the digest
    pub fn finalize(mut self) -> Result<Digest, Sha2Error> {
        self.finalize_mut()
    }

    /// Produce the digest and leave the context `Finalized`
    pub fn finalize_mut(&mut self) -> Result<Digest, Sha2Error> {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        let out = &mut bytes[..self.variant.digest_len()];

        match &mut self.inner {
            Inner::Sha256(engine) => engine.finalize_into(out)?,
            Inner::Sha512(engine) => engine.finalize_into(out)?,
        }

        Ok(Digest::new(self.variant, bytes))
    }

    /// Produce the digest and return to `Ready` for the same variant
    pub fn finalize_reset(&mut self) -> Result<Digest, Sha2Error> {
        let digest = self.finalize_mut()?;
        self.reset();

        Ok(digest)
    }

    /// Discard everything absorbed and return to `Ready`
    pub fn reset(&mut self) {
        match &mut self.inner {
            Inner::Sha256(engine) => engine.reset(),
            Inner::Sha512(engine) => engine.reset(),
        }
    }
}

fn iv32(variant: Variant) -> &'static [u32; 8] {
    match variant {
        Variant::Sha224 => &H0_SHA224,
        _ => &H0_SHA256,
    }
}

fn iv64(variant: Variant) -> &'static [u64; 8] {
    match variant {
        Variant::Sha384 => &H0_SHA384,
        Variant::Sha512_224 => &H0_SHA512_224,
        Variant::Sha512_256 => &H0_SHA512_256,
        _ => &H0_SHA512,
    }
}

impl<B: Backend> Clone for Context<B> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            inner: self.inner.clone(),
        }
    }
}

// Never print the chaining value or buffered bytes
impl<B: Backend> fmt::Debug for Context<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("variant", &self.variant)
            .field("backend", &B::name())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
