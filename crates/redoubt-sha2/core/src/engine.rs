// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash engine per FIPS 180-4 Sections 5.1 and 6
//!
//! One engine serves all six variants: the word type picks the family, the IV
//! picks the variant, and the output length picks the truncation.

use core::fmt;
use core::marker::PhantomData;
use core::slice;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backend::Backend;
use crate::error::Sha2Error;
use crate::word::Word;

/// Lifecycle of a streaming context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly created or reset, nothing absorbed
    Ready,
    /// At least one non-empty update accepted
    Absorbing,
    /// Digest produced; only `reset` leaves this phase
    Finalized,
}

/// SHA-2 streaming state.
///
/// Holds the chaining value H(i), at most one partial block and the total
/// absorbed byte count. `buffer_len < W::BLOCK_LEN` between calls; every full
/// block is compressed as soon as it exists.
///
/// Secret material (chaining value and buffered bytes) is wiped on finalize,
/// reset and drop.
pub struct Engine<W: Word, B: Backend> {
    iv: &'static [W; 8],
    state: [W; 8],
    buffer: W::Block,
    buffer_len: usize,
    message_len: u128,
    phase: Phase,
    _backend: PhantomData<fn() -> B>,
}

impl<W: Word, B: Backend> Engine<W, B> {
    /// Create an engine seeded with `iv`
    pub fn new(iv: &'static [W; 8]) -> Self {
        Self {
            iv,
            state: *iv,
            buffer: W::ZERO_BLOCK,
            buffer_len: 0,
            message_len: 0,
            phase: Phase::Ready,
            _backend: PhantomData,
        }
    }

    /// Create an engine that believes `message_len` bytes were already
    /// absorbed. Only for exercising the length limits without hashing
    /// exabytes.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_message_len(iv: &'static [W; 8], message_len: u128) -> Self {
        let mut engine = Self::new(iv);
        engine.message_len = message_len;

        if message_len > 0 {
            engine.phase = Phase::Absorbing;
        }

        engine
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Total bytes absorbed since creation or the last reset
    pub fn message_len(&self) -> u128 {
        self.message_len
    }

    /// Bytes waiting in the partial block
    pub fn buffered_len(&self) -> usize {
        self.buffer_len
    }

    /// Absorb `data`.
    ///
    /// Empty input is a no-op (phase included). On error the engine is left
    /// exactly as it was.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha2Error> {
        if self.phase == Phase::Finalized {
            return Err(Sha2Error::AlreadyFinalized);
        }

        if data.is_empty() {
            return Ok(());
        }

        let message_len = self
            .message_len
            .checked_add(data.len() as u128)
            .filter(|len| *len <= W::MAX_MESSAGE_LEN)
            .ok_or(Sha2Error::LengthOverflow)?;

        self.message_len = message_len;
        self.phase = Phase::Absorbing;

        let mut data = data;

        // Top up the partial block first
        if self.buffer_len > 0 {
            let take = core::cmp::min(W::BLOCK_LEN - self.buffer_len, data.len());
            let (head, tail) = data.split_at(take);

            self.buffer.as_mut()[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            data = tail;

            if self.buffer_len < W::BLOCK_LEN {
                return Ok(());
            }

            W::compress::<B>(&mut self.state, slice::from_ref(&self.buffer));
            self.buffer.as_mut().zeroize();
            self.buffer_len = 0;
        }

        // Whole blocks go straight from the caller's slice
        let (blocks, rest) = W::split_blocks(data);

        if !blocks.is_empty() {
            W::compress::<B>(&mut self.state, blocks);
        }

        self.buffer.as_mut()[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();

        Ok(())
    }

    /// Pad, compress the final block(s) and write the leading `out.len()`
    /// bytes of the big-endian chaining value into `out`.
    ///
    /// `out.len()` must not exceed `8 * W::BYTES`. On success the engine is
    /// wiped, which moves it to [`Phase::Finalized`].
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Sha2Error> {
        if self.phase == Phase::Finalized {
            return Err(Sha2Error::AlreadyFinalized);
        }

        debug_assert!(out.len() <= 8 * W::BYTES);

        let length_offset = W::BLOCK_LEN - W::LENGTH_FIELD_LEN;

        // Section 5.1: append bit '1', then zeros
        let buffer = self.buffer.as_mut();
        buffer[self.buffer_len] = 0x80;
        buffer[self.buffer_len + 1..].fill(0);

        // Not enough room for the length field: it goes into an extra block
        if self.buffer_len >= length_offset {
            W::compress::<B>(&mut self.state, slice::from_ref(&self.buffer));
            self.buffer.as_mut().fill(0);
        }

        W::write_bit_len(self.message_len, &mut self.buffer.as_mut()[length_offset..]);
        W::compress::<B>(&mut self.state, slice::from_ref(&self.buffer));

        for (word, chunk) in self.state.iter().zip(out.chunks_mut(W::BYTES)) {
            word.write_be(chunk);
        }

        self.zeroize();

        Ok(())
    }

    /// Return to [`Phase::Ready`] with the original IV, discarding all
    /// absorbed data. Valid from every phase.
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = *self.iv;
        self.phase = Phase::Ready;
    }
}

impl<W: Word, B: Backend> Clone for Engine<W, B> {
    fn clone(&self) -> Self {
        Self {
            iv: self.iv,
            state: self.state,
            buffer: self.buffer,
            buffer_len: self.buffer_len,
            message_len: self.message_len,
            phase: self.phase,
            _backend: PhantomData,
        }
    }
}

// Never print the chaining value or buffered bytes
impl<W: Word, B: Backend> fmt::Debug for Engine<W, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("backend", &B::name())
            .field("phase", &self.phase)
            .field("message_len", &self.message_len)
            .finish_non_exhaustive()
    }
}

// A wiped engine has no chaining value left; only `reset` revives it
impl<W: Word, B: Backend> Zeroize for Engine<W, B> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.as_mut().zeroize();
        self.buffer_len = 0;
        self.message_len.zeroize();
        self.phase = Phase::Finalized;
    }
}

impl<W: Word, B: Backend> Drop for Engine<W, B> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<W: Word, B: Backend> ZeroizeOnDrop for Engine<W, B> {}
