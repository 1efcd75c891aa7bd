// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;

/// Compact description of a test message.
///
/// Long messages are generated on demand so the vector tables stay small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Bytes as written
    Literal(&'static [u8]),
    /// `count` copies of `byte`
    Repeat {
        /// Repeated byte
        byte: u8,
        /// Number of copies
        count: usize,
    },
    /// Bytes `0, 1, 2, ..` wrapping at 256
    Counter(usize),
}

impl Message {
    /// Message length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Message::Literal(bytes) => bytes.len(),
            Message::Repeat { count, .. } => count,
            Message::Counter(len) => len,
        }
    }

    /// True for the empty message
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the message
    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            Message::Literal(bytes) => bytes.to_vec(),
            Message::Repeat { byte, count } => vec![byte; count],
            Message::Counter(len) => counter_bytes(len),
        }
    }
}

/// Bytes `0, 1, 2, ..` wrapping at 256
pub fn counter_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}
