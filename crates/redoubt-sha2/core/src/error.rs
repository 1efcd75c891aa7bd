// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-2 streaming error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha2Error {
    /// Total message length would exceed the variant's length field
    /// (2^64 - 1 bits for SHA-224/256, 2^128 - 1 bits for the SHA-512 family)
    #[error("message length exceeds the variant's length field")]
    LengthOverflow,

    /// The context already produced its digest and must be reset before reuse
    #[error("hash context already finalized")]
    AlreadyFinalized,
}
