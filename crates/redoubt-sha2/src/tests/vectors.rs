// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer tests for every variant through every public entry point.
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
// [2] NIST CSRC Examples with Intermediate Values
//     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values

use redoubt_sha2_vectors::{run_compress256_vectors, run_compress512_vectors, run_hash_vectors};

use super::support::typed_digest;
use crate::{Context, Portable, compress256, compress512, hash};

// =============================================================================
// hash()
// =============================================================================

#[test]
fn test_hash_vectors() {
    let result = run_hash_vectors(|variant, message| {
        hash(variant, message)
            .expect("Failed to hash(..)")
            .as_bytes()
            .to_vec()
    });

    if let Err(report) = result {
        panic!("hash(..) failed:\n{report}");
    }
}

// =============================================================================
// Context, streamed in odd-sized chunks
// =============================================================================

#[test]
fn test_context_chunked_vectors() {
    let result = run_hash_vectors(|variant, message| {
        let mut context = Context::new(variant);
        for chunk in message.chunks(7) {
            context.update(chunk).expect("Failed to update(..)");
        }
        context
            .finalize()
            .expect("Failed to finalize(..)")
            .as_bytes()
            .to_vec()
    });

    if let Err(report) = result {
        panic!("chunked Context failed:\n{report}");
    }
}

#[test]
fn test_context_portable_vectors() {
    let result = run_hash_vectors(|variant, message| {
        let mut context = Context::<Portable>::with_backend(variant);
        context.update(message).expect("Failed to update(..)");
        context
            .finalize()
            .expect("Failed to finalize(..)")
            .as_bytes()
            .to_vec()
    });

    if let Err(report) = result {
        panic!("portable Context failed:\n{report}");
    }
}

// =============================================================================
// Typed hashers
// =============================================================================

#[test]
fn test_typed_hasher_vectors() {
    if let Err(report) = run_hash_vectors(typed_digest) {
        panic!("typed hashers failed:\n{report}");
    }
}

// =============================================================================
// Raw compression
// =============================================================================

#[test]
fn test_compress256_vectors() {
    if let Err(report) = run_compress256_vectors(compress256) {
        panic!("compress256 failed:\n{report}");
    }
}

#[test]
fn test_compress512_vectors() {
    if let Err(report) = run_compress512_vectors(compress512) {
        panic!("compress512 failed:\n{report}");
    }
}
