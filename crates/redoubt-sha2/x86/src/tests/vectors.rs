// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// SHA-NI against the shared compression vectors.
//
// Tests pass vacuously on CPUs without SHA-NI; the portable crate covers
// the same vectors unconditionally.

use redoubt_sha2_core::consts::H0_SHA256;
use redoubt_sha2_vectors::run_compress256_vectors;

use crate::{compress256, is_supported};

#[test]
fn test_compress256_vectors() {
    if !is_supported() {
        eprintln!("SHA-NI not available, skipping");
        return;
    }

    // SAFETY: SHA-NI support checked above
    let result = run_compress256_vectors(|state, blocks| unsafe { compress256(state, blocks) });

    if let Err(report) = result {
        panic!("SHA-NI compress256 failed:\n{report}");
    }
}

#[test]
fn test_empty_blocks_leave_state() {
    if !is_supported() {
        return;
    }

    let mut state = H0_SHA256;
    // SAFETY: SHA-NI support checked above
    unsafe { compress256(&mut state, &[]) };

    assert_eq!(state, H0_SHA256);
}

#[test]
fn test_detection_is_stable() {
    assert_eq!(is_supported(), is_supported());
}
