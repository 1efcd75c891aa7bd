// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{K256, K512};
use crate::variant::{Family, Variant};
use crate::word::Word;

#[test]
fn test_variant_parameters() {
    // (variant, digest_len, block_len, word_bits, rounds, name)
    let table = [
        (Variant::Sha224, 28, 64, 32, 64, "SHA-224"),
        (Variant::Sha256, 32, 64, 32, 64, "SHA-256"),
        (Variant::Sha384, 48, 128, 64, 80, "SHA-384"),
        (Variant::Sha512, 64, 128, 64, 80, "SHA-512"),
        (Variant::Sha512_224, 28, 128, 64, 80, "SHA-512/224"),
        (Variant::Sha512_256, 32, 128, 64, 80, "SHA-512/256"),
    ];

    for (variant, digest_len, block_len, word_bits, rounds, name) in table {
        assert_eq!(variant.digest_len(), digest_len, "{name} digest_len");
        assert_eq!(variant.block_len(), block_len, "{name} block_len");
        assert_eq!(variant.word_bits(), word_bits, "{name} word_bits");
        assert_eq!(variant.rounds(), rounds, "{name} rounds");
        assert_eq!(variant.name(), name);
        assert_eq!(variant.to_string(), name);
    }
}

#[test]
fn test_all_lists_each_variant_once() {
    assert_eq!(Variant::ALL.len(), 6);

    for (i, a) in Variant::ALL.iter().enumerate() {
        for b in &Variant::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_digest_never_exceeds_state() {
    for variant in Variant::ALL {
        let state_bytes = 8 * variant.word_bits() as usize / 8;
        assert!(variant.digest_len() <= state_bytes, "{variant}");
    }
}

#[test]
fn test_family_matches_word_engine() {
    assert_eq!(Family::Sha256.block_len(), <u32 as Word>::BLOCK_LEN);
    assert_eq!(Family::Sha256.rounds(), <u32 as Word>::K.len());
    assert_eq!(Family::Sha256.rounds(), K256.len());
    assert_eq!(Family::Sha256.length_field_len(), <u32 as Word>::LENGTH_FIELD_LEN);
    assert_eq!(Family::Sha256.word_bits() as usize, 8 * <u32 as Word>::BYTES);

    assert_eq!(Family::Sha512.block_len(), <u64 as Word>::BLOCK_LEN);
    assert_eq!(Family::Sha512.rounds(), <u64 as Word>::K.len());
    assert_eq!(Family::Sha512.rounds(), K512.len());
    assert_eq!(Family::Sha512.length_field_len(), <u64 as Word>::LENGTH_FIELD_LEN);
    assert_eq!(Family::Sha512.word_bits() as usize, 8 * <u64 as Word>::BYTES);
}

#[test]
fn test_variant_families() {
    assert_eq!(Variant::Sha224.family(), Family::Sha256);
    assert_eq!(Variant::Sha256.family(), Family::Sha256);
    assert_eq!(Variant::Sha384.family(), Family::Sha512);
    assert_eq!(Variant::Sha512.family(), Family::Sha512);
    assert_eq!(Variant::Sha512_224.family(), Family::Sha512);
    assert_eq!(Variant::Sha512_256.family(), Family::Sha512);
    assert_eq!(Variant::Sha384.length_field_len(), 16);
    assert_eq!(Variant::Sha224.length_field_len(), 8);
}
