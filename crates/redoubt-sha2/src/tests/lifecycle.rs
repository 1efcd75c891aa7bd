// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    Context, Phase, Sha2Error, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, Variant,
    block_len, digest_len, hash,
};

// =============================================================================
// Descriptors
// =============================================================================

#[test]
fn test_digest_and_block_lengths() {
    let table = [
        (Variant::Sha224, 28, 64),
        (Variant::Sha256, 32, 64),
        (Variant::Sha384, 48, 128),
        (Variant::Sha512, 64, 128),
        (Variant::Sha512_224, 28, 128),
        (Variant::Sha512_256, 32, 128),
    ];

    for (variant, digest, block) in table {
        assert_eq!(digest_len(variant), digest, "{variant}");
        assert_eq!(block_len(variant), block, "{variant}");
    }
}

#[test]
fn test_typed_hasher_constants() {
    assert_eq!(Sha224::DIGEST_LEN, 28);
    assert_eq!(Sha224::BLOCK_LEN, 64);
    assert_eq!(Sha256::VARIANT, Variant::Sha256);
    assert_eq!(Sha384::DIGEST_LEN, 48);
    assert_eq!(Sha512::BLOCK_LEN, 128);
    assert_eq!(Sha512_224::DIGEST_LEN, 28);
    assert_eq!(Sha512_256::VARIANT, Variant::Sha512_256);
}

// =============================================================================
// Phases
// =============================================================================

#[test]
fn test_context_phases() {
    let mut context = Context::new(Variant::Sha256);
    assert_eq!(context.phase(), Phase::Ready);
    assert_eq!(context.variant(), Variant::Sha256);

    context.update(b"abc").expect("Failed to update(..)");
    assert_eq!(context.phase(), Phase::Absorbing);

    context.finalize_mut().expect("Failed to finalize_mut(..)");
    assert_eq!(context.phase(), Phase::Finalized);

    context.reset();
    assert_eq!(context.phase(), Phase::Ready);
}

#[test]
fn test_finalized_context_rejects_everything_but_reset() {
    for variant in Variant::ALL {
        let mut context = Context::new(variant);
        context.update(b"abc").expect("Failed to update(..)");
        context.finalize_mut().expect("Failed to finalize_mut(..)");

        assert_eq!(context.update(b"more"), Err(Sha2Error::AlreadyFinalized));
        assert_eq!(context.update(&[]), Err(Sha2Error::AlreadyFinalized));
        assert_eq!(
            context.finalize_mut().map(|_| ()),
            Err(Sha2Error::AlreadyFinalized)
        );
        assert_eq!(
            context.finalize_reset().map(|_| ()),
            Err(Sha2Error::AlreadyFinalized)
        );
        assert_eq!(
            context.clone().finalize().map(|_| ()),
            Err(Sha2Error::AlreadyFinalized)
        );
        assert_eq!(context.phase(), Phase::Finalized, "{variant}");
    }
}

#[test]
fn test_reset_after_finalize_reproduces_digest() {
    for variant in Variant::ALL {
        let mut context = Context::new(variant);
        context.update(b"abc").expect("Failed to update(..)");
        let first = context.finalize_mut().expect("Failed to finalize_mut(..)");

        context.reset();
        context.update(b"abc").expect("Failed to update(..)");
        let second = context.finalize_mut().expect("Failed to finalize_mut(..)");

        assert_eq!(first, second, "{variant}");
    }
}

#[test]
fn test_reset_mid_stream_discards_input() {
    let mut context = Context::new(Variant::Sha512);
    context
        .update(b"discarded prefix")
        .expect("Failed to update(..)");

    context.reset();
    assert_eq!(context.message_len(), 0);

    context.update(b"abc").expect("Failed to update(..)");
    let got = context.finalize().expect("Failed to finalize(..)");

    assert_eq!(got, hash(Variant::Sha512, b"abc").expect("Failed to hash(..)"));
}

#[test]
fn test_finalize_reset_allows_next_message() {
    let mut context = Context::new(Variant::Sha224);

    context.update(b"first").expect("Failed to update(..)");
    let first = context
        .finalize_reset()
        .expect("Failed to finalize_reset(..)");
    assert_eq!(context.phase(), Phase::Ready);

    context.update(b"second").expect("Failed to update(..)");
    let second = context.finalize().expect("Failed to finalize(..)");

    assert_eq!(first, hash(Variant::Sha224, b"first").expect("Failed to hash(..)"));
    assert_eq!(second, hash(Variant::Sha224, b"second").expect("Failed to hash(..)"));
}

#[test]
fn test_typed_hasher_lifecycle() {
    let mut hasher = Sha512_256::new();
    assert_eq!(hasher.phase(), Phase::Ready);
    assert!(!hasher.is_finalized());

    hasher.update(b"abc").expect("Failed to update(..)");
    let first = hasher.finalize_mut().expect("Failed to finalize_mut(..)");
    assert!(hasher.is_finalized());
    assert_eq!(hasher.update(b"x"), Err(Sha2Error::AlreadyFinalized));
    assert_eq!(hasher.finalize_mut(), Err(Sha2Error::AlreadyFinalized));

    hasher.reset();
    hasher.update(b"abc").expect("Failed to update(..)");
    let second = hasher
        .finalize_reset()
        .expect("Failed to finalize_reset(..)");
    assert_eq!(first, second);
    assert!(!hasher.is_finalized());

    let default = Sha512_256::default();
    assert_eq!(default.finalize(), Sha512_256::digest(&[]));
}

// =============================================================================
// Clone / Debug
// =============================================================================

#[test]
fn test_clone_forks_state() {
    let mut base = Sha256::new();
    base.update(b"common ").expect("Failed to update(..)");

    let mut left = base.clone();
    let mut right = base.clone();
    left.update(b"left").expect("Failed to update(..)");
    right.update(b"right").expect("Failed to update(..)");

    assert_eq!(
        left.finalize(),
        Sha256::digest(b"common left"),
        "left fork"
    );
    assert_eq!(
        right.finalize(),
        Sha256::digest(b"common right"),
        "right fork"
    );
    assert_eq!(base.finalize(), Sha256::digest(b"common "), "base untouched");
}

#[test]
fn test_debug_hides_state() {
    let mut context = Context::new(Variant::Sha256);
    context.update(b"secret material").expect("Failed to update(..)");

    let rendered = format!("{context:?}");
    assert!(rendered.contains("Sha256"));
    assert!(rendered.contains("Absorbing"));
    assert!(!rendered.contains("secret"));
    assert!(!rendered.contains("115, 101"), "buffer leaked: {rendered}");

    let mut hasher = Sha384::new();
    hasher.update(b"secret material").expect("Failed to update(..)");

    let rendered = format!("{hasher:?}");
    assert!(rendered.starts_with("Sha384"));
    assert!(!rendered.contains("secret"));
}

// =============================================================================
// Length limits
// =============================================================================

#[test]
fn test_length_overflow_sha256_family() {
    let max = (1u128 << 61) - 1;

    for variant in [Variant::Sha224, Variant::Sha256] {
        let mut context = Context::with_message_len(variant, max);

        assert_eq!(context.update(b"x"), Err(Sha2Error::LengthOverflow), "{variant}");
        assert_eq!(context.message_len(), max, "{variant}");
        assert_eq!(context.phase(), Phase::Absorbing, "{variant}");

        // The context stays usable
        context.finalize_mut().expect("Failed to finalize_mut(..)");
    }
}

#[test]
fn test_length_limit_is_inclusive() {
    let max = (1u128 << 61) - 1;
    let mut context = Context::with_message_len(Variant::Sha256, max - 1);

    context.update(b"x").expect("Failed to update(..) to the limit");
    assert_eq!(context.message_len(), max);
    assert_eq!(context.update(b"x"), Err(Sha2Error::LengthOverflow));
}

#[test]
fn test_length_overflow_sha512_family() {
    let max = (1u128 << 125) - 1;

    for variant in [
        Variant::Sha384,
        Variant::Sha512,
        Variant::Sha512_224,
        Variant::Sha512_256,
    ] {
        let mut context = Context::with_message_len(variant, max);

        assert_eq!(context.update(b"x"), Err(Sha2Error::LengthOverflow), "{variant}");
        assert_eq!(context.message_len(), max, "{variant}");
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Sha2Error::LengthOverflow.to_string(),
        "message length exceeds the variant's length field"
    );
    assert_eq!(
        Sha2Error::AlreadyFinalized.to_string(),
        "hash context already finalized"
    );
}
