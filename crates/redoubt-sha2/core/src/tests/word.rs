// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Logical functions per FIPS 180-4 Sections 4.1.2 and 4.1.3

use crate::word::Word;

const VALUES_32: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

const VALUES_64: [u64; 5] = [
    0x0000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFF,
    0x0123_4567_89AB_CDEF,
    0xFEDC_BA98_7654_3210,
    0x0F0F_0F0F_F0F0_F0F0,
];

// =============================================================================
// Ch / Maj
// =============================================================================

#[test]
fn test_ch_maj_32() {
    for &x in &VALUES_32 {
        for &y in &VALUES_32 {
            for &z in &VALUES_32 {
                assert_eq!(<u32 as Word>::ch(x, y, z), (x & y) ^ (!x & z));
                assert_eq!(<u32 as Word>::maj(x, y, z), (x & y) ^ (x & z) ^ (y & z));
            }
        }
    }
}

#[test]
fn test_ch_maj_64() {
    for &x in &VALUES_64 {
        for &y in &VALUES_64 {
            for &z in &VALUES_64 {
                assert_eq!(<u64 as Word>::ch(x, y, z), (x & y) ^ (!x & z));
                assert_eq!(<u64 as Word>::maj(x, y, z), (x & y) ^ (x & z) ^ (y & z));
            }
        }
    }
}

// =============================================================================
// Σ / σ
// =============================================================================

#[test]
fn test_sigmas_32() {
    for &x in &VALUES_32 {
        assert_eq!(
            x.big_sigma0(),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        );
        assert_eq!(
            x.big_sigma1(),
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
        );
        assert_eq!(
            x.small_sigma0(),
            x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
        );
        assert_eq!(
            x.small_sigma1(),
            x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
        );
    }
}

#[test]
fn test_sigmas_64() {
    for &x in &VALUES_64 {
        assert_eq!(
            x.big_sigma0(),
            x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
        );
        assert_eq!(
            x.big_sigma1(),
            x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
        );
        assert_eq!(
            x.small_sigma0(),
            x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
        );
        assert_eq!(
            x.small_sigma1(),
            x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
        );
    }
}

#[test]
fn test_sigma_known_value() {
    // Σ0(0x6a09e667), first round of every SHA-256 computation
    assert_eq!(0x6a09e667u32.big_sigma0(), 0xce20b47e);
    assert_eq!(0x0000_0001u32.big_sigma0(), 0x4008_0400);
}

#[test]
fn test_wrapping_add() {
    assert_eq!(Word::wrapping_add(u32::MAX, 2u32), 1);
    assert_eq!(Word::wrapping_add(u64::MAX, 2u64), 1);
}

// =============================================================================
// Big-endian codecs
// =============================================================================

#[test]
fn test_from_be_chunk() {
    assert_eq!(<u32 as Word>::from_be_chunk(&[0x61, 0x62, 0x63, 0x80]), 0x6162_6380);
    assert_eq!(
        <u64 as Word>::from_be_chunk(&[1, 2, 3, 4, 5, 6, 7, 8]),
        0x0102_0304_0506_0708
    );
}

#[test]
fn test_write_be_full_and_truncated() {
    let mut full = [0u8; 8];
    0x0102_0304_0506_0708u64.write_be(&mut full);
    assert_eq!(full, [1, 2, 3, 4, 5, 6, 7, 8]);

    let mut half = [0u8; 4];
    0x0102_0304_0506_0708u64.write_be(&mut half);
    assert_eq!(half, [1, 2, 3, 4]);

    let mut word = [0u8; 4];
    0xdead_beefu32.write_be(&mut word);
    assert_eq!(word, [0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_write_bit_len() {
    let mut field = [0u8; 8];
    <u32 as Word>::write_bit_len(3, &mut field);
    assert_eq!(field, [0, 0, 0, 0, 0, 0, 0, 0x18]);

    let mut field = [0u8; 16];
    <u64 as Word>::write_bit_len(0x2000_0000_0000_0000, &mut field);
    let mut expected = [0u8; 16];
    expected[7] = 1;
    assert_eq!(field, expected, "bit count crosses into the high 64 bits");
}

#[test]
fn test_split_blocks() {
    let data = [7u8; 200];

    let (blocks, rest) = <u32 as Word>::split_blocks(&data);
    assert_eq!(blocks.len(), 3);
    assert_eq!(rest.len(), 8);

    let (blocks, rest) = <u64 as Word>::split_blocks(&data);
    assert_eq!(blocks.len(), 1);
    assert_eq!(rest.len(), 72);

    let (blocks, rest) = <u64 as Word>::split_blocks(&[]);
    assert!(blocks.is_empty());
    assert!(rest.is_empty());
}
