// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::arch::x86_64::{
    __m128i, _mm_add_epi32, _mm_alignr_epi8, _mm_blend_epi16, _mm_loadu_si128, _mm_set_epi64x,
    _mm_sha256msg1_epu32, _mm_sha256msg2_epu32, _mm_sha256rnds2_epu32, _mm_shuffle_epi8,
    _mm_shuffle_epi32, _mm_storeu_si128,
};

use redoubt_sha2_core::consts::K256;

// Addressable copy for the unaligned K loads
static K: [u32; 64] = K256;

// W[t..t+4] from the four previous schedule vectors
macro_rules! schedule {
    ($v0:expr, $v1:expr, $v2:expr, $v3:expr) => {
        _mm_sha256msg2_epu32(
            _mm_add_epi32(_mm_sha256msg1_epu32($v0, $v1), _mm_alignr_epi8($v3, $v2, 4)),
            $v3,
        )
    };
}

// Four rounds: two `sha256rnds2`, each consuming two W+K lanes
macro_rules! rounds4 {
    ($abef:ident, $cdgh:ident, $w:expr, $i:expr) => {{
        let wk = _mm_add_epi32($w, _mm_loadu_si128(K.as_ptr().add(4 * $i).cast()));
        $cdgh = _mm_sha256rnds2_epu32($cdgh, $abef, wk);
        $abef = _mm_sha256rnds2_epu32($abef, $cdgh, _mm_shuffle_epi32(wk, 0x0E));
    }};
}

/// SHA-NI compression.
///
/// The instructions want the state as ABEF/CDGH lanes rather than the
/// natural ABCD/EFGH order, so the state is permuted on entry and exit only.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
pub(crate) unsafe fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    unsafe {
        // Big-endian word load within each 32-bit lane
        let be_mask = _mm_set_epi64x(
            0x0C0D_0E0F_0809_0A0Bu64 as i64,
            0x0405_0607_0001_0203u64 as i64,
        );

        let state_ptr = state.as_ptr().cast::<__m128i>();
        let dcba = _mm_loadu_si128(state_ptr);
        let efgh = _mm_loadu_si128(state_ptr.add(1));

        let cdab = _mm_shuffle_epi32(dcba, 0xB1);
        let efgh = _mm_shuffle_epi32(efgh, 0x1B);
        let mut abef = _mm_alignr_epi8(cdab, efgh, 8);
        let mut cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);

        for block in blocks {
            let abef_save = abef;
            let cdgh_save = cdgh;

            let data = block.as_ptr().cast::<__m128i>();
            let mut w0 = _mm_shuffle_epi8(_mm_loadu_si128(data), be_mask);
            let mut w1 = _mm_shuffle_epi8(_mm_loadu_si128(data.add(1)), be_mask);
            let mut w2 = _mm_shuffle_epi8(_mm_loadu_si128(data.add(2)), be_mask);
            let mut w3 = _mm_shuffle_epi8(_mm_loadu_si128(data.add(3)), be_mask);
            let mut w4;

            rounds4!(abef, cdgh, w0, 0);
            rounds4!(abef, cdgh, w1, 1);
            rounds4!(abef, cdgh, w2, 2);
            rounds4!(abef, cdgh, w3, 3);

            w4 = schedule!(w0, w1, w2, w3);
            rounds4!(abef, cdgh, w4, 4);
            w0 = schedule!(w1, w2, w3, w4);
            rounds4!(abef, cdgh, w0, 5);
            w1 = schedule!(w2, w3, w4, w0);
            rounds4!(abef, cdgh, w1, 6);
            w2 = schedule!(w3, w4, w0, w1);
            rounds4!(abef, cdgh, w2, 7);
            w3 = schedule!(w4, w0, w1, w2);
            rounds4!(abef, cdgh, w3, 8);
            w4 = schedule!(w0, w1, w2, w3);
            rounds4!(abef, cdgh, w4, 9);
            w0 = schedule!(w1, w2, w3, w4);
            rounds4!(abef, cdgh, w0, 10);
            w1 = schedule!(w2, w3, w4, w0);
            rounds4!(abef, cdgh, w1, 11);
            w2 = schedule!(w3, w4, w0, w1);
            rounds4!(abef, cdgh, w2, 12);
            w3 = schedule!(w4, w0, w1, w2);
            rounds4!(abef, cdgh, w3, 13);
            w4 = schedule!(w0, w1, w2, w3);
            rounds4!(abef, cdgh, w4, 14);
            w0 = schedule!(w1, w2, w3, w4);
            rounds4!(abef, cdgh, w0, 15);

            abef = _mm_add_epi32(abef, abef_save);
            cdgh = _mm_add_epi32(cdgh, cdgh_save);
        }

        let feba = _mm_shuffle_epi32(abef, 0x1B);
        let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
        let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
        let hgef = _mm_alignr_epi8(dchg, feba, 8);

        let state_ptr = state.as_mut_ptr().cast::<__m128i>();
        _mm_storeu_si128(state_ptr, dcba);
        _mm_storeu_si128(state_ptr.add(1), hgef);
    }
}
