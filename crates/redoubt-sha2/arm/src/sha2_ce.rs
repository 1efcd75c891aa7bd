// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::arch::aarch64::{
    uint32x4_t, vaddq_u32, vld1q_u8, vld1q_u32, vreinterpretq_u32_u8, vrev32q_u8, vsha256h2q_u32,
    vsha256hq_u32, vsha256su0q_u32, vsha256su1q_u32, vst1q_u32,
};

use redoubt_sha2_core::consts::K256;

static K: [u32; 64] = K256;

/// Crypto-extension compression.
///
/// The state stays in its natural ABCD/EFGH order. The schedule is a ring of
/// four vectors: group `i` overwrites the vector of group `i - 4`.
#[target_feature(enable = "neon,sha2")]
pub(crate) unsafe fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    unsafe {
        let mut abcd = vld1q_u32(state.as_ptr());
        let mut efgh = vld1q_u32(state.as_ptr().add(4));

        for block in blocks {
            let abcd_save = abcd;
            let efgh_save = efgh;

            // Byte-swap each lane: message words are big-endian
            let data = block.as_ptr();
            let mut s: [uint32x4_t; 4] = [
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(data))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(data.add(16)))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(data.add(32)))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(data.add(48)))),
            ];

            for i in 0..16 {
                if i >= 4 {
                    s[i % 4] = vsha256su1q_u32(
                        vsha256su0q_u32(s[i % 4], s[(i + 1) % 4]),
                        s[(i + 2) % 4],
                        s[(i + 3) % 4],
                    );
                }

                let wk = vaddq_u32(s[i % 4], vld1q_u32(K.as_ptr().add(4 * i)));
                let abcd_prev = abcd;
                abcd = vsha256hq_u32(abcd_prev, efgh, wk);
                efgh = vsha256h2q_u32(efgh, abcd_prev, wk);
            }

            abcd = vaddq_u32(abcd, abcd_save);
            efgh = vaddq_u32(efgh, efgh_save);
        }

        vst1q_u32(state.as_mut_ptr(), abcd);
        vst1q_u32(state.as_mut_ptr().add(4), efgh);
    }
}
