// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use redoubt_sha2_core::Word;
use zeroize::Zeroize;

pub(crate) fn compress_blocks<W: Word>(state: &mut [W; 8], blocks: &[W::Block]) {
    for block in blocks {
        compress_block(state, block.as_ref());
    }
}

/// One block of FIPS 180-4 Section 6.2.2 / 6.4.2.
///
/// The schedule is kept as a 16-word ring: W[t] overwrites W[t-16], which is
/// its last reader.
fn compress_block<W: Word>(state: &mut [W; 8], block: &[u8]) {
    // Step 1: W[0..15] from the block, big-endian
    let mut w = [W::ZERO; 16];
    for (wt, chunk) in w.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *wt = W::from_be_chunk(chunk);
    }

    // Step 2: working variables a..h = H(i-1)
    let mut v = *state;

    // Step 3: rounds
    for (t, &k) in W::K.iter().enumerate() {
        if t >= 16 {
            // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
            w[t & 15] = w[(t - 2) & 15]
                .small_sigma1()
                .wrapping_add(w[(t - 7) & 15])
                .wrapping_add(w[(t - 15) & 15].small_sigma0())
                .wrapping_add(w[t & 15]);
        }

        let [a, b, c, d, e, f, g, h] = v;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = h
            .wrapping_add(e.big_sigma1())
            .wrapping_add(W::ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w[t & 15]);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = a.big_sigma0().wrapping_add(W::maj(a, b, c));

        v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (h, x) in state.iter_mut().zip(v) {
        *h = h.wrapping_add(x);
    }

    w.zeroize();
    v.zeroize();
}
