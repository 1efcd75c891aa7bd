// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime backend selection.
//!
//! The choice is made once per process, on first use, and cached. Every
//! backend is bit-identical, so the choice only affects speed.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use redoubt_sha2_core::Backend;

use crate::feature_detector::FeatureDetector;

/// Compression implementation driving the SHA-256 family.
///
/// The SHA-512 family always runs on the portable backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Portable Rust
    Portable,
    /// x86_64 SHA extensions
    ShaNi,
    /// ARMv8 cryptographic extension
    ArmSha2,
}

impl BackendKind {
    /// Short identifier
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::Portable => "portable",
            BackendKind::ShaNi => "x86_64-sha-ni",
            BackendKind::ArmSha2 => "aarch64-sha2",
        }
    }

    const fn tag(self) -> u8 {
        match self {
            BackendKind::Portable => PORTABLE,
            BackendKind::ShaNi => SHA_NI,
            BackendKind::ArmSha2 => ARM_SHA2,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) const UNRESOLVED: u8 = 0;
const PORTABLE: u8 = 1;
const SHA_NI: u8 = 2;
const ARM_SHA2: u8 = 3;

static SELECTED: AtomicU8 = AtomicU8::new(UNRESOLVED);

#[cfg(sha2_x86_accel)]
const ACCELERATED: Option<BackendKind> = Some(BackendKind::ShaNi);

#[cfg(sha2_arm_accel)]
const ACCELERATED: Option<BackendKind> = Some(BackendKind::ArmSha2);

#[cfg(not(any(sha2_x86_accel, sha2_arm_accel)))]
const ACCELERATED: Option<BackendKind> = None;

pub(crate) fn resolve(detector: &FeatureDetector) -> BackendKind {
    match ACCELERATED {
        Some(kind) if detector.has_sha256() => kind,
        _ => BackendKind::Portable,
    }
}

/// Backend used for SHA-224/256 on this machine.
///
/// Detection runs on the first call; later calls read the cached answer.
pub fn active_backend() -> BackendKind {
    match SELECTED.load(Ordering::Relaxed) {
        PORTABLE => BackendKind::Portable,
        SHA_NI => BackendKind::ShaNi,
        ARM_SHA2 => BackendKind::ArmSha2,
        _ => {
            let kind = resolve(&FeatureDetector::new());

            // Racing threads resolve to the same value; only the winner logs
            if publish(&SELECTED, kind) {
                log::debug!("SHA-2 backend: {kind} for SHA-224/256, portable for SHA-384/512");
            }

            kind
        }
    }
}

// True for the one caller that moves `cell` out of UNRESOLVED
pub(crate) fn publish(cell: &AtomicU8, kind: BackendKind) -> bool {
    cell.compare_exchange(UNRESOLVED, kind.tag(), Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
}

/// Runtime-dispatching backend: accelerated SHA-256 compression when the CPU
/// supports it, portable otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Auto;

impl Backend for Auto {
    fn name() -> &'static str {
        active_backend().name()
    }

    #[inline]
    fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
        // SAFETY: built with SHA-NI enabled, so every CPU running this binary has it
        #[cfg(sha2_x86_static)]
        unsafe {
            redoubt_sha2_x86::compress256(state, blocks)
        }

        // SAFETY: built with the SHA2 extension enabled
        #[cfg(sha2_arm_static)]
        unsafe {
            redoubt_sha2_arm::compress256(state, blocks)
        }

        #[cfg(not(any(sha2_x86_static, sha2_arm_static)))]
        match active_backend() {
            // SAFETY: ShaNi is only selected after CPUID reported SHA-NI
            #[cfg(sha2_x86_accel)]
            BackendKind::ShaNi => unsafe { redoubt_sha2_x86::compress256(state, blocks) },
            // SAFETY: ArmSha2 is only selected after the SHA2 extension was detected
            #[cfg(sha2_arm_accel)]
            BackendKind::ArmSha2 => unsafe { redoubt_sha2_arm::compress256(state, blocks) },
            _ => redoubt_sha2_rust::compress256(state, blocks),
        }
    }

    #[inline]
    fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
        redoubt_sha2_rust::compress512(state, blocks);
    }
}
