// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
pub enum FeatureDetectorBehaviour {
    None,
    #[cfg(any(sha2_x86_accel, sha2_arm_accel))]
    ForceSha256True,
    ForceSha256False,
}

pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Platform-level SHA-256 instruction detection (no test override)
    #[inline(always)]
    pub fn platform_has_sha256(&self) -> bool {
        #[cfg(sha2_x86_accel)]
        let detected = redoubt_sha2_x86::is_supported();

        #[cfg(sha2_arm_accel)]
        let detected = redoubt_sha2_arm::is_supported();

        #[cfg(not(any(sha2_x86_accel, sha2_arm_accel)))]
        let detected = false;

        log::trace!("SHA-256 instructions detected: {detected}");

        detected
    }

    #[inline(always)]
    pub fn has_sha256(&self) -> bool {
        #[cfg(test)]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => self.platform_has_sha256(),
                #[cfg(any(sha2_x86_accel, sha2_arm_accel))]
                FeatureDetectorBehaviour::ForceSha256True => true,
                FeatureDetectorBehaviour::ForceSha256False => false,
            }
        }

        #[cfg(not(test))]
        self.platform_has_sha256()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}
