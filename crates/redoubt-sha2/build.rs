// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

fn main() {
    // Declare custom cfgs to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(sha2_x86_accel)");
    println!("cargo:rustc-check-cfg=cfg(sha2_arm_accel)");
    println!("cargo:rustc-check-cfg=cfg(sha2_x86_static)");
    println!("cargo:rustc-check-cfg=cfg(sha2_arm_static)");

    // Portable compression only
    if std::env::var("CARGO_FEATURE_PURE_RUST").is_ok() {
        return;
    }

    let Ok(target_arch) = std::env::var("CARGO_CFG_TARGET_ARCH") else {
        return;
    };

    // Accelerated SHA-256 compression is compiled in where a backend crate
    // exists; whether it runs is still decided by runtime CPU detection.
    match target_arch.as_str() {
        "x86_64" => println!("cargo:rustc-cfg=sha2_x86_accel"),
        "aarch64" => println!("cargo:rustc-cfg=sha2_arm_accel"),
        _ => {}
    }

    // Target features enabled at build time (-C target-feature / target-cpu)
    // make the accelerated path unconditional: no probe, no dispatch.
    let target_features = std::env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let enabled: Vec<&str> = target_features.split(',').collect();
    let has_all = |required: &[&str]| required.iter().all(|f| enabled.contains(f));

    match target_arch.as_str() {
        "x86_64" if has_all(&["sha", "sse2", "ssse3", "sse4.1"]) => {
            println!("cargo:rustc-cfg=sha2_x86_static")
        }
        "aarch64" if has_all(&["neon", "sha2"]) => println!("cargo:rustc-cfg=sha2_arm_static"),
        _ => {}
    }
}
