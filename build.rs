//! Build script for ckshow.
//!
//! Generates version information from git and the build environment so the
//! `--version` output can report the exact commit and toolchain.

use std::env;
use std::process::Command;

fn main() {
    // Tell cargo to re-run this script if it changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Set the target triple for version info
    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    // Get git commit hash
    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=CKSHOW_GIT_HASH={}", hash);
    }

    // Get build date
    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=CKSHOW_BUILD_DATE={}", date);
    }

    // Get rustc version
    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=CKSHOW_RUSTC_VERSION={}", version);
    }
}

/// Get the current git commit hash (short form)
fn get_git_hash() -> Option<String> {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Get the current build date in ISO 8601 format
fn get_build_date() -> Option<String> {
    Command::new("date")
        .args(["-u", "+%Y-%m-%dT%H:%M:%SZ"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Get the rustc version
fn get_rustc_version() -> Option<String> {
    Command::new("rustc")
        .args(["--version"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok().and_then(|s| {
                    // Parse "rustc 1.75.0 (..." -> "1.75.0"
                    s.split_whitespace().nth(1).map(|v| v.to_string())
                })
            } else {
                None
            }
        })
}
