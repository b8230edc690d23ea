//! Build script stamping the binary with a version and git SHA.
//!
//! - STAYBOOKER_VERSION: release version (falls back to CARGO_PKG_VERSION)
//! - STAYBOOKER_GIT_SHA: short commit (falls back to GITHUB_SHA, then `git rev-parse`)

use std::env;
use std::process::Command;

const STAMPED_VARS: &[&str] = &["STAYBOOKER_VERSION", "STAYBOOKER_GIT_SHA", "GITHUB_SHA"];

fn main() {
    let version = env::var("STAYBOOKER_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("STAYBOOKER_GIT_SHA")
        .or_else(|_| env::var("GITHUB_SHA").map(|sha| sha.chars().take(7).collect()))
        .ok()
        .or_else(short_head)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=STAYBOOKER_VERSION={}", version);
    println!("cargo:rustc-env=STAYBOOKER_GIT_SHA={}", git_sha);

    for var in STAMPED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}

fn short_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|sha| sha.trim().to_string())
}
