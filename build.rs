// Stamps the two values `args::version_line` prints:
// AUTOCLICK_BUILD_YEAR and AUTOCLICK_VERSION_DISPLAY.
use std::env;
use std::process::Command;
use time::OffsetDateTime;

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=AUTOCLICK_BUILD_YEAR={}", build_year());

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let display = if is_release_tag(&version) {
        version
    } else {
        format!("{version}-dev")
    };
    println!("cargo:rustc-env=AUTOCLICK_VERSION_DISPLAY={display}");
}

/// SOURCE_DATE_EPOCH for reproducible builds, the clock otherwise
fn build_year() -> i32 {
    env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
        .year()
}

/// Release profiles are trusted as-is; other builds must sit on tag `v{version}`
fn is_release_tag(version: &str) -> bool {
    if env::var("PROFILE").as_deref() == Ok("release") {
        return true;
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    Command::new("git")
        .args(["describe", "--tags", "--exact-match"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .is_some_and(|tag| tag.trim().strip_prefix('v') == Some(version))
}
