//! Version string shown by `platesum --version`.

/// Returns `pkg_version (git_hash)`, with `unknown` when git metadata is unavailable.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}
