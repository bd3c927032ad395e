//! Version and commit metadata captured by `build.rs`.

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Crate version the bundle was built from.
pub fn version() -> &'static str {
    built_info::PKG_VERSION
}

/// Git commit the bundle was built from, or `"unknown"` outside a checkout.
pub fn git_commit_hash() -> &'static str {
    match built_info::GIT_COMMIT_HASH_SHORT {
        Some(hash) if !hash.is_empty() => hash,
        _ => "unknown",
    }
}
