//! Build metadata embedded at compile time, shown in the footer.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_SHA: &str = env!("LOFTLINE_WEB_GIT_SHA");

/// Abbreviated commit hash, or the placeholder when git was unavailable.
pub fn short_sha() -> &'static str {
    let end = GIT_SHA.len().min(8);
    &GIT_SHA[..end]
}
