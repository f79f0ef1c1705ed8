//! Build metadata and API version accessors shared across the engine and scanners.
//! This includes the generated version.rs from the build script into a core module,
//! providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the scanner API version string from the build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn get_api_version() -> u32 {
    SCANNER_API_VERSION.parse().unwrap_or(20260801)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}
