//! Process-wide serving-node identity.
//!
//! Every result carries an `ENT_SOURCE` provenance marker identifying the
//! serving node and software version. The value is computed at most once per
//! process and cached; concurrent first-time initialization is harmless
//! because every initializer produces the same value.

use std::sync::OnceLock;

static IDENTITY: OnceLock<String> = OnceLock::new();

/// Get the cached version-identity string, computing it on first use.
///
/// Defaults to `<package>/<version>` unless [`set_identity`] was called
/// before the first read.
pub fn identity() -> &'static str {
    IDENTITY
        .get_or_init(|| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
        .as_str()
}

/// Set the version-identity string for this process, typically
/// `<version-name>/<node-hash>`.
///
/// Returns `false` if the identity was already initialized; the existing
/// value is kept in that case.
pub fn set_identity<S: Into<String>>(value: S) -> bool {
    IDENTITY.set(value.into()).is_ok()
}
