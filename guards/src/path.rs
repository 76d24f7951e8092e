//! Path classification for the guard.
//!
//! The guard only looks at prefixes: auth pages live under `/auth`, the root
//! is a pure dispatch point, and everything else is a protected portal page.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Prefix shared by every page reachable without a session.
pub const AUTH_PREFIX: &str = "/auth";

/// Where unauthenticated or invalid sessions are sent.
pub const SIGN_IN_PATH: &str = "/auth/login";

/// Coarse class of a navigated path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathClass {
    Root,
    Auth,
    Protected,
}

/// Classify `path`, ignoring query string, fragment and trailing slashes.
#[must_use]
pub fn classify(path: &str) -> PathClass {
    let path = normalize(path);
    if path.is_empty() {
        return PathClass::Root;
    }
    match path.strip_prefix(AUTH_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => PathClass::Auth,
        _ => PathClass::Protected,
    }
}

/// Whether two paths name the same location for redirect purposes.
#[must_use]
pub fn same_location(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim_end_matches('/')
}
