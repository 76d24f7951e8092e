//! Superseding tokens for deferred guard checks.
//!
//! Every navigation takes a fresh token before its check is deferred to the
//! next tick. When the check finally runs, it applies its decision only if no
//! newer navigation has started in the meantime.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one navigation's guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NavigationToken(u64);

/// Issues navigation tokens. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct NavigationSequencer {
    latest: Arc<AtomicU64>,
}

impl NavigationSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation, superseding every earlier token.
    pub fn begin(&self) -> NavigationToken {
        NavigationToken(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `token` still belongs to the most recent navigation.
    #[must_use]
    pub fn is_current(&self, token: NavigationToken) -> bool {
        self.latest.load(Ordering::Relaxed) == token.0
    }

    /// Hand back `value` only if `token` is still current.
    pub fn settle<T>(&self, token: NavigationToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            log::debug!("dropping stale guard result for navigation {}", token.0);
            None
        }
    }
}
