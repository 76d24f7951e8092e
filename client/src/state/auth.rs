//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root `App`. Written by the
//! sign-in/sign-out helpers in `util::auth`; read by the route guard (as a
//! re-check trigger) and by portal pages (for identity display).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use guards::{SessionRecord, SessionState};

/// Current session as last read from the durable slot.
///
/// `loading` stays `true` until the slot has been read once in the browser;
/// during SSR it never flips. The route guard runs no check while it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionState::Absent, loading: true }
    }
}

impl AuthState {
    /// State after reading the slot.
    #[must_use]
    pub fn loaded(session: SessionState) -> Self {
        Self { session, loading: false }
    }

    /// The active session record, if the slot held a valid one.
    #[must_use]
    pub fn record(&self) -> Option<&SessionRecord> {
        self.session.record()
    }
}
