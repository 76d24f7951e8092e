//! Navigation guard: render-vs-redirect for a path and a session.
//!
//! DESIGN
//! ======
//! Each navigation starts in [`GuardPhase::Checking`] and settles on one
//! [`GuardDecision`]. Rules, first match wins:
//!
//! 1. no session, non-auth path → redirect to sign-in
//! 2. no session, auth path → allow
//! 3. unrecognized role → redirect to sign-in
//! 4. valid role, auth path or root → redirect to the role's landing path
//! 5. valid role, protected path → allow
//!
//! Nothing is cached between navigations; [`Guard::check`] reloads the slot
//! every time.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::path::{PathClass, SIGN_IN_PATH, classify, same_location};
use crate::session::{SessionError, SessionState, SessionStore, SlotStorage};

/// Outcome of a settled guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Navigation to issue when the decision is applied on `current`.
    ///
    /// A redirect to the location already shown is a no-op, which keeps an
    /// invalid session parked on the sign-in page instead of looping.
    #[must_use]
    pub fn navigation_from(self, current: &str) -> Option<&'static str> {
        match self {
            Self::Redirect(target) if !same_location(current, target) => Some(target),
            Self::Redirect(_) | Self::Allow => None,
        }
    }
}

/// Per-navigation guard state. Only `Settled(Allow)` renders guarded content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Checking,
    Settled(GuardDecision),
}

impl GuardPhase {
    #[must_use]
    pub fn renders_children(self) -> bool {
        matches!(self, Self::Settled(GuardDecision::Allow))
    }
}

/// Decide what to do with `path` for an already validated session.
#[must_use]
pub fn evaluate(path: &str, session: &SessionState) -> GuardDecision {
    match (session, classify(path)) {
        (SessionState::Absent, PathClass::Auth) => GuardDecision::Allow,
        (SessionState::Absent | SessionState::Unrecognized(_), _) => GuardDecision::Redirect(SIGN_IN_PATH),
        (SessionState::Active(record), PathClass::Auth | PathClass::Root) => {
            GuardDecision::Redirect(record.role.landing_path())
        }
        (SessionState::Active(_), PathClass::Protected) => GuardDecision::Allow,
    }
}

/// Like [`evaluate`], but a failed session load counts as no session.
#[must_use]
pub fn evaluate_loaded(path: &str, loaded: Result<SessionState, SessionError>) -> GuardDecision {
    match loaded {
        Ok(session) => evaluate(path, &session),
        Err(e) => {
            log::warn!("session load failed while guarding {path:?}: {e}");
            evaluate(path, &SessionState::Absent)
        }
    }
}

/// Guard bound to a session store.
#[derive(Clone, Debug)]
pub struct Guard<S> {
    store: SessionStore<S>,
}

impl<S: SlotStorage> Guard<S> {
    #[must_use]
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store }
    }

    /// Reload the session slot and decide for `path`.
    pub fn check(&self, path: &str) -> GuardDecision {
        let decision = evaluate_loaded(path, self.store.load());
        log::debug!("guard {path:?} -> {decision:?}");
        decision
    }
}
