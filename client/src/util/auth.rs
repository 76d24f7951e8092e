//! Session holder helpers: read, sign in, sign out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every write to the slot is followed by a refresh of the `AuthState`
//! signal. The route guard tracks that signal, so signing in or out triggers a
//! fresh guard check, which issues the redirect.

use ::guards::{SessionError, SessionRecord};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::storage::session_store;

/// Re-read the slot into `auth`.
pub fn refresh(auth: RwSignal<AuthState>) {
    auth.set(AuthState::loaded(session_store().read()));
}

/// Read the slot once the app is mounted in the browser.
pub fn install_session_loader(auth: RwSignal<AuthState>) {
    Effect::new(move || refresh(auth));
}

/// Persist `record` as the current session.
///
/// # Errors
///
/// Returns the storage error if the slot rejects the write; `auth` is left
/// untouched in that case.
pub fn sign_in(auth: RwSignal<AuthState>, record: &SessionRecord) -> Result<(), SessionError> {
    session_store().write(record)?;
    refresh(auth);
    Ok(())
}

/// Destroy the current session.
///
/// # Errors
///
/// Returns the storage error if the slot cannot be removed.
pub fn sign_out(auth: RwSignal<AuthState>) -> Result<(), SessionError> {
    session_store().clear()?;
    refresh(auth);
    Ok(())
}
