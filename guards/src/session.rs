//! Session record persistence over a single durable slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! A sign-in action writes a [`SessionRecord`] into the slot named
//! [`SESSION_SLOT_KEY`]; the guard reads it back on every navigation and a
//! sign-out clears it. The slot itself is a [`SlotStorage`] capability so the
//! browser `localStorage` can be swapped for [`MemorySlot`] in tests.
//!
//! ERROR HANDLING
//! ==============
//! [`SessionStore::load`] reports storage and payload errors to callers that
//! want them (the guard). [`SessionStore::read`] swallows them, logs, and
//! reports [`SessionState::Absent`], so UI code never has to branch on a
//! broken slot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::role::RoleTag;

/// Name of the durable slot holding the serialized session record.
pub const SESSION_SLOT_KEY: &str = "user";

/// Errors raised while reading or writing the session slot.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing store refused the operation (quota, privacy mode, no window).
    #[error("session storage unavailable: {0}")]
    Storage(String),
    /// The stored payload is not a JSON session object.
    #[error("malformed session payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// SLOT STORAGE
// =============================================================================

/// Key-value capability backing the session slot.
pub trait SlotStorage {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key` entirely. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store is unavailable.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// In-process slot storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage("memory slot lock poisoned".to_owned()))
    }
}

impl SlotStorage for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

// =============================================================================
// SESSION RECORD
// =============================================================================

/// Who is signed in: either an opaque handle or an email/username pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Handle(String),
    Profile {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
}

impl Identity {
    /// Best name to show in portal chrome, if the identity has one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let candidates = match self {
            Self::Handle(handle) => [Some(handle), None],
            Self::Profile { email, username } => [username.as_ref(), email.as_ref()],
        };
        candidates.into_iter().flatten().map(|n| n.trim()).find(|n| !n.is_empty())
    }
}

/// A validated session: a known role, plus the identity when one was stored.
///
/// Routing looks at the role only. Records written by this app always carry
/// an identity, but a slot seeded by hand or by an older build may not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub role: RoleTag,
}

impl SessionRecord {
    #[must_use]
    pub fn new(identity: Identity, role: RoleTag) -> Self {
        Self { identity: Some(identity), role }
    }

    /// Record for a role with no known identity.
    #[must_use]
    pub fn anonymous(role: RoleTag) -> Self {
        Self { identity: None, role }
    }

    /// Name to show for this session, if the identity has one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.identity.as_ref().and_then(Identity::display_name)
    }
}

/// Raw slot payload before validation. Older sign-in flows stored the email
/// or username at the top level instead of under `identity`.
#[derive(Deserialize)]
struct StoredSession {
    #[serde(default)]
    identity: Option<Identity>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<Value>,
}

/// Session as seen by routing, after boundary validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing usable in the slot.
    #[default]
    Absent,
    /// A record whose role is missing or outside the closed set.
    Unrecognized(String),
    /// A well-typed record.
    Active(SessionRecord),
}

impl SessionState {
    /// Validate a raw slot payload.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] for non-JSON or wrongly shaped
    /// payloads. A missing or unknown role is not an error; it yields
    /// [`SessionState::Unrecognized`]. A blank or missing identity is dropped.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        let stored: StoredSession = serde_json::from_str(raw)?;

        let identity = stored
            .identity
            .or_else(|| {
                (stored.email.is_some() || stored.username.is_some()).then(|| Identity::Profile {
                    email: stored.email,
                    username: stored.username,
                })
            })
            .filter(|identity| identity.display_name().is_some());

        let raw_role = match stored.role {
            Some(Value::String(role)) => role,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Ok(match RoleTag::parse(&raw_role) {
            Some(role) => Self::Active(SessionRecord { identity, role }),
            None => Self::Unrecognized(raw_role),
        })
    }

    /// The validated record, when the session is active.
    #[must_use]
    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            Self::Active(record) => Some(record),
            Self::Absent | Self::Unrecognized(_) => None,
        }
    }

    /// Role of an active session.
    #[must_use]
    pub fn role(&self) -> Option<RoleTag> {
        self.record().map(|record| record.role)
    }

    /// Whether anything was stored, valid or not.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Reads and writes the session record in one slot of a [`SlotStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    slot: S,
    key: &'static str,
}

impl<S: SlotStorage> SessionStore<S> {
    /// Store bound to the default [`SESSION_SLOT_KEY`].
    #[must_use]
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, SESSION_SLOT_KEY)
    }

    #[must_use]
    pub fn with_key(slot: S, key: &'static str) -> Self {
        Self { slot, key }
    }

    /// Load and validate the slot contents.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and payload validation errors.
    pub fn load(&self) -> Result<SessionState, SessionError> {
        match self.slot.get(self.key)? {
            None => Ok(SessionState::Absent),
            Some(raw) => SessionState::parse(&raw),
        }
    }

    /// Load the slot, degrading every failure to [`SessionState::Absent`].
    pub fn read(&self) -> SessionState {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("discarding session slot {:?}: {e}", self.key);
                SessionState::Absent
            }
        }
    }

    /// Serialize `record` into the slot, overwriting any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the slot rejects the write.
    pub fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        self.slot.set(self.key, &raw)
    }

    /// Remove the slot entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store is unavailable.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.slot.remove(self.key)
    }

    /// Key of the slot this store owns.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }
}
