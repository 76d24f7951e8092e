//! Role-based session gating shared by the portal client and server.
//!
//! This crate owns the browser-free core of the app: the closed set of role
//! tags and their landing paths, the session record persisted in a single
//! durable slot, and the guard that decides render-vs-redirect for every
//! navigation. The `client` crate plugs a `localStorage` slot into it; tests
//! and the server use [`MemorySlot`].
//!
//! DESIGN
//! ======
//! Storage is an injected capability ([`SlotStorage`]) rather than an ambient
//! global, and the stored payload is validated into [`SessionState`] at the
//! store boundary, so guard evaluation is a pure function of
//! `(path, SessionState)`.

pub mod guard;
pub mod path;
pub mod role;
pub mod sequence;
pub mod session;

pub use guard::{Guard, GuardDecision, GuardPhase, evaluate, evaluate_loaded};
pub use path::{AUTH_PREFIX, PathClass, SIGN_IN_PATH, classify, same_location};
pub use role::{RoleTag, resolve};
pub use sequence::{NavigationSequencer, NavigationToken};
pub use session::{
    Identity, MemorySlot, SESSION_SLOT_KEY, SessionError, SessionRecord, SessionState, SessionStore, SlotStorage,
};
