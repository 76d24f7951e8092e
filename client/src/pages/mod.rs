//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages never decide whether they may render; the `AuthGuard` around the
//! router has already done that by the time a page mounts.

pub mod login;
pub mod portal;
