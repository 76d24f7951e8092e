//! Reusable UI components.

pub mod auth_guard;
pub mod loading;
