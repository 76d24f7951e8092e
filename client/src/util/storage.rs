//! Browser `localStorage` backing for the session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `guards` crate only sees the [`SlotStorage`] capability; this is the
//! one place that touches `web_sys::Storage`. Outside the browser (SSR,
//! native tests) the slot is permanently empty and writes are dropped, so the
//! guard renders its loading placeholder on the server.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use guards::{SessionError, SessionStore, SlotStorage};

/// Slot storage over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

/// Session store bound to the browser slot.
#[must_use]
pub fn session_store() -> SessionStore<LocalStorageSlot> {
    SessionStore::new(LocalStorageSlot)
}

#[cfg(feature = "hydrate")]
impl SlotStorage for LocalStorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(not(feature = "hydrate"))]
impl SlotStorage for LocalStorageSlot {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or_else(|| SessionError::Storage("no browser window".to_owned()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| SessionError::Storage("localStorage is disabled".to_owned()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> SessionError {
    SessionError::Storage(format!("{err:?}"))
}
