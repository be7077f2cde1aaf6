//! Session persistence and context wiring
//!
//! The credential is kept in one localStorage entry so a reload survives
//! the session. Storage is read exactly once, when the app constructs the
//! session context; every consumer afterwards goes through the injected
//! signal rather than ambient storage.

use dioxus::prelude::*;
use tracing::info;
use tunedex_ui::stores::AdminSession;

const STORAGE_KEY: &str = "tunedex_admin_api_key";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Rebuild the session from storage at app construction.
pub fn load_session() -> Option<AdminSession> {
    let stored = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    AdminSession::new(&stored)
}

/// Persist the credential and publish the session into context.
pub fn login(mut session: Signal<Option<AdminSession>>, new_session: AdminSession) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, new_session.api_key());
    }
    info!("admin session created");
    session.set(Some(new_session));
}

/// Remove the credential and tear the session down.
pub fn logout(mut session: Signal<Option<AdminSession>>) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
    info!("admin session destroyed");
    session.set(None);
}
