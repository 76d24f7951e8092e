//! Portal landing page shared by every role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under each role's portal prefix. Dashboard widgets plug in below
//! the header; this page only owns identity display, the link back to the
//! viewer's own portal, and sign-out.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use ::guards::{RoleTag, SessionRecord};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn PortalPage(role: RoleTag) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| {
        if let Err(e) = sign_out(auth) {
            leptos::logging::warn!("sign-out failed: {e}");
        }
    };

    view! {
        <div class="portal-page">
            <header class="portal-page__header">
                <h1>{format!("{} Portal", role.label())}</h1>
                <span class="portal-page__user">{move || viewer_name(auth.get().record())}</span>
                <button class="btn" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            {move || {
                home_portal(auth.get().record(), role)
                    .map(|home| {
                        view! {
                            <p class="portal-page__notice">
                                "You are viewing another portal. "
                                <a href=home>"Back to your dashboard"</a>
                            </p>
                        }
                    })
            }}
            <section class="portal-page__content">
                <h2>"Dashboard"</h2>
            </section>
        </div>
    }
}

fn viewer_name(record: Option<&SessionRecord>) -> String {
    record
        .and_then(SessionRecord::display_name)
        .unwrap_or("Guest")
        .to_owned()
}

/// Landing path of the viewer's own portal, when it differs from `shown`.
fn home_portal(record: Option<&SessionRecord>, shown: RoleTag) -> Option<&'static str> {
    record
        .map(|r| r.role)
        .filter(|own| *own != shown)
        .map(RoleTag::landing_path)
}
