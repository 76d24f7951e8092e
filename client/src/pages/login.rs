//! Sign-in page: identity plus portal role.
//!
//! There is no backend; signing in writes the session slot directly and the
//! route guard takes it from there, redirecting to the role's landing path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use ::guards::{Identity, RoleTag, SessionRecord};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_in;

const MISSING_IDENTITY: &str = "Enter your email or username.";
const MISSING_ROLE: &str = "Choose a portal.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let identity = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = match validate_sign_in(&identity.get(), &role.get()) {
            Ok(record) => record,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set("Signing in...".to_owned());
        if let Err(e) = sign_in(auth, &record) {
            leptos::logging::warn!("sign-in failed: {e}");
            info.set(format!("Sign-in failed: {e}"));
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portals"</h1>
                <p class="login-card__subtitle">"Claims & marketplace dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="you@example.com"
                        prop:value=move || identity.get()
                        on:input=move |ev| identity.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select a portal"</option>
                        {RoleTag::ALL
                            .into_iter()
                            .map(|tag| view! { <option value=tag.as_str()>{tag.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Required-field checks for the sign-in form.
fn validate_sign_in(identity: &str, role: &str) -> Result<SessionRecord, &'static str> {
    let identity = identity.trim();
    if identity.is_empty() {
        return Err(MISSING_IDENTITY);
    }
    let role = RoleTag::parse(role).ok_or(MISSING_ROLE)?;
    Ok(SessionRecord::new(identity_from_input(identity), role))
}

fn identity_from_input(input: &str) -> Identity {
    if input.contains('@') {
        Identity::Profile { email: Some(input.to_owned()), username: None }
    } else {
        Identity::Profile { email: None, username: Some(input.to_owned()) }
    }
}
