//! Standard loading placeholder shown while a guard check is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
