//! Route guard wrapping every page of the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits inside the `<Router>` and around `<Routes>`. On every path change (and
//! every `AuthState` refresh) it starts a new navigation token, drops back to
//! the loading placeholder, and defers the actual check to the next tick so
//! the slot read sees any write made during the triggering render. Only the
//! newest token's result is applied. Until the session loader has read the
//! slot once, the guard stays in `Checking` and runs no check.
//!
//! TRADE-OFFS
//! ==========
//! Children unmount while a check is pending, so pages re-mount on each
//! navigation. Pages keep no state worth preserving across that.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use ::guards::{Guard, GuardDecision, GuardPhase, NavigationSequencer, NavigationToken, SessionState};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::storage::session_store;

/// Render `children` only when the guard allows the current path.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let phase = RwSignal::new(GuardPhase::Checking);
    let stalled = RwSignal::new(false);
    let sequencer = NavigationSequencer::new();

    Effect::new(move || {
        let path = location.pathname.get();
        let loading = auth.with(|state| state.loading);

        let token = sequencer.begin();
        phase.set(GuardPhase::Checking);
        stalled.set(false);
        if loading {
            return;
        }

        let sequencer = sequencer.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            next_tick().await;
            let decision = Guard::new(session_store()).check(&path);
            let Some(outcome) = settle_check(&sequencer, token, decision, &path) else {
                return;
            };
            if let Some(target) = outcome.navigate_to {
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            stalled.set(outcome.stalled);
            phase.set(outcome.phase);
        });
    });

    let on_reset = move |_| {
        if let Err(e) = sign_out(auth) {
            leptos::logging::warn!("sign-out failed: {e}");
        }
    };

    view! {
        <Show
            when=move || phase.get().renders_children()
            fallback=move || {
                view! {
                    <LoadingScreen/>
                    <Show when=move || stalled.get() && matches!(auth.get().session, SessionState::Unrecognized(_))>
                        <div class="loading-screen__recover">
                            <p>"Your saved session is no longer valid."</p>
                            <button class="btn btn--primary" on:click=on_reset>
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// What a finished check applies to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CheckOutcome {
    navigate_to: Option<&'static str>,
    phase: GuardPhase,
    stalled: bool,
}

/// Turn a finished check into its outcome, or `None` when a newer navigation
/// has started since `token` was taken.
fn settle_check(
    sequencer: &NavigationSequencer,
    token: NavigationToken,
    decision: GuardDecision,
    path: &str,
) -> Option<CheckOutcome> {
    let decision = sequencer.settle(token, decision)?;
    Some(CheckOutcome {
        navigate_to: decision.navigation_from(path),
        phase: GuardPhase::Settled(decision),
        stalled: is_stalled(decision, path),
    })
}

/// A redirect that issues no navigation leaves the placeholder up for good.
/// That only happens for an invalid session parked on the sign-in page.
fn is_stalled(decision: GuardDecision, path: &str) -> bool {
    !decision.is_allowed() && decision.navigation_from(path).is_none()
}

/// Yield to the event loop once before running a guard check.
async fn next_tick() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(0).await;
}
