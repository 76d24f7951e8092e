//! Root application component with routing and context providers.

use ::guards::RoleTag;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::loading::LoadingScreen;
use crate::pages::{login::LoginPage, portal::PortalPage};
use crate::state::auth::AuthState;
use crate::util::auth::install_session_loader;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and wraps every route in the guard. The root
/// path has no page of its own; the guard always redirects away from it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    install_session_loader(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/portals.css"/>
        <Title text="Portals"/>

        <Router>
            <AuthGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoadingScreen/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route
                        path=(StaticSegment("admin-portal"), StaticSegment("dashboard"))
                        view=|| view! { <PortalPage role=RoleTag::Admin/> }
                    />
                    <Route
                        path=(StaticSegment("alliance-portal"), StaticSegment("dashboard"))
                        view=|| view! { <PortalPage role=RoleTag::CooperativeMember/> }
                    />
                    <Route
                        path=(StaticSegment("farmer-portal"), StaticSegment("dashboard"))
                        view=|| view! { <PortalPage role=RoleTag::LargeScaleFarmer/> }
                    />
                    <Route
                        path=(StaticSegment("trader-portal"), StaticSegment("dashboard"))
                        view=|| view! { <PortalPage role=RoleTag::WholesaleTrader/> }
                    />
                    <Route
                        path=(StaticSegment("retail-portal"), StaticSegment("dashboard"))
                        view=|| view! { <PortalPage role=RoleTag::RetailClient/> }
                    />
                </Routes>
            </AuthGuard>
        </Router>
    }
}
