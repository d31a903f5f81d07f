//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage, team::TeamPage};
use crate::state::session::{BrowserStorage, SessionStore};
use crate::util::guard::{LOGIN_PATH, ProfileProps, RequireSession, replace_history};

/// Root application component.
///
/// Provides the build-time config and the browser-backed session store, then
/// routes `/login` and `/signup` openly and `/dashboard` and `/team` through
/// [`RequireSession`]. Any other path lands on `/login`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    leptos::logging::log!("auth service at {}", config.auth_api_url);
    provide_context(config);
    provide_context(SessionStore::new(BrowserStorage));

    view! {
        <Title text="Courtside"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH options=replace_history()/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <RequireSession render=|profile: ProfileProps| view! {
                            <DashboardPage favorite_team=profile.favorite_team/>
                        }/>
                    }
                />
                <Route
                    path=StaticSegment("team")
                    view=|| view! {
                        <RequireSession render=|profile: ProfileProps| view! {
                            <TeamPage favorite_team=profile.favorite_team/>
                        }/>
                    }
                />
            </Routes>
        </Router>
    }
}
