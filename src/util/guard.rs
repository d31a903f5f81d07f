//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through [`RequireSession`]. It reads the
//! persisted session once per navigation: without a token the navigation is
//! replaced by `/login` and the protected view is never constructed; with one,
//! the view is built from [`ProfileProps`].
//!
//! DESIGN
//! ======
//! The decision is a plain function over [`SessionStore`] so it can be tested
//! without a router. No network call, no suspension.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::session::{KeyValueStore, SessionContext, SessionStore, UserProfile};
use crate::util::teams::DEFAULT_TEAM;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const TEAM_PATH: &str = "/team";

/// Profile fields supplied to every protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileProps {
    /// Stored favorite team, or [`DEFAULT_TEAM`] when none is stored.
    pub favorite_team: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    RedirectToLogin,
    Render(ProfileProps),
}

/// Decide what a protected navigation shows.
pub fn evaluate<S: KeyValueStore>(sessions: &SessionStore<S>) -> GuardDecision {
    let Some(session) = sessions.current() else {
        return GuardDecision::RedirectToLogin;
    };
    let favorite_team = session
        .profile
        .as_ref()
        .and_then(UserProfile::favorite_team)
        .unwrap_or(DEFAULT_TEAM)
        .to_owned();
    GuardDecision::Render(ProfileProps { favorite_team })
}

/// Build the protected view only when the guard allows it.
pub fn render_guarded<S, R>(sessions: &SessionStore<S>, render: impl FnOnce(ProfileProps) -> R) -> Option<R>
where
    S: KeyValueStore,
{
    match evaluate(sessions) {
        GuardDecision::Render(props) => Some(render(props)),
        GuardDecision::RedirectToLogin => None,
    }
}

/// Navigation options for guard redirects: replace the history entry so
/// "back" cannot return to the guarded page.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `render(profile)` for signed-in users, redirect everyone else.
#[component]
pub fn RequireSession<F, V>(render: F) -> impl IntoView
where
    F: Fn(ProfileProps) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let sessions = expect_context::<SessionContext>();
    render_guarded(&sessions, |props| render(props).into_any()).unwrap_or_else(|| {
        leptos::logging::log!("no session; redirecting to {LOGIN_PATH}");
        view! { <Redirect path=LOGIN_PATH options=replace_history()/> }.into_any()
    })
}
