//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route for signed-out users. Owns the per-form attempt counter and
//! hands each submit to [`submit_login`]; on success the session is already
//! committed when the page navigates to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::login::LoginAttemptState;
use crate::state::session::SessionContext;
use crate::util::guard::SIGNUP_PATH;
use crate::util::liveness;

#[cfg(feature = "csr")]
use super::login_submit::{LoginDeps, LoginOutcome, submit_login};

/// Button copy for the current submit state.
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing In..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let sessions = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let liveness = liveness::scoped();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let attempts = RwSignal::new(LoginAttemptState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let raw_email = email.get_untracked();
        let raw_password = password.get_untracked();

        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::HttpAuthApi::new(&config.auth_api_url);
            let policy = config.throttle;
            let sessions = sessions.clone();
            let liveness = liveness.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let deps = LoginDeps {
                    api: &api,
                    pause: &crate::util::pause::TimerPause,
                    sessions: &sessions,
                    liveness: &liveness,
                    policy,
                };
                let outcome = submit_login(&deps, &attempts, &raw_email, &raw_password).await;
                if outcome == LoginOutcome::SignedIn {
                    navigate(crate::util::guard::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                } else if let Some(message) = outcome.message() {
                    error.set(Some(message));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (raw_email, raw_password, &config, &sessions, &liveness, &navigate);
        }
    };

    view! {
        <Title text="Sign In"/>
        <div class="login-container">
            <h2>"Login"</h2>
            <form on:submit=on_submit autocomplete="off">
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" disabled=move || attempts.get().submitting>
                    {move || submit_label(attempts.get().submitting)}
                </button>
            </form>
            <p class="signup-link">
                "Don't have an account? "
                <A href=SIGNUP_PATH>"Sign up here"</A>
            </p>
        </div>
    }
}
