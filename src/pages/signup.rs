//! Account registration page.
//!
//! Collects email, password (twice) and a favorite team, registers through
//! [`submit_signup`], then sends the user to `/login` after a short banner.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::util::guard::LOGIN_PATH;
use crate::util::liveness;
use crate::util::teams::team_names;

#[cfg(feature = "csr")]
use super::signup_submit::{SIGNUP_SUCCESS_MESSAGE, SignupOutcome, hold_before_redirect, submit_signup};

/// Placeholder row of the team picker; its empty value fails validation.
pub const TEAM_PLACEHOLDER: &str = "Select your favorite team";

/// `(value, label)` rows for the team picker, placeholder first.
pub fn team_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", TEAM_PLACEHOLDER))
        .chain(team_names().map(|name| (name, name)))
        .collect()
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let liveness = liveness::scoped();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let team = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);
        busy.set(true);
        let raw = (
            email.get_untracked(),
            password.get_untracked(),
            confirm_password.get_untracked(),
            team.get_untracked(),
        );

        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::HttpAuthApi::new(&config.auth_api_url);
            let redirect_delay = config.signup_redirect_delay;
            let liveness = liveness.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let (raw_email, raw_password, raw_confirm, raw_team) = raw;
                let outcome = submit_signup(&api, &liveness, &raw_email, &raw_password, &raw_confirm, &raw_team).await;
                match outcome {
                    SignupOutcome::Registered => {
                        success.set(Some(SIGNUP_SUCCESS_MESSAGE.to_owned()));
                        let pause = crate::util::pause::TimerPause;
                        if hold_before_redirect(&pause, &liveness, redirect_delay).await {
                            navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                        }
                    }
                    SignupOutcome::Abandoned => {}
                    failed => {
                        error.set(failed.message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (raw, &config, &liveness, &navigate);
            busy.set(false);
        }
    };

    view! {
        <Title text="Sign Up"/>
        <div class="signup-container">
            <h2>"Sign Up"</h2>
            <form on:submit=on_submit>
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
                <input
                    type="password"
                    placeholder="Confirm Password"
                    required=true
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || team.get()
                    on:change=move |ev| team.set(event_target_value(&ev))
                >
                    {team_options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <p class="login-link">
                "Already have an account? "
                <A href=LOGIN_PATH>"Sign in"</A>
            </p>
        </div>
    }
}
