//! Sign-out control shared by protected views.
//!
//! Clearing the session is synchronous, so the redirect that follows can never
//! observe a stale token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::util::guard::{LOGIN_PATH, replace_history};

#[component]
pub fn SignOutButton() -> impl IntoView {
    let sessions = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        sessions.clear();
        leptos::logging::log!("signed out");
        navigate(LOGIN_PATH, replace_history());
    };

    view! {
        <button class="sign-out-button" on:click=on_sign_out>
            "Sign Out"
        </button>
    }
}
