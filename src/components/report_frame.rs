//! Embedded analytics report.

use leptos::prelude::*;

/// Sandbox flags for third-party report embeds.
pub const REPORT_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

#[component]
pub fn ReportFrame(#[prop(into)] title: String, src: &'static str) -> impl IntoView {
    view! {
        <div class="iframe-wrapper">
            <iframe
                title=title
                src=src
                sandbox=REPORT_SANDBOX
                allowfullscreen=true
            ></iframe>
        </div>
    }
}
