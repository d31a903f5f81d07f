//! League-wide dashboard, the landing view after sign-in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::report_frame::ReportFrame;
use crate::components::sign_out::SignOutButton;
use crate::util::guard::TEAM_PATH;
use crate::util::teams::{self, LEAGUE_REPORT_URL};

/// Label of the link to the user's team view.
pub fn team_link_label(favorite_team: Option<&str>) -> String {
    format!("View {} Dashboard", teams::resolve(favorite_team).name)
}

#[component]
pub fn DashboardPage(#[prop(optional)] favorite_team: Option<String>) -> impl IntoView {
    let link_label = team_link_label(favorite_team.as_deref());

    view! {
        <Title text="NBA 3-PT Analysis"/>
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h2>"NBA 3-PT Analysis Dashboard"</h2>
                <nav class="team-dashboard-link">
                    <A href=TEAM_PATH>{link_label}</A>
                </nav>
                <SignOutButton/>
            </div>
            <ReportFrame title="NBA 3-PT Analysis" src=LEAGUE_REPORT_URL/>
        </div>
    }
}
