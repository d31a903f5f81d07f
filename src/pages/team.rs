//! Favorite-team report view.
//!
//! The profile team is resolved through [`teams::resolve`], so unknown or
//! missing teams land on the default report instead of a blank frame.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::report_frame::ReportFrame;
use crate::components::sign_out::SignOutButton;
use crate::util::guard::DASHBOARD_PATH;
use crate::util::teams;

/// Everything the team view shows, derived from the profile team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamView {
    pub team: &'static str,
    pub heading: String,
    pub frame_title: String,
    pub report_url: &'static str,
}

pub fn team_view(favorite_team: Option<&str>) -> TeamView {
    let report = teams::resolve(favorite_team);
    TeamView {
        team: report.name,
        heading: format!("{} 3-PT Analysis Dashboard", report.name),
        frame_title: format!("{} 3-PT Analysis", report.name),
        report_url: report.report_url,
    }
}

#[component]
pub fn TeamPage(#[prop(optional)] favorite_team: Option<String>) -> impl IntoView {
    let view_model = team_view(favorite_team.as_deref());
    leptos::logging::log!(
        "team view: requested={:?} resolved={}",
        favorite_team,
        view_model.team
    );
    let TeamView { heading, frame_title, report_url, .. } = view_model;

    view! {
        <Title text=frame_title.clone()/>
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h2>{heading}</h2>
                <nav class="nba-dashboard-link">
                    <A href=DASHBOARD_PATH>"View Full NBA Dashboard"</A>
                </nav>
                <SignOutButton/>
            </div>
            <ReportFrame title=frame_title src=report_url/>
        </div>
    }
}
