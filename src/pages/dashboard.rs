//! Dashboard Section
//!
//! Aggregate activity and participation numbers, loaded once on startup.

use leptos::*;

use crate::components::SectionContainer;
use crate::state::{use_app_state, LoadState, Section};

/// Dashboard section component
#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_app_state().dashboard;

    view! {
        <SectionContainer section=Section::Dashboard>
            <h3>"Dashboard"</h3>
            <p id="dashboard-total">
                {move || dashboard.with(|d| match d {
                    LoadState::Loading => "Loading dashboard...".to_string(),
                    LoadState::Loaded(summary) => {
                        format!("Total Activities: {}", summary.total_activities)
                    }
                    LoadState::Failed => "Failed to load dashboard.".to_string(),
                })}
            </p>
            <p id="dashboard-participants">
                {move || dashboard.with(|d| match d {
                    LoadState::Loaded(summary) => {
                        format!("Total Participants: {}", summary.total_participants)
                    }
                    _ => String::new(),
                })}
            </p>
            <div id="dashboard-activity-list">
                {move || dashboard.with(|d| match d {
                    LoadState::Loaded(summary) => view! {
                        <h4>"Activities Overview"</h4>
                        <ul>
                            {summary.activity_stats.iter().map(|stat| view! {
                                <li>
                                    <strong>{stat.name.clone()}</strong>
                                    ": "
                                    {stat.summary_line()}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                    _ => view! {}.into_view(),
                })}
            </div>
        </SectionContainer>
    }
}
