//! Activities Section
//!
//! Activity cards with their participants. Removal buttons are handled by a
//! single listener on the list container that reads the clicked button's
//! `data-activity` and `data-email` attributes.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::{EmptyPlaceholder, SectionContainer};
use crate::state::models::{Activity, Participant};
use crate::state::{use_app_state, LoadState, Section};

/// Activities section component
#[component]
pub fn Activities() -> impl IntoView {
    let state = use_app_state();
    let activities = state.activities;

    let on_list_click = move |ev: web_sys::MouseEvent| {
        if let Some((activity, email)) = removal_target(&ev) {
            state.unregister(activity, email);
        }
    };

    view! {
        <SectionContainer section=Section::Activities>
            <h3>"Available Activities"</h3>
            <div id="activities-list" on:click=on_list_click>
                {move || activities.with(|a| match a {
                    LoadState::Loading => view! { <p>"Loading activities..."</p> }.into_view(),
                    LoadState::Failed => view! {
                        <p>"Failed to load activities. Please try again later."</p>
                    }.into_view(),
                    LoadState::Loaded(catalog) => catalog.0.iter()
                        .map(|(name, activity)| view! {
                            <ActivityCard name=name.clone() activity=activity.clone() />
                        })
                        .collect_view(),
                })}
            </div>
        </SectionContainer>
    }
}

/// Activity and email of the removal button under the click, if any
fn removal_target(ev: &web_sys::MouseEvent) -> Option<(String, String)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest(".delete-btn").ok()??;
    let activity = button.get_attribute("data-activity")?;
    let email = button.get_attribute("data-email")?;
    Some((activity, email))
}

#[component]
fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let availability = activity.availability();

    let participants = if activity.participants.is_empty() {
        view! { <EmptyPlaceholder text="No participants yet" /> }.into_view()
    } else {
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {activity.participants.iter().map(|p| view! {
                        <ParticipantRow activity=name.clone() participant=p.clone() />
                    }).collect_view()}
                </ul>
            </div>
        }.into_view()
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description}</p>
            <p><strong>"Schedule:"</strong>" "{activity.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants-container">
                {participants}
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(activity: String, participant: Participant) -> impl IntoView {
    let Participant { email, name, grade } = participant;
    let email_label = email.clone();

    view! {
        <li>
            <span class="participant-email">{email_label}</span>
            " "
            <span class="participant-name">{name.unwrap_or_default()}</span>
            " "
            <span class="participant-grade">{grade.unwrap_or_default()}</span>
            " "
            <button
                class="delete-btn"
                type="button"
                data-activity=activity
                data-email=email
                title="Unregister"
            >
                "❌"
            </button>
        </li>
    }
}
