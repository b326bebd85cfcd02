//! Waitlist Section
//!
//! Shows who is queued for a full activity. Teachers and admins can remove
//! entries; the list is re-fetched after each removal.

use leptos::*;

use crate::api;
use crate::components::{
    ActivitySelect, EmptyPlaceholder, ErrorBlock, SectionContainer, StatusMessage,
};
use crate::state::global::log_error;
use crate::state::models::WaitlistEntry;
use crate::state::{use_app_state, Lookup, Section, Status};

async fn load_waitlist(base: &str, activity: &str) -> Lookup<Vec<WaitlistEntry>> {
    let response = api::fetch_waitlist(base, activity).await;
    if let Err(e) = &response {
        log_error("fetching waitlist", e);
    }
    Lookup::from_result(response, "Error fetching waitlist.", "Failed to fetch waitlist.")
}

/// Waitlist section component
#[component]
pub fn Waitlist() -> impl IntoView {
    let state = use_app_state();
    let base = state.api_base();

    let (activity, set_activity) = create_signal(String::new());
    let (user_email, set_user_email) = create_signal(String::new());
    // Activity the current result belongs to
    let shown_activity = create_rw_signal(String::new());
    let result = create_rw_signal(Lookup::<Vec<WaitlistEntry>>::Idle);
    let status = create_rw_signal(None::<Status>);

    let base_for_submit = base.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = base_for_submit.clone();
        let activity = activity.get();
        shown_activity.set(activity.clone());
        status.set(None);
        spawn_local(async move {
            result.set(load_waitlist(&base, &activity).await);
        });
    };

    let remove = move |email: String| {
        let base = base.clone();
        let activity = shown_activity.get_untracked();
        let user_email = user_email.get_untracked();
        spawn_local(async move {
            let outcome = api::remove_from_waitlist(&base, &activity, &email, &user_email).await;
            if let Err(e) = &outcome {
                log_error("removing from waitlist", e);
            }
            status.set(Some(Status::from_result(&outcome, "Failed to remove from waitlist.")));
            if outcome.is_ok() {
                result.set(load_waitlist(&base, &activity).await);
            }
        });
    };
    let remove = store_value(remove);

    view! {
        <SectionContainer section=Section::Waitlist>
            <h3>"Activity Waitlist"</h3>
            <form id="waitlist-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="waitlist-activity">"Activity:"</label>
                    <ActivitySelect id="waitlist-activity" value=activity set_value=set_activity />
                </div>
                <div class="form-group">
                    <label for="waitlist-user-email">"Your Email (needed to remove):"</label>
                    <input
                        type="email"
                        id="waitlist-user-email"
                        prop:value=move || user_email.get()
                        on:input=move |ev| set_user_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"View Waitlist"</button>
            </form>
            <StatusMessage id="waitlist-message" status=status />
            <div id="waitlist-result">
                {move || result.with(|r| match r {
                    Lookup::Idle => view! {}.into_view(),
                    Lookup::Found(entries) if entries.is_empty() => view! {
                        <EmptyPlaceholder text="No students on the waitlist." />
                    }.into_view(),
                    Lookup::Found(entries) => view! {
                        <ul class="participants-list">
                            {entries.iter().cloned().map(|entry| {
                                let email = entry.email.clone();
                                view! {
                                    <li>
                                        <span class="participant-email">{entry.email}</span>
                                        " "
                                        <span class="participant-name">{entry.name.unwrap_or_default()}</span>
                                        " "
                                        <span class="participant-grade">{entry.grade.unwrap_or_default()}</span>
                                        " "
                                        <button
                                            class="delete-btn"
                                            type="button"
                                            title="Remove from waitlist"
                                            on:click=move |_| remove.with_value(|f| f(email.clone()))
                                        >
                                            "❌"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                    Lookup::Failed(message) => view! {
                        <ErrorBlock message=message.clone() />
                    }.into_view(),
                })}
            </div>
        </SectionContainer>
    }
}
