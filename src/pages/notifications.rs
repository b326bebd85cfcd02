//! Notification Sections

use leptos::*;

use crate::api;
use crate::components::{EmptyPlaceholder, ErrorBlock, SectionContainer, StatusMessage};
use crate::state::global::log_error;
use crate::state::models::Notification;
use crate::state::{use_app_state, Lookup, Section, Status};

/// Send a notification to one student
#[component]
pub fn NotificationSend() -> impl IntoView {
    let state = use_app_state();

    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (user_email, set_user_email) = create_signal(String::new());
    let status = create_rw_signal(None::<Status>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let (email, message, user_email) = (email.get(), message.get(), user_email.get());
        spawn_local(async move {
            let result = api::send_notification(&base, &email, &message, &user_email).await;
            if let Err(e) = &result {
                log_error("sending notification", e);
            }
            status.set(Some(Status::from_result(&result, "Failed to send notification.")));
        });
    };

    view! {
        <SectionContainer section=Section::NotificationSend>
            <h3>"Send Notification"</h3>
            <form id="notification-send-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="notification-email">"Student Email:"</label>
                    <input
                        type="email"
                        id="notification-email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="notification-message">"Message:"</label>
                    <textarea
                        id="notification-message"
                        required=true
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="notification-user-email">"Your Email (teacher/admin):"</label>
                    <input
                        type="email"
                        id="notification-user-email"
                        required=true
                        prop:value=move || user_email.get()
                        on:input=move |ev| set_user_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"Send"</button>
            </form>
            <StatusMessage id="notification-send-message" status=status />
        </SectionContainer>
    }
}

/// List the notifications sent to one student
#[component]
pub fn NotificationHistory() -> impl IntoView {
    let state = use_app_state();

    let (email, set_email) = create_signal(String::new());
    let result = create_rw_signal(Lookup::<Vec<Notification>>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let email = email.get();
        spawn_local(async move {
            let response = api::fetch_notifications(&base, &email).await;
            if let Err(e) = &response {
                log_error("fetching notifications", e);
            }
            result.set(Lookup::from_result(
                response,
                "Error fetching notifications.",
                "Failed to fetch notifications.",
            ));
        });
    };

    view! {
        <SectionContainer section=Section::NotificationHistory>
            <h3>"Notification History"</h3>
            <form id="notification-history-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="notification-history-email">"Student Email:"</label>
                    <input
                        type="email"
                        id="notification-history-email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"View Notifications"</button>
            </form>
            <NotificationList result=result />
        </SectionContainer>
    }
}

/// Result panel of the notification history lookup
#[component]
fn NotificationList(#[prop(into)] result: Signal<Lookup<Vec<Notification>>>) -> impl IntoView {
    view! {
        <div id="notification-history-result">
            {move || result.with(|r| match r {
                Lookup::Idle => view! {}.into_view(),
                Lookup::Found(notes) if notes.is_empty() => view! {
                    <EmptyPlaceholder text="No notifications found." />
                }.into_view(),
                Lookup::Found(notes) => view! {
                    <ul>
                        {notes.iter()
                            .map(|n| view! { <li>{n.summary_line()}</li> })
                            .collect_view()}
                    </ul>
                }.into_view(),
                Lookup::Failed(message) => view! {
                    <ErrorBlock message=message.clone() />
                }.into_view(),
            })}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::testing::mount_in_container;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn empty_history_shows_placeholder() {
        let container = mount_in_container(|| {
            let result = create_rw_signal(Lookup::Found(Vec::<Notification>::new()));
            view! { <NotificationList result=result /> }
        });

        let text = container.text_content().unwrap_or_default();
        assert!(text.contains("No notifications found."));
        assert!(container.query_selector("ul").unwrap().is_none());
        assert!(container.query_selector("em").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn history_lists_one_item_per_notification() {
        let container = mount_in_container(|| {
            let result = create_rw_signal(Lookup::Found(vec![
                Notification { message: "Practice moved".into(), sent: true },
                Notification { message: "Bring a racket".into(), sent: false },
            ]));
            view! { <NotificationList result=result /> }
        });

        assert_eq!(container.inner_html().matches("<li>").count(), 2);
        let text = container.text_content().unwrap_or_default();
        assert!(text.contains("Practice moved (Sent)"));
        assert!(text.contains("Bring a racket (Not sent)"));
    }

    #[wasm_bindgen_test]
    fn failed_history_shows_error_block() {
        let container = mount_in_container(|| {
            let result = create_rw_signal(Lookup::<Vec<Notification>>::Failed(
                "Failed to fetch notifications.".into(),
            ));
            view! { <NotificationList result=result /> }
        });

        let error = container.query_selector(".error").unwrap().expect("error block");
        assert_eq!(error.text_content().unwrap_or_default(), "Failed to fetch notifications.");
    }
}
