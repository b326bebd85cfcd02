//! Attendance Sections
//!
//! Marking attendance for a session and reviewing a student's history.

use leptos::*;

use crate::api;
use crate::components::{
    ActivitySelect, EmptyPlaceholder, ErrorBlock, SectionContainer, StatusMessage,
};
use crate::state::global::log_error;
use crate::state::models::{parse_present_flag, AttendanceRecord};
use crate::state::{use_app_state, Lookup, Section, Status};

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Attendance marking section component
#[component]
pub fn AttendanceMark() -> impl IntoView {
    let state = use_app_state();

    let (activity, set_activity) = create_signal(String::new());
    let (student_email, set_student_email) = create_signal(String::new());
    let (date, set_date) = create_signal(today());
    let (present, set_present) = create_signal("true".to_string());
    let (user_email, set_user_email) = create_signal(String::new());
    let status = create_rw_signal(None::<Status>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let activity = activity.get();
        let student_email = student_email.get();
        let date = date.get();
        let present = parse_present_flag(&present.get());
        let user_email = user_email.get();

        spawn_local(async move {
            let result = api::mark_attendance(
                &base,
                &activity,
                &student_email,
                &date,
                present,
                &user_email,
            )
            .await;
            if let Err(e) = &result {
                log_error("marking attendance", e);
            }
            status.set(Some(Status::from_result(&result, "Failed to mark attendance.")));
        });
    };

    view! {
        <SectionContainer section=Section::AttendanceMark>
            <h3>"Mark Attendance"</h3>
            <form id="attendance-mark-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="attendance-activity">"Activity:"</label>
                    <ActivitySelect
                        id="attendance-activity"
                        value=activity
                        set_value=set_activity
                    />
                </div>
                <div class="form-group">
                    <label for="attendance-email">"Student Email:"</label>
                    <input
                        type="email"
                        id="attendance-email"
                        required=true
                        prop:value=move || student_email.get()
                        on:input=move |ev| set_student_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="attendance-date">"Date:"</label>
                    <input
                        type="date"
                        id="attendance-date"
                        required=true
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="attendance-present">"Present:"</label>
                    <select
                        id="attendance-present"
                        on:change=move |ev| set_present.set(event_target_value(&ev))
                        prop:value=move || present.get()
                    >
                        <option value="true">"Yes"</option>
                        <option value="false">"No"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="attendance-user-email">"Your Email (teacher/admin):"</label>
                    <input
                        type="email"
                        id="attendance-user-email"
                        required=true
                        prop:value=move || user_email.get()
                        on:input=move |ev| set_user_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"Mark Attendance"</button>
            </form>
            <StatusMessage id="attendance-mark-message" status=status />
        </SectionContainer>
    }
}

/// Attendance history section component
#[component]
pub fn AttendanceHistory() -> impl IntoView {
    let state = use_app_state();

    let (email, set_email) = create_signal(String::new());
    let (user_email, set_user_email) = create_signal(String::new());
    let result = create_rw_signal(Lookup::<Vec<AttendanceRecord>>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let (email, user_email) = (email.get(), user_email.get());
        spawn_local(async move {
            let response = api::fetch_attendance(&base, &email, &user_email).await;
            if let Err(e) = &response {
                log_error("fetching attendance", e);
            }
            result.set(Lookup::from_result(
                response,
                "Error fetching attendance.",
                "Failed to fetch attendance.",
            ));
        });
    };

    view! {
        <SectionContainer section=Section::AttendanceHistory>
            <h3>"Attendance History"</h3>
            <form id="attendance-history-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="attendance-history-email">"Student Email:"</label>
                    <input
                        type="email"
                        id="attendance-history-email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="attendance-history-user-email">"Your Email:"</label>
                    <input
                        type="email"
                        id="attendance-history-user-email"
                        required=true
                        prop:value=move || user_email.get()
                        on:input=move |ev| set_user_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"View Attendance"</button>
            </form>
            <div id="attendance-history-result">
                {move || result.with(|r| match r {
                    Lookup::Idle => view! {}.into_view(),
                    Lookup::Found(records) if records.is_empty() => view! {
                        <EmptyPlaceholder text="No attendance records found." />
                    }.into_view(),
                    Lookup::Found(records) => view! {
                        <ul>
                            {records.iter()
                                .map(|r| view! { <li>{r.summary_line()}</li> })
                                .collect_view()}
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
