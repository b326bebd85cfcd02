//! Student Profile Section
//!
//! Profile lookup by email, plus a form to create or update a profile.

use leptos::*;

use crate::api;
use crate::components::{EmptyPlaceholder, ErrorBlock, SectionContainer, StatusMessage};
use crate::state::global::log_error;
use crate::state::models::{SavedProfile, StudentProfile};
use crate::state::{use_app_state, Lookup, Section, Status};

/// Student profile section component
#[component]
pub fn StudentProfilePage() -> impl IntoView {
    view! {
        <SectionContainer section=Section::StudentProfile>
            <h3>"Student Profile"</h3>
            <ProfileLookup />
            <ProfileSave />
        </SectionContainer>
    }
}

#[component]
fn ProfileLookup() -> impl IntoView {
    let state = use_app_state();

    let (email, set_email) = create_signal(String::new());
    let result = create_rw_signal(Lookup::<StudentProfile>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let email = email.get();
        spawn_local(async move {
            let response = api::fetch_student(&base, &email).await;
            if let Err(e) = &response {
                log_error("fetching profile", e);
            }
            result.set(Lookup::from_result(
                response,
                "Student not found.",
                "Failed to fetch profile.",
            ));
        });
    };

    view! {
        <form id="profile-form" on:submit=on_submit>
            <div class="form-group">
                <label for="profile-email">"Student Email:"</label>
                <input
                    type="email"
                    id="profile-email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <button type="submit">"View Profile"</button>
        </form>
        <ProfileResult result=result />
    }
}

/// Result panel of the profile lookup
#[component]
fn ProfileResult(#[prop(into)] result: Signal<Lookup<StudentProfile>>) -> impl IntoView {
    view! {
        <div id="profile-result">
            {move || result.with(|r| match r {
                Lookup::Idle => view! {}.into_view(),
                Lookup::Found(profile) => view! { <ProfileCard profile=profile.clone() /> }.into_view(),
                Lookup::Failed(message) => view! { <ErrorBlock message=message.clone() /> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn ProfileCard(profile: StudentProfile) -> impl IntoView {
    let activities = if profile.activities.is_empty() {
        view! { <EmptyPlaceholder text="No activities found." /> }.into_view()
    } else {
        view! {
            <h5>"Activities:"</h5>
            <ul>
                {profile.activities.into_iter().map(|a| view! {
                    <li>
                        <strong>{a.name}</strong>
                        ": "
                        {a.description}
                        " "
                        <em>"("{a.schedule}")"</em>
                    </li>
                }).collect_view()}
            </ul>
        }.into_view()
    };

    view! {
        <div class="activity-card">
            <h4>"Student Profile"</h4>
            <p><strong>"Email:"</strong>" "{profile.email}</p>
            <p><strong>"Name:"</strong>" "{profile.name.unwrap_or_default()}</p>
            <p><strong>"Grade:"</strong>" "{profile.grade.unwrap_or_default()}</p>
            {activities}
        </div>
    }
}

#[component]
fn ProfileSave() -> impl IntoView {
    let state = use_app_state();

    let (email, set_email) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (grade, set_grade) = create_signal(String::new());
    let status = create_rw_signal(None::<Status>);
    let saved = create_rw_signal(None::<SavedProfile>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let base = state.api_base();
        let (e, n, g) = (email.get(), name.get(), grade.get());
        spawn_local(async move {
            match api::save_student(&base, &e, &n, &g).await {
                Ok(response) => {
                    status.set(Some(Status::success(response.message)));
                    saved.set(Some(response.profile));
                }
                Err(err) => {
                    log_error("saving profile", &err);
                    status.set(Some(Status::error(
                        err.user_message(api::DEFAULT_ERROR_DETAIL, "Failed to save profile."),
                    )));
                    saved.set(None);
                }
            }
        });
    };

    view! {
        <h4>"Create or Update Profile"</h4>
        <form id="profile-save-form" on:submit=on_submit>
            <div class="form-group">
                <label for="profile-save-email">"Student Email:"</label>
                <input
                    type="email"
                    id="profile-save-email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="profile-save-name">"Name:"</label>
                <input
                    type="text"
                    id="profile-save-name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="profile-save-grade">"Grade:"</label>
                <input
                    type="text"
                    id="profile-save-grade"
                    required=true
                    prop:value=move || grade.get()
                    on:input=move |ev| set_grade.set(event_target_value(&ev))
                />
            </div>
            <button type="submit">"Save Profile"</button>
        </form>
        <StatusMessage id="profile-save-message" status=status />
        {move || saved.get().map(|p| view! {
            <p class="saved-profile">
                {format!("{} ({}), grade {}", p.name, p.email, p.grade)}
            </p>
        })}
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::api::ClientError;
    use crate::testing::mount_in_container;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn unknown_student_shows_server_detail() {
        let container = mount_in_container(|| {
            let missing = ClientError::from_status(404, r#"{"detail":"Student not found"}"#);
            let result = create_rw_signal(Lookup::<StudentProfile>::from_result(
                Err(missing),
                "Student not found.",
                "Failed to fetch profile.",
            ));
            view! { <ProfileResult result=result /> }
        });

        let error = container
            .query_selector("#profile-result > div.error")
            .unwrap()
            .expect("error block");
        assert_eq!(error.text_content().unwrap_or_default(), "Student not found");
        assert!(container.query_selector(".activity-card").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn student_without_activities_shows_placeholder() {
        let container = mount_in_container(|| {
            let result = create_rw_signal(Lookup::Found(StudentProfile {
                email: "emma@mergington.edu".into(),
                name: Some("Emma Johnson".into()),
                grade: None,
                activities: Vec::new(),
            }));
            view! { <ProfileResult result=result /> }
        });

        let text = container.text_content().unwrap_or_default();
        assert!(text.contains("emma@mergington.edu"));
        assert!(text.contains("Emma Johnson"));
        assert!(text.contains("No activities found."));
        assert!(container.query_selector(".error").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn idle_lookup_renders_nothing() {
        let container = mount_in_container(|| {
            let result = create_rw_signal(Lookup::<StudentProfile>::Idle);
            view! { <ProfileResult result=result /> }
        });

        assert_eq!(container.text_content().unwrap_or_default(), "");
    }
}
