//! Signup Section
//!
//! Form for signing a student up for an activity.

use leptos::*;

use crate::api::{self, ClientError};
use crate::components::{ActivitySelect, SectionContainer};
use crate::state::global::AppState;
use crate::state::models::MessageResponse;
use crate::state::{use_app_state, Section};

/// Values typed into the signup form
#[derive(Clone, Copy)]
struct SignupForm {
    name: RwSignal<String>,
    grade: RwSignal<String>,
    email: RwSignal<String>,
    activity: RwSignal<String>,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            grade: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            activity: create_rw_signal(String::new()),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.grade.set(String::new());
        self.email.set(String::new());
        self.activity.set(String::new());
    }
}

/// Show the outcome and reset the form after a successful signup
fn complete_signup(
    state: &AppState,
    form: SignupForm,
    result: &Result<MessageResponse, ClientError>,
) {
    if state.finish_roster_change("signing up", result, "Failed to sign up. Please try again.") {
        form.clear();
    }
}

/// Signup form component
#[component]
pub fn Signup() -> impl IntoView {
    let state = use_app_state();
    let form = SignupForm::new();
    let SignupForm { name, grade, email, activity } = form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state.clone();
        let (n, g, e, a) = (name.get(), grade.get(), email.get(), activity.get());

        spawn_local(async move {
            let result = api::signup(&state.api_base(), &a, &e, &n, &g).await;
            complete_signup(&state, form, &result);
        });
    };

    view! {
        <SectionContainer section=Section::Signup>
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="name">"Student Name:"</label>
                    <input
                        type="text"
                        id="name"
                        required=true
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="grade">"Grade:"</label>
                    <input
                        type="text"
                        id="grade"
                        required=true
                        placeholder="e.g. 10"
                        prop:value=move || grade.get()
                        on:input=move |ev| grade.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="your-email@mergington.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <ActivitySelect
                        id="activity"
                        value=activity.read_only()
                        set_value=activity.write_only()
                    />
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
        </SectionContainer>
    }
}
