//! Message Components
//!
//! Success and error lines shown after actions and lookups.

use leptos::*;

use crate::state::{use_app_state, Status};

/// Shared message region for signup and unregister; hides itself after a delay
#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = use_app_state().flash;

    view! {
        <div id="message" class=move || flash.class_name()>
            {move || flash.text()}
        </div>
    }
}

/// Per-form message region; stays until the form is submitted again
#[component]
pub fn StatusMessage(
    id: &'static str,
    #[prop(into)]
    status: Signal<Option<Status>>,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=move || status.with(|s| s.as_ref().map(|s| s.kind.class()).unwrap_or(""))
        >
            {move || status.with(|s| s.as_ref().map(|s| s.text.clone()).unwrap_or_default())}
        </div>
    }
}

/// Inline error block inside a result panel
#[component]
pub fn ErrorBlock(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error">{message}</div> }
}

/// Italic placeholder shown when a list comes back empty
#[component]
pub fn EmptyPlaceholder(text: &'static str) -> impl IntoView {
    view! { <p><em>{text}</em></p> }
}
