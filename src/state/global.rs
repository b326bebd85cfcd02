//! Global Application State
//!
//! The view-state object built once at startup and shared through context.
//! Every section reads its signals from here instead of querying the DOM.

use leptos::*;

use crate::api::{self, ClientError, DEFAULT_ERROR_DETAIL};
use crate::config::ClientConfig;
use crate::state::models::{ActivityCatalog, DashboardSummary, MessageResponse};
use crate::state::navigation::Section;

/// Initial loads that render into a fixed region
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed,
}

/// Result panel of a lookup form; persists until the next submit
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<T> {
    Idle,
    Found(T),
    Failed(String),
}

impl<T> Lookup<T> {
    /// Map a lookup result, choosing the text an error should show
    pub fn from_result(
        result: Result<T, ClientError>,
        fallback: &str,
        transport_message: &str,
    ) -> Self {
        match result {
            Ok(value) => Lookup::Found(value),
            Err(e) => Lookup::Failed(e.user_message(fallback, transport_message)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A success or error line shown after a mutating action
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: MessageKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    /// Server message on success; `detail`, generic text, or
    /// `transport_message` on failure
    pub fn from_result(
        result: &Result<MessageResponse, ClientError>,
        transport_message: &str,
    ) -> Self {
        match result {
            Ok(response) => Status::success(response.message.clone()),
            Err(e) => Status::error(e.user_message(DEFAULT_ERROR_DETAIL, transport_message)),
        }
    }
}

/// Class attribute of the shared message region
pub fn flash_class(kind: Option<MessageKind>, hidden: bool) -> String {
    match (kind, hidden) {
        (Some(kind), false) => kind.class().to_string(),
        (Some(kind), true) => format!("{} hidden", kind.class()),
        (None, _) => "hidden".to_string(),
    }
}

/// Shared message region for signup and unregister.
///
/// Each `show` schedules its own hide timer. A newer message does not cancel
/// an older timer, so it may be hidden before its own delay elapses.
#[derive(Clone, Copy)]
pub struct FlashMessage {
    status: RwSignal<Option<Status>>,
    hidden: RwSignal<bool>,
    hide_delay_ms: u32,
}

impl FlashMessage {
    pub fn new(hide_delay_ms: u32) -> Self {
        Self {
            status: create_rw_signal(None),
            hidden: create_rw_signal(true),
            hide_delay_ms,
        }
    }

    pub fn show(&self, status: Status) {
        self.status.set(Some(status));
        self.hidden.set(false);

        let hidden = self.hidden;
        gloo_timers::callback::Timeout::new(self.hide_delay_ms, move || {
            hidden.set(true);
        })
        .forget();
    }

    pub fn text(&self) -> String {
        self.status
            .with(|s| s.as_ref().map(|s| s.text.clone()))
            .unwrap_or_default()
    }

    pub fn class_name(&self) -> String {
        flash_class(self.status.with(|s| s.as_ref().map(|s| s.kind)), self.hidden.get())
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    /// The one visible section
    pub section: RwSignal<Section>,
    pub dashboard: RwSignal<LoadState<DashboardSummary>>,
    pub activities: RwSignal<LoadState<ActivityCatalog>>,
    pub flash: FlashMessage,
}

/// Build the state and provide it to the component tree
pub fn provide_app_state(config: ClientConfig) -> AppState {
    let state = AppState::new(config);
    provide_context(state.clone());
    state
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

/// Log a failed request to the browser console
pub fn log_error(action: &str, error: &ClientError) {
    web_sys::console::error_1(&format!("Error {}: {}", action, error).into());
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            flash: FlashMessage::new(config.message_hide_delay_ms),
            config,
            section: create_rw_signal(Section::default()),
            dashboard: create_rw_signal(LoadState::Loading),
            activities: create_rw_signal(LoadState::Loading),
        }
    }

    pub fn api_base(&self) -> String {
        self.config.api_base.clone()
    }

    /// Hide every section except `section`
    pub fn show_section(&self, section: Section) {
        self.section.set(section);
    }

    /// Names of the loaded activities, for selection controls
    pub fn activity_names(&self) -> Vec<String> {
        self.activities.with(|state| match state {
            LoadState::Loaded(catalog) => catalog.names().map(str::to_string).collect(),
            _ => Vec::new(),
        })
    }

    pub fn load_dashboard(&self) {
        let base = self.api_base();
        let dashboard = self.dashboard;
        spawn_local(async move {
            match api::fetch_dashboard(&base).await {
                Ok(summary) => dashboard.set(LoadState::Loaded(summary)),
                Err(e) => {
                    log_error("fetching dashboard", &e);
                    dashboard.set(LoadState::Failed);
                }
            }
        });
    }

    /// Re-fetch the whole catalog; the last response to arrive wins
    pub fn reload_activities(&self) {
        let base = self.api_base();
        let activities = self.activities;
        spawn_local(async move {
            match api::fetch_activities(&base).await {
                Ok(catalog) => activities.set(LoadState::Loaded(catalog)),
                Err(e) => {
                    log_error("fetching activities", &e);
                    activities.set(LoadState::Failed);
                }
            }
        });
    }

    /// Report a signup or unregister outcome in the shared message region.
    ///
    /// A success re-fetches the catalog. Returns whether it succeeded.
    pub fn finish_roster_change(
        &self,
        action: &str,
        result: &Result<MessageResponse, ClientError>,
        transport_message: &str,
    ) -> bool {
        if let Err(e) = result {
            log_error(action, e);
        }
        self.flash.show(Status::from_result(result, transport_message));

        let succeeded = result.is_ok();
        if succeeded {
            self.reload_activities();
        }
        succeeded
    }

    pub fn unregister(&self, activity: String, email: String) {
        let state = self.clone();
        spawn_local(async move {
            let result = api::unregister(&state.api_base(), &activity, &email).await;
            state.finish_roster_change(
                "unregistering",
                &result,
                "Failed to unregister. Please try again.",
            );
        });
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use crate::state::models::{Activity, ActivityCatalog};

    fn loaded_catalog() -> LoadState<ActivityCatalog> {
        LoadState::Loaded(ActivityCatalog(vec![(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: Vec::new(),
            },
        )]))
    }

    #[wasm_bindgen_test]
    async fn flash_message_hides_after_delay() {
        let runtime = create_runtime();
        let flash = FlashMessage::new(crate::config::MESSAGE_HIDE_DELAY_MS);

        flash.show(Status::success("Signed up a@x.com for Chess Club"));
        assert_eq!(flash.class_name(), "success");

        TimeoutFuture::new(4_000).await;
        assert_eq!(flash.class_name(), "success");

        TimeoutFuture::new(1_500).await;
        assert_eq!(flash.class_name(), "success hidden");

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn earlier_timer_hides_newer_message() {
        let runtime = create_runtime();
        let flash = FlashMessage::new(1_000);

        flash.show(Status::success("first"));
        TimeoutFuture::new(600).await;
        flash.show(Status::error("second"));
        assert_eq!(flash.text(), "second");

        TimeoutFuture::new(600).await;
        assert_eq!(flash.class_name(), "error hidden");

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn successful_unregister_reloads_activities() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());
        state.activities.set(loaded_catalog());

        let result = Ok(MessageResponse { message: "Unregistered a@x.com from Chess Club".into() });
        assert!(state.finish_roster_change("unregistering", &result, "offline"));
        assert_eq!(state.flash.text(), "Unregistered a@x.com from Chess Club");
        assert_eq!(state.flash.class_name(), "success");

        // No API is served to the test page, so the re-fetch lands as a failure
        TimeoutFuture::new(1_000).await;
        assert_eq!(state.activities.get_untracked(), LoadState::Failed);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn failed_unregister_keeps_catalog() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());
        state.activities.set(loaded_catalog());

        let result = Err(ClientError::Api {
            status: 400,
            detail: Some("Student is not signed up for this activity".into()),
        });
        assert!(!state.finish_roster_change("unregistering", &result, "offline"));
        assert_eq!(state.flash.text(), "Student is not signed up for this activity");
        assert_eq!(state.flash.class_name(), "error");

        TimeoutFuture::new(1_000).await;
        assert_eq!(state.activities.get_untracked(), loaded_catalog());

        runtime.dispose();
    }
}
