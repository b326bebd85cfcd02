//! App Root Component
//!
//! Builds the shared state, starts the initial loads, and lays out every
//! section under the top menu.

use leptos::*;

use crate::components::{FlashBanner, Nav};
use crate::config::ClientConfig;
use crate::pages::{
    Activities, AttendanceHistory, AttendanceMark, Dashboard, NotificationHistory,
    NotificationSend, Signup, StudentProfilePage, Waitlist,
};
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state(ClientConfig::load());

    // Initial data; activities are reloaded again after each signup/unregister
    state.load_dashboard();
    state.reload_activities();

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <Nav />

        <main>
            <FlashBanner />

            <Dashboard />
            <Activities />
            <Signup />
            <StudentProfilePage />
            <AttendanceMark />
            <AttendanceHistory />
            <NotificationSend />
            <NotificationHistory />
            <Waitlist />
        </main>

        <footer>
            <p>"© 2023 Mergington High School"</p>
        </footer>
    }
}
