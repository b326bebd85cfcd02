//! Mergington Activities Dashboard
//!
//! Browser client for the Mergington High School activities API, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with activity and participant totals
//! - Activity catalog with signup and unregister
//! - Student profile lookup and editing
//! - Attendance marking and history
//! - Notifications and activity waitlists
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from the activities REST API over HTTP; nothing
//! is cached between page loads.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
