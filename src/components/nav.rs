//! Navigation Component
//!
//! Top menu linking to each section of the page.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::{use_app_state, Section};

/// Top menu component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="top-menu">
            {Section::ALL
                .into_iter()
                .map(|section| view! { <NavLink section=section /> })
                .collect_view()}
        </nav>
    }
}

/// Individual menu link; switches sections without touching history
#[component]
fn NavLink(section: Section) -> impl IntoView {
    let state = use_app_state();
    let current = state.section;

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        let target = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("href"))
            .and_then(|href| Section::from_href(&href));

        if let Some(target) = target {
            state.show_section(target);
        }
    };

    view! {
        <a
            href=section.href()
            class="menu-link"
            class:active=move || current.get() == section
            on:click=on_click
        >
            {section.label()}
        </a>
    }
}
