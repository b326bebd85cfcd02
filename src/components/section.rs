//! Section Container
//!
//! Wraps a page section; only the active one is displayed.

use leptos::*;

use crate::state::{use_app_state, Section};

#[component]
pub fn SectionContainer(section: Section, children: Children) -> impl IntoView {
    let current = use_app_state().section;

    view! {
        <section id=section.id() style=move || section.display_style(current.get())>
            {children()}
        </section>
    }
}
