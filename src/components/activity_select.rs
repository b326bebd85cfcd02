//! Activity Selector
//!
//! Selection control listing every activity in the loaded catalog.

use leptos::*;

use crate::state::use_app_state;

#[component]
pub fn ActivitySelect(
    id: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let state = use_app_state();

    view! {
        <select
            id=id
            required=true
            on:change=move |ev| set_value.set(event_target_value(&ev))
            prop:value=move || value.get()
        >
            <option value="">"-- Select an activity --"</option>
            {move || {
                state
                    .activity_names()
                    .into_iter()
                    .map(|name| {
                        let option_name = name.clone();
                        view! {
                            <option
                                value=name.clone()
                                prop:selected=move || value.with(|v| *v == option_name)
                            >
                                {name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
