//! Browser Test Helpers

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::wasm_bindgen_test_configure;

wasm_bindgen_test_configure!(run_in_browser);

/// Mount `f` into a fresh container appended to `<body>` and return it
pub fn mount_in_container<F, N>(f: F) -> web_sys::HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container = document()
        .create_element("div")
        .expect("create container")
        .unchecked_into::<web_sys::HtmlElement>();
    document()
        .body()
        .expect("document has a body")
        .append_child(&container)
        .expect("append container");

    mount_to(container.clone(), f);
    container
}
