pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match container {
        Some(container) => leptos::mount::mount_to(container, app::App).forget(),
        // No retry: the host document is static, so a missing container is
        // a deployment defect rather than a readiness race.
        None => log::error!("could not find #root element to mount to"),
    }
}
