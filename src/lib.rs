pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod rating;
pub mod render;
pub mod storage;
pub mod store;
pub mod submission;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
