#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod frame;
mod hearts;
mod messages;
mod tracking;

pub use tracking::Tracker;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn to_array(elements: Vec<web::HtmlElement>) -> js_sys::Array {
    elements.into_iter().map(JsValue::from).collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("presentation-fx ready");
    Ok(())
}

/// Drag to rotate and wheel to zoom the `.scene-container` inside `container`.
#[wasm_bindgen(js_name = initMouseTracking)]
pub fn attach_tracking(container: web::HtmlElement) -> Tracker {
    tracking::attach(&container, crate::core::ViewConfig::default())
}

#[wasm_bindgen(js_name = createHeartParticles)]
pub fn create_heart_particles(
    container: web::HtmlElement,
    count: u32,
) -> Result<js_sys::Array, JsValue> {
    hearts::create(&container, count as usize)
        .map(to_array)
        .map_err(to_js)
}

/// `messages` is an array of strings; non-string entries are skipped.
#[wasm_bindgen(js_name = createFloatingMessages)]
pub fn create_floating_messages(
    container: web::HtmlElement,
    messages: js_sys::Array,
) -> Result<js_sys::Array, JsValue> {
    let texts: Vec<String> = messages.iter().filter_map(|v| v.as_string()).collect();
    crate::messages::create(&container, &texts)
        .map(to_array)
        .map_err(to_js)
}
