//! Thin wrappers over `window.setTimeout` / `setInterval`.
//!
//! Handles are plain ids so they can sit in stored values and cleanup
//! closures. Clearing an id that already fired is harmless.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub fn set_timeout(ms: i32, cb: impl FnOnce() + 'static) -> Option<i32> {
    let window = window()?;
    let closure = Closure::once_into_js(cb);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            ms,
        )
        .ok()
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = window() {
        window.clear_timeout_with_handle(id);
    }
}

pub fn set_interval(ms: i32, cb: impl FnMut() + 'static) -> Option<i32> {
    let window = window()?;
    let closure = Closure::wrap(Box::new(cb) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    // The interval outlives this scope; the closure must stay alive with it.
    closure.forget();
    Some(id)
}

pub fn clear_interval(id: i32) {
    if let Some(window) = window() {
        window.clear_interval_with_handle(id);
    }
}
