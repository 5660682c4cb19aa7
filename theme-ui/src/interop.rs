use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, EventTarget, MouseEvent, StorageEvent};

use crate::browser::describe_js_error;

/// Run `callback` once the document is parsed, immediately if it already is.
pub fn on_page_load(callback: impl FnOnce() + 'static) -> Result<(), String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document on window".to_string())?;

    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let listener = Closure::once_into_js(callback);
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        .map_err(describe_js_error)
}

/// Call `on_click` for every click on `target`.
pub fn on_click(target: &EventTarget, mut on_click: impl FnMut() + 'static) -> Result<(), String> {
    let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
        on_click();
    }) as Box<dyn FnMut(MouseEvent)>);

    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(describe_js_error)?;

    // Leak the closure to keep it alive for the page lifetime
    closure.forget();
    Ok(())
}

/// Call `on_change(key, new_value)` when another page of this origin writes
/// to local storage. The writing page itself is never notified.
pub fn on_storage_change(
    mut on_change: impl FnMut(Option<String>, Option<String>) + 'static,
) -> Result<(), String> {
    let window = window().ok_or_else(|| "no global `window` exists".to_string())?;

    let closure = Closure::wrap(Box::new(move |e: StorageEvent| {
        on_change(e.key(), e.new_value());
    }) as Box<dyn FnMut(StorageEvent)>);

    window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
        .map_err(describe_js_error)?;

    closure.forget();
    Ok(())
}
