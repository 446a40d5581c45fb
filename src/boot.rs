//! Optional handshake with the host page. A page that wants to sequence its
//! own loading UI can define a `window.__PAGE_BOOT` object; the interaction
//! layer announces its wiring phase there and signals once when everything
//! is attached. Pages without the hook lose nothing.

use std::cell::Cell;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

const HOOK_NAME: &str = "__PAGE_BOOT";

thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

/// Resolve one callable off the hook object. A missing window, hook, or
/// method (or a non-callable value) all read as "no hook".
fn hook_method(method: &str) -> Option<(Object, Function)> {
    let window = web_sys::window()?;
    let hook = Reflect::get(&window, &JsValue::from_str(HOOK_NAME)).ok()?;
    let hook = hook.dyn_into::<Object>().ok()?;
    let func = Reflect::get(&hook, &JsValue::from_str(method)).ok()?;
    let func = func.dyn_into::<Function>().ok()?;
    Some((hook, func))
}

/// Announce the current wiring phase; silent when the page has no hook.
pub fn announce_phase(phase: &str) {
    let Some((hook, set_phase)) = hook_method("setPhase") else {
        return;
    };
    let _ = set_phase.call1(&hook, &JsValue::from_str(phase));
}

/// Completion signal, delivered at most once per page session.
pub fn ready() {
    if READY_SENT.with(|flag| flag.replace(true)) {
        return;
    }
    let Some((hook, ready)) = hook_method("ready") else {
        return;
    };
    let _ = ready.call0(&hook);
}
