use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Media-feature probe; a missing `matchMedia` reads as "no preference".
pub fn prefers_reduced_motion() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(match_media) = Reflect::get(&window, &"matchMedia".into()) else {
        return false;
    };
    let Ok(match_media) = match_media.dyn_into::<Function>() else {
        return false;
    };
    let Ok(query) = match_media.call1(&window, &REDUCED_MOTION_QUERY.into()) else {
        return false;
    };
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Align the element's top edge with the viewport top; instant under reduced
/// motion, animated otherwise.
pub fn scroll_to_element(element: &Element, reduced_motion: bool) {
    if reduced_motion {
        element.scroll_into_view_with_bool(true);
        return;
    }
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reflect an anchor in the address bar without the browser's own jump.
pub fn push_hash(hash: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(hash));
    }
}
