use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::app::elements;

const FADE_SELECTOR: &str = ".fade-on-scroll";
const VISIBLE_CLASS: &str = "visible";
const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot fade-in driver: an element that has entered the viewport once
/// stays visible. Dropping the handle disconnects the observer.
pub struct RevealObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl RevealObserver {
    pub fn install(document: &Document, reduced_motion: bool) -> Self {
        let targets = elements(document, FADE_SELECTOR);
        if reduced_motion || !intersection_observer_supported() {
            return Self::all_visible_now(targets);
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return Self::all_visible_now(targets);
        };
        for target in &targets {
            observer.observe(target);
        }
        Self {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }

    pub fn observing(&self) -> bool {
        self.observer.is_some()
    }

    fn all_visible_now(targets: Vec<Element>) -> Self {
        for target in &targets {
            let _ = target.class_list().add_1(VISIBLE_CLASS);
        }
        Self {
            observer: None,
            _callback: None,
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn intersection_observer_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false)
}
