use gloo::events::EventListener;
use web_sys::{Document, Element, Event};

use crate::app::elements;
use crate::motion;

const HOME_PANEL_ID: &str = "hero";
const HOME_HASH: &str = "#hero";

/// Click wiring for the hero CTAs, the back-to-top control, and the panel
/// back buttons. The returned listener handles keep the wiring alive.
pub fn install(document: &Document, reduced_motion: bool) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for cta in elements(document, ".hero-cta") {
        let document = document.clone();
        let link = cta.clone();
        listeners.push(EventListener::new(&cta, "click", move |event: &Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target_id) = href.strip_prefix('#') else {
                // Non-hash links (PDFs and the like) keep their default action.
                return;
            };
            event.prevent_default();
            if let Some(target) = document.get_element_by_id(target_id) {
                motion::scroll_to_element(&target, reduced_motion);
            }
        }));
    }

    for selector in [".backtotop", ".panel__back-btn", ".contact__back-btn"] {
        for button in elements(document, selector) {
            listeners.push(home_listener(document, &button, reduced_motion));
        }
    }

    listeners
}

fn home_listener(document: &Document, button: &Element, reduced_motion: bool) -> EventListener {
    let document = document.clone();
    EventListener::new(button, "click", move |event: &Event| {
        event.prevent_default();
        let target = document
            .get_element_by_id(HOME_PANEL_ID)
            .or_else(|| document.document_element());
        if let Some(target) = target {
            motion::scroll_to_element(&target, reduced_motion);
        }
        motion::push_hash(HOME_HASH);
    })
}
