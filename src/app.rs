use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

#[cfg(target_arch = "wasm32")]
use crate::anchors;
#[cfg(target_arch = "wasm32")]
use crate::boot;
#[cfg(target_arch = "wasm32")]
use crate::motion;
#[cfg(target_arch = "wasm32")]
use crate::page_config;
use crate::portfolio::PortfolioModal;
use crate::reveal::RevealObserver;
use crate::snap_scroll::SnapView;

/// Everything wired at page load. The listener and observer handles live
/// here; dropping the app would detach the whole interaction layer.
pub struct PageApp {
    _anchors: Vec<EventListener>,
    _snap: Option<Rc<SnapView>>,
    _reveal: RevealObserver,
    _modal: Option<Rc<PortfolioModal>>,
}

thread_local! {
    static PAGE_APP: RefCell<Option<Rc<PageApp>>> = RefCell::new(None);
}

pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let config = page_config::load_page_config();
        let reduced_motion = config.force_reduced_motion || motion::prefers_reduced_motion();
        gloo::console::log!(
            "pageflow",
            format!(
                "snap={} reduced_motion={}",
                config.snap_enabled, reduced_motion
            )
        );

        boot::announce_phase("wiring");
        let anchors = anchors::install(&document, reduced_motion);
        let snap = if config.snap_enabled && !reduced_motion {
            SnapView::install(&document)
        } else {
            None
        };
        let reveal = RevealObserver::install(&document, reduced_motion);
        let modal = PortfolioModal::install(&document);

        let app = Rc::new(PageApp {
            _anchors: anchors,
            _snap: snap,
            _reveal: reveal,
            _modal: modal,
        });
        PAGE_APP.with(|slot| {
            *slot.borrow_mut() = Some(app);
        });
        boot::ready();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("pageflow only runs on wasm32 targets");
    }
}

/// Query helper shared by the wiring modules; nodes that are not elements
/// are skipped.
pub fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut found = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                found.push(element);
            }
        }
    }
    found
}
