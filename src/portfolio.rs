use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::app::elements;

const OVERLAY_ID: &str = "portfolioOverlay";
const MODAL_ID: &str = "portfolioModal";
const CLOSE_SELECTOR: &str = ".portfolio-modal__close";
const CARD_SELECTOR: &str = ".portfolio-card";
const CONTENT_SELECTOR: &str = ".portfolio-modal__content";
const BRAND_ATTR: &str = "data-brand";
const VISIBLE_CLASS: &str = "visible";

/// Portfolio content modal. A card's `data-brand` attribute joins it to the
/// content section shown when the card is clicked; at most one section is
/// visible at a time.
pub struct PortfolioModal {
    document: Document,
    overlay: Element,
    modal: Element,
    contents: Vec<Element>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PortfolioModal {
    /// Returns None when the page carries no modal markup.
    pub fn install(document: &Document) -> Option<Rc<Self>> {
        let overlay = document.get_element_by_id(OVERLAY_ID)?;
        let modal = document.get_element_by_id(MODAL_ID)?;
        let contents = elements(document, CONTENT_SELECTOR);
        let controller = Rc::new(Self {
            document: document.clone(),
            overlay,
            modal,
            contents,
            listeners: RefCell::new(Vec::new()),
        });
        controller.install_listeners();
        Some(controller)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        for card in elements(&self.document, CARD_SELECTOR) {
            let modal = Rc::clone(self);
            let brand_source = card.clone();
            listeners.push(EventListener::new(&card, "click", move |_event: &Event| {
                let Some(brand_id) = brand_source.get_attribute(BRAND_ATTR) else {
                    return;
                };
                modal.open(&brand_id);
            }));
        }

        for button in elements(&self.document, CLOSE_SELECTOR) {
            let modal = Rc::clone(self);
            listeners.push(EventListener::new(
                &button,
                "click",
                move |_event: &Event| {
                    modal.close();
                },
            ));
        }

        let modal = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.overlay,
            "click",
            move |_event: &Event| {
                modal.close();
            },
        ));

        let modal = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.document,
            "keydown",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() == "Escape" && modal.is_open() {
                    modal.close();
                }
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }

    /// Show the content section tagged `brand_id`, hide its siblings, and
    /// suspend ambient page scroll for the duration.
    pub fn open(&self, brand_id: &str) {
        for content in &self.contents {
            let _ = content.class_list().remove_1(VISIBLE_CLASS);
            if content.get_attribute(BRAND_ATTR).as_deref() == Some(brand_id) {
                let _ = content.class_list().add_1(VISIBLE_CLASS);
            }
        }
        let _ = self.overlay.class_list().add_1(VISIBLE_CLASS);
        let _ = self.modal.class_list().add_1(VISIBLE_CLASS);
        self.modal.set_scroll_top(0);
        self.set_page_scroll_locked(true);
    }

    pub fn close(&self) {
        let _ = self.overlay.class_list().remove_1(VISIBLE_CLASS);
        let _ = self.modal.class_list().remove_1(VISIBLE_CLASS);
        self.set_page_scroll_locked(false);
    }

    pub fn is_open(&self) -> bool {
        self.modal.class_list().contains(VISIBLE_CLASS)
    }

    fn set_page_scroll_locked(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}
