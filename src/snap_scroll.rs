use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, WheelEvent};

use pageflow_core::{GestureOutcome, PanelNavigator, SourceClassifier, RELEASE_FALLBACK_MS};

use crate::motion;

const SCROLLER_SELECTOR: &str = ".snap-container";
const PANEL_SELECTOR: &str = ".panel";
const LINE_DELTA_PX: f64 = 16.0;

/// Wheel-driven one-panel-per-gesture override for the snap container.
///
/// Classic mouse wheels fling CSS snap containers across several panels per
/// burst; this view intercepts those gestures and advances exactly one panel,
/// while detected trackpads keep native scrolling for the whole session.
pub struct SnapView {
    scroller: Element,
    panels: Vec<HtmlElement>,
    classifier: RefCell<SourceClassifier>,
    navigator: RefCell<PanelNavigator>,
    release_timer: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl SnapView {
    /// Returns None when the page carries no snap container or panels;
    /// native scrolling then applies throughout.
    pub fn install(document: &Document) -> Option<Rc<Self>> {
        let scroller = document.query_selector(SCROLLER_SELECTOR).ok()??;
        let list = scroller.query_selector_all(PANEL_SELECTOR).ok()?;
        let mut panels = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(panel) = node.dyn_into::<HtmlElement>() {
                    panels.push(panel);
                }
            }
        }
        if panels.is_empty() {
            return None;
        }
        let view = Rc::new(Self {
            scroller,
            panels,
            classifier: RefCell::new(SourceClassifier::new()),
            navigator: RefCell::new(PanelNavigator::new()),
            release_timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Some(view)
    }

    pub fn animating(&self) -> bool {
        self.navigator.borrow().animating()
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.scroller,
            "wheel",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                view.on_wheel(event);
            },
        );
        listeners.push(listener);

        let view = Rc::clone(self);
        let listener = EventListener::new(&self.scroller, "scroll", move |_event: &Event| {
            view.on_scroll();
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_wheel(self: &Rc<Self>, event: &WheelEvent) {
        {
            let mut classifier = self.classifier.borrow_mut();
            // Only pixel-mode deltas are meaningful to the heuristic;
            // line/page modes report small line counts.
            if event.delta_mode() == 0 {
                let was_decided = classifier.decided();
                classifier.observe(event.delta_y());
                if !was_decided && classifier.decided() {
                    let source = if classifier.is_trackpad() {
                        "trackpad"
                    } else {
                        "wheel"
                    };
                    gloo::console::log!("wheel source", source);
                }
            }
            if classifier.is_trackpad() {
                return;
            }
        }

        let (delta_x, delta_y) = self.normalized_deltas(event);
        let tops = self.panel_tops();
        let scroll_top = self.scroller.scroll_top() as f64;
        let outcome = self
            .navigator
            .borrow_mut()
            .on_wheel(delta_x, delta_y, &tops, scroll_top);
        match outcome {
            GestureOutcome::PassThrough => {}
            GestureOutcome::Suppress => event.prevent_default(),
            GestureOutcome::Advance { target } => {
                event.prevent_default();
                if let Some(panel) = self.panels.get(target) {
                    motion::scroll_to_element(panel, false);
                }
                self.arm_release_timer();
            }
        }
    }

    fn on_scroll(&self) {
        if self.classifier.borrow().is_trackpad() {
            return;
        }
        let tops = self.panel_tops();
        let scroll_top = self.scroller.scroll_top() as f64;
        if self.navigator.borrow_mut().on_scroll(&tops, scroll_top) {
            self.release_timer.borrow_mut().take();
        }
    }

    fn arm_release_timer(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let timer = Timeout::new(RELEASE_FALLBACK_MS, move || {
            view.release_timer.borrow_mut().take();
            view.navigator.borrow_mut().release();
        });
        // Dropping a superseded handle cancels it.
        *self.release_timer.borrow_mut() = Some(timer);
    }

    /// Panel offsets are re-read on every decision; panels resize with the
    /// viewport.
    fn panel_tops(&self) -> Vec<f64> {
        self.panels
            .iter()
            .map(|panel| panel.offset_top() as f64)
            .collect()
    }

    fn normalized_deltas(&self, event: &WheelEvent) -> (f64, f64) {
        let mut delta_x = event.delta_x();
        let mut delta_y = event.delta_y();
        match event.delta_mode() {
            1 => {
                delta_x *= LINE_DELTA_PX;
                delta_y *= LINE_DELTA_PX;
            }
            2 => {
                let rect = self.scroller.get_bounding_client_rect();
                delta_x *= rect.width();
                delta_y *= rect.height();
            }
            _ => {}
        }
        (delta_x, delta_y)
    }
}
