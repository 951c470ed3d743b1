//! Page runtime: wires DOM events to the core controller and applies effects.
//!
//! # Responsibility
//! - Own the `PortfolioController` for one document.
//! - Attach every listener programmatically and keep it alive.
//! - Run the load → render → initialize sequence.
//!
//! # Invariants
//! - The controller is borrowed only while computing effects, never while
//!   touching the DOM or across `.await`.
//! - DOM failures are logged and skipped; they never abort the page.

use crate::dom::{self, DomResult};
use crate::{loader, popup, render};
use folio_core::render::business_cards;
use folio_core::{
    CarouselId, Direction, KeyInput, LoadPlan, PageEffect, PageEvent, PortfolioController,
    ResourceKind, SectionPlan, SiteConfig,
};
use gloo_events::EventListener;
use log::{error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

const CLOSE_BUTTONS: &str = "#popup-close, .popup-close";
const ABOUT_TOGGLE_ID: &str = "technical-toggle";

pub struct Page {
    document: Document,
    controller: RefCell<PortfolioController>,
    listeners: RefCell<Vec<EventListener>>,
    card_listeners: RefCell<Vec<EventListener>>,
}

impl Page {
    pub fn new(document: Document, config: SiteConfig) -> Rc<Self> {
        Rc::new(Self {
            document,
            controller: RefCell::new(PortfolioController::new(config)),
            listeners: RefCell::new(Vec::new()),
            card_listeners: RefCell::new(Vec::new()),
        })
    }

    /// Handles one event and applies the resulting effects.
    pub fn dispatch(&self, event: PageEvent) {
        let document = &self.document;
        let metrics = |carousel: CarouselId| -> f64 { render::item_width_px(document, carousel) };
        let effects = self.controller.borrow_mut().handle(event, &metrics);
        for effect in &effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: &PageEffect) {
        let (name, result) = match effect {
            PageEffect::Carousel(view) => ("carousel", render::apply_carousel(&self.document, view)),
            PageEffect::ShowPopup(view) => ("popup_show", popup::show(&self.document, view)),
            PageEffect::HidePopup => ("popup_hide", popup::hide(&self.document)),
            PageEffect::AboutText(text) => ("about_text", render::set_about_text(&self.document, text)),
        };
        if let Err(err) = result {
            warn!("event=apply_effect module=page status=error effect={name} error={err}");
        }
    }

    /// Current state of the about-section checkbox, if present.
    pub fn about_technical_checked(&self) -> Option<bool> {
        self.document
            .get_element_by_id(ABOUT_TOGGLE_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
    }

    /// True when the document carries any portfolio container.
    pub fn has_portfolio(&self) -> bool {
        ResourceKind::ALL.into_iter().any(|resource| {
            dom::query_document(&self.document, resource.container_selector()).is_ok()
        })
    }

    pub fn business_list(&self) -> Option<Element> {
        self.document.get_element_by_id(render::BUSINESS_LIST_ID)
    }

    pub fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let page = Rc::clone(self);
        listeners.push(EventListener::new(&self.document, "keydown", move |event| {
            let key = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|event| KeyInput::parse(&event.key()));
            if let Some(key) = key {
                page.dispatch(PageEvent::Key(key));
            }
        }));

        if let Some(window) = web_sys::window() {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(&window, "resize", move |_event| {
                page.dispatch(PageEvent::Resize);
            }));
        }

        if let Ok(overlay) = dom::by_id(&self.document, popup::OVERLAY_ID) {
            let page = Rc::clone(self);
            let overlay_value = JsValue::from(overlay.clone());
            listeners.push(EventListener::new(&overlay, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .map(JsValue::from)
                    .is_some_and(|target| target == overlay_value);
                page.dispatch(PageEvent::OverlayClick { on_backdrop });
            }));
        }

        if let Ok(buttons) = self.document.query_selector_all(CLOSE_BUTTONS) {
            for index in 0..buttons.length() {
                let Some(button) = buttons.get(index) else {
                    continue;
                };
                let page = Rc::clone(self);
                listeners.push(EventListener::new(&button, "click", move |_event| {
                    page.dispatch(PageEvent::CloseClick);
                }));
            }
        }

        for carousel in CarouselId::ALL {
            let section = render::carousel_root(&self.document, carousel)
                .ok()
                .and_then(|root| root.parent_element());
            let Some(section) = section else {
                continue;
            };
            for (selector, direction) in [(".prev", Direction::Prev), (".next", Direction::Next)] {
                let Ok(button) = dom::query(&section, selector) else {
                    continue;
                };
                let page = Rc::clone(self);
                listeners.push(EventListener::new(&button, "click", move |_event| {
                    page.dispatch(PageEvent::Nav {
                        carousel,
                        direction,
                    });
                }));
            }
        }

        if let Some(toggle) = self.document.get_element_by_id(ABOUT_TOGGLE_ID) {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(&toggle, "change", move |_event| {
                if let Some(technical) = page.about_technical_checked() {
                    page.dispatch(PageEvent::AboutToggled { technical });
                }
            }));
        }

        info!(
            "event=listeners_installed module=page status=ok count={}",
            listeners.len()
        );
        self.listeners.borrow_mut().extend(listeners);
    }

    /// Fetches the portfolio data and renders it.
    pub async fn load_portfolio(self: Rc<Self>) {
        let paths = {
            let mut controller = self.controller.borrow_mut();
            controller.begin_load();
            controller.config().data.clone()
        };
        let results = loader::load_portfolio(&paths).await;
        let plan = self.controller.borrow_mut().finish_load(results);
        self.render_plan(&plan);
        self.initialize_carousels(&plan.rendered_carousels());
    }

    fn render_plan(self: &Rc<Self>, plan: &LoadPlan) {
        let mut card_listeners = Vec::new();
        for section in &plan.sections {
            let result = match section {
                SectionPlan::Timeline(rows) => render::render_timeline(&self.document, rows),
                SectionPlan::Cards { carousel, cards } => self
                    .render_cards(*carousel, cards, &mut card_listeners),
                SectionPlan::Error { resource, message } => {
                    render::render_error(&self.document, *resource, message)
                }
            };
            if let Err(err) = result {
                warn!(
                    "event=render_section module=page status=error resource={} error={err}",
                    section.resource().as_str()
                );
            }
        }
        *self.card_listeners.borrow_mut() = card_listeners;
    }

    fn render_cards(
        self: &Rc<Self>,
        carousel: CarouselId,
        cards: &[folio_core::render::CardView],
        listeners: &mut Vec<EventListener>,
    ) -> DomResult<()> {
        for (element, item_id) in render::render_cards(&self.document, carousel, cards)? {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(&element, "click", move |_event| {
                page.dispatch(PageEvent::CardClick(item_id.clone()));
            }));
        }
        Ok(())
    }

    /// Applies button state for the given carousels at their current offsets.
    pub fn initialize_carousels(&self, carousels: &[CarouselId]) {
        let document = &self.document;
        let metrics = |carousel: CarouselId| -> f64 { render::item_width_px(document, carousel) };
        let views = self.controller.borrow().carousel_views(&metrics);
        for view in views.into_iter().filter(|view| carousels.contains(&view.carousel)) {
            self.apply(&PageEffect::Carousel(view));
        }
    }

    /// Fetches and renders the business listing into `#businessList`.
    pub async fn load_businesses(self: Rc<Self>) {
        let Some(container) = self.business_list() else {
            return;
        };
        let url = self.controller.borrow().config().data.businesses.clone();
        let result = match loader::load_businesses(&url).await {
            Ok(entries) => {
                info!(
                    "event=business_load module=page status=ok count={}",
                    entries.len()
                );
                render::render_business_list(&self.document, &container, &business_cards(&entries))
            }
            Err(message) => {
                error!("event=business_load module=page status=error error={message}");
                render::render_error_into(&self.document, &container, render::BUSINESS_ERROR_MESSAGE)
            }
        };
        if let Err(err) = result {
            warn!("event=render_section module=page status=error resource=businesses error={err}");
        }
    }
}
