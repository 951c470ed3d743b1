//! Applies core render models and carousel views to the DOM.
//!
//! # Invariants
//! - Data text is written with `textContent`; markup is never built from data.
//! - Card click handling is attached by the caller, not embedded in markup.

use crate::dom::{self, DomError, DomResult};
use folio_core::carousel::CarouselView;
use folio_core::render::{
    BusinessCard, CardView, TimelineRow, CAROUSEL_ITEM_CLASS, ERROR_MESSAGE_CLASS,
    HISTORY_ITEM_CLASS,
};
use folio_core::{CarouselId, ResourceKind};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement};

pub const BUSINESS_LIST_ID: &str = "businessList";
pub const BUSINESS_ERROR_MESSAGE: &str = "Error loading businesses";
const CAROUSEL_CONTAINER: &str = ".carousel-container";

pub fn carousel_root(document: &Document, carousel: CarouselId) -> DomResult<Element> {
    dom::by_id(document, carousel.dom_id())
}

pub fn carousel_container(document: &Document, carousel: CarouselId) -> DomResult<Element> {
    dom::query(&carousel_root(document, carousel)?, CAROUSEL_CONTAINER)
}

/// Measured width of the first card, or `0.0` when the carousel is empty.
pub fn item_width_px(document: &Document, carousel: CarouselId) -> f64 {
    let selector = format!(
        "#{} {CAROUSEL_CONTAINER} .{CAROUSEL_ITEM_CLASS}",
        carousel.dom_id()
    );
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|item| item.dyn_into::<HtmlElement>().ok())
        .map(|item| f64::from(item.offset_width()))
        .unwrap_or(0.0)
}

/// Replaces a resource container's content with its static error message.
pub fn render_error(document: &Document, resource: ResourceKind, message: &str) -> DomResult<()> {
    let container = dom::query_document(document, resource.container_selector())?;
    render_error_into(document, &container, message)
}

pub fn render_error_into(
    document: &Document,
    container: &Element,
    message: &str,
) -> DomResult<()> {
    dom::clear(container);
    let node = dom::element(document, "div", ERROR_MESSAGE_CLASS, Some(message))?;
    container.append_child(&node)?;
    Ok(())
}

/// Replaces the timeline with one `.history-item` per row.
pub fn render_timeline(document: &Document, rows: &[TimelineRow]) -> DomResult<()> {
    let container = dom::query_document(document, ResourceKind::Background.container_selector())?;
    dom::clear(&container);
    for row in rows {
        let item = dom::element(document, "div", HISTORY_ITEM_CLASS, None)?;
        for (class, text) in &row.cells {
            item.append_child(&dom::element(document, "div", class, Some(text.as_str()))?.into())?;
        }
        container.append_child(&item)?;
    }
    Ok(())
}

/// Replaces a carousel's items; returns each card element with its item id so
/// the caller can attach click handlers.
pub fn render_cards(
    document: &Document,
    carousel: CarouselId,
    cards: &[CardView],
) -> DomResult<Vec<(Element, String)>> {
    let container = carousel_container(document, carousel)?;
    dom::clear(&container);
    let mut rendered = Vec::with_capacity(cards.len());
    for card in cards {
        let item = dom::element(document, "div", CAROUSEL_ITEM_CLASS, None)?;
        let body = dom::element(document, "div", card.card_class, None)?;
        body.append_child(&dom::element(document, "h3", "", Some(card.title.as_str()))?.into())?;
        body.append_child(&dom::element(document, "p", "", Some(card.summary.as_str()))?.into())?;
        item.append_child(&body)?;
        container.append_child(&item)?;
        rendered.push((body, card.item_id.clone()));
    }
    Ok(rendered)
}

/// Applies translation and button state for one carousel.
pub fn apply_carousel(document: &Document, view: &CarouselView) -> DomResult<()> {
    let root = carousel_root(document, view.carousel)?;
    let container = dom::query(&root, CAROUSEL_CONTAINER)?;
    dom::set_style(&container, "transform", &view.transform)?;

    let section = root
        .parent_element()
        .ok_or_else(|| DomError::Missing(format!("parent of #{}", view.carousel.dom_id())))?;
    set_disabled(&dom::query(&section, ".prev")?, view.buttons.prev_disabled)?;
    set_disabled(&dom::query(&section, ".next")?, view.buttons.next_disabled)?;
    Ok(())
}

fn set_disabled(element: &Element, disabled: bool) -> DomResult<()> {
    match element.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(disabled),
        None => {
            element.toggle_attribute_with_force("disabled", disabled)?;
        }
    }
    Ok(())
}

pub fn render_business_list(
    document: &Document,
    container: &Element,
    cards: &[BusinessCard],
) -> DomResult<()> {
    dom::clear(container);
    for card in cards {
        let column = dom::element(document, "div", "col-md", None)?;
        let frame = dom::element(document, "div", "card hoverFocus", None)?;

        let image = document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| DomError::Js("created <img> is not an image element".to_string()))?;
        image.set_src(card.image_src);
        image.set_alt("shop");
        image.set_class_name("card-img-top img-fluid p-5 d-none d-sm-block");

        let body = dom::element(document, "div", "card-body", None)?;
        let title = dom::element(document, "h5", "card-title fw-bold", Some(card.title.as_str()))?;
        let text = dom::element(document, "p", "card-text", Some(card.text.as_str()))?;
        body.append_child(&title)?;
        body.append_child(&text)?;

        frame.append_child(&image)?;
        frame.append_child(&body)?;
        column.append_child(&frame)?;
        container.append_child(&column)?;
    }
    Ok(())
}

pub fn set_about_text(document: &Document, text: &str) -> DomResult<()> {
    dom::by_id(document, "about-text")?.set_text_content(Some(text));
    Ok(())
}
