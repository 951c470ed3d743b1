//! Popup overlay rendering.
//!
//! # Invariants
//! - Only called with a resolved `PopupView`; unknown ids never reach here.
//! - Optional rows are toggled through their enclosing `.detail-item`.

use crate::dom::{self, DomError, DomResult};
use folio_core::PopupView;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

pub const OVERLAY_ID: &str = "popup-overlay";
const ACTIVE_CLASS: &str = "active";
const DETAIL_ROW: &str = ".detail-item";

pub fn show(document: &Document, view: &PopupView) -> DomResult<()> {
    set_text(document, "popup-title", &view.title)?;
    set_text(document, "popup-description", &view.description)?;
    set_text(document, "popup-technologies", &view.technologies)?;

    let duration = dom::by_id(document, "popup-duration")?;
    match &view.duration {
        Some(text) => {
            duration.set_text_content(Some(text.as_str()));
            set_row_visible(&duration, true)?;
        }
        None => set_row_visible(&duration, false)?,
    }

    let link = dom::by_id(document, "popup-link")?;
    match &view.link {
        Some(target) => {
            match link.dyn_ref::<HtmlAnchorElement>() {
                Some(anchor) => anchor.set_href(&target.href),
                None => link.set_attribute("href", &target.href)?,
            }
            link.set_text_content(Some(target.label));
            set_row_visible(&link, true)?;
        }
        None => set_row_visible(&link, false)?,
    }

    dom::by_id(document, OVERLAY_ID)?
        .class_list()
        .add_1(ACTIVE_CLASS)?;
    set_body_overflow(document, "hidden")
}

pub fn hide(document: &Document) -> DomResult<()> {
    dom::by_id(document, OVERLAY_ID)?
        .class_list()
        .remove_1(ACTIVE_CLASS)?;
    set_body_overflow(document, "auto")
}

fn set_text(document: &Document, id: &str, text: &str) -> DomResult<()> {
    dom::by_id(document, id)?.set_text_content(Some(text));
    Ok(())
}

fn set_row_visible(field: &Element, visible: bool) -> DomResult<()> {
    let row = field
        .closest(DETAIL_ROW)?
        .ok_or_else(|| DomError::Missing(format!("{DETAIL_ROW} around #{}", field.id())))?;
    dom::set_style(&row, "display", if visible { "flex" } else { "none" })
}

fn set_body_overflow(document: &Document, value: &str) -> DomResult<()> {
    let body = document
        .body()
        .ok_or_else(|| DomError::Missing("body".to_string()))?;
    body.style().set_property("overflow", value)?;
    Ok(())
}
