//! Thin DOM lookup helpers shared by renderers.
//!
//! # Invariants
//! - Missing markup is reported as `DomError`, never as a panic.
//! - Helpers only read or write what their name says; no hidden listeners.

use std::error::Error;
use std::fmt::{Display, Formatter};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub type DomResult<T> = Result<T, DomError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No window/document (not running in a browser page).
    NoDocument,
    /// Selector or id matched nothing.
    Missing(String),
    /// A DOM call threw.
    Js(String),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no browser document available"),
            Self::Missing(selector) => write!(f, "element not found: {selector}"),
            Self::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl Error for DomError {}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(value: DomError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub fn document() -> DomResult<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)
}

pub fn by_id(document: &Document, id: &str) -> DomResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{id}")))
}

pub fn query(root: &Element, selector: &str) -> DomResult<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

pub fn query_document(document: &Document, selector: &str) -> DomResult<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

/// Creates `<tag class="...">` with optional text content.
pub fn element(
    document: &Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> DomResult<Element> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    Ok(element)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> DomResult<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::Js(format!("<{}> is not an HTML element", element.tag_name())))?;
    html.style().set_property(property, value)?;
    Ok(())
}

/// Removes every child of `element`.
pub fn clear(element: &Element) {
    element.set_text_content(None);
}
