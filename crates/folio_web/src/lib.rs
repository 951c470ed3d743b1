//! Browser bridge for the folio portfolio page.
//! Applies `folio_core` views to the DOM and feeds DOM events back to it.

pub mod api;
pub mod dom;
pub mod loader;
pub mod logging;
pub mod page;
pub mod popup;
pub mod render;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

/// Module entry point: installs logging, then mounts once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let requested = document
        .document_element()
        .and_then(|root| root.get_attribute(logging::LEVEL_ATTRIBUTE));
    logging::init_console_logging(logging::level_from_attribute(requested.as_deref()));

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event| {
            if let Err(err) = api::mount(document) {
                log::error!("event=mount module=web status=error error={err}");
            }
        })
        .forget();
        return Ok(());
    }

    api::mount(document).map_err(JsValue::from)
}
