//! JS-facing API for the portfolio page.
//!
//! # Responsibility
//! - Mount the page runtime once per document.
//! - Expose use-case functions that page markup or scripts may call directly.
//!
//! # Invariants
//! - Exported functions must not panic across the JS boundary.
//! - Calls made before `mount` are logged no-ops.

use crate::dom::{self, DomResult};
use crate::page::Page;
use folio_core::{
    core_version as core_version_inner, ping as ping_inner, CarouselId, Direction, PageEvent,
    SiteConfig,
};
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

const SITE_CONFIG_ID: &str = "site-config";

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

/// Builds the page runtime for `document`, installs listeners and starts the
/// data loads the markup asks for.
///
/// Mounting twice keeps the first runtime.
pub fn mount(document: Document) -> DomResult<()> {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        warn!("event=mount module=api status=skipped reason=already_mounted");
        return Ok(());
    }

    let config = read_site_config(&document);
    let page = Page::new(document, config);
    page.install_listeners();
    PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));

    if page.has_portfolio() {
        spawn_local(Rc::clone(&page).load_portfolio());
    }
    if page.business_list().is_some() {
        spawn_local(Rc::clone(&page).load_businesses());
    }
    info!("event=mount module=api status=ok");
    Ok(())
}

/// Reads the optional inline JSON override; falls back to defaults on error.
fn read_site_config(document: &Document) -> SiteConfig {
    let Ok(element) = dom::by_id(document, SITE_CONFIG_ID) else {
        return SiteConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match SiteConfig::from_json_str(&raw) {
        Ok(config) => {
            info!("event=config_load module=api status=ok source=inline");
            config
        }
        Err(err) => {
            warn!("event=config_load module=api status=error fallback=default error={err}");
            SiteConfig::default()
        }
    }
}

fn with_page(action: &str, f: impl FnOnce(&Rc<Page>)) {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match page {
        Some(page) => f(&page),
        None => warn!("event={action} module=api status=skipped reason=not_mounted"),
    }
}

/// Moves a carousel by one item.
///
/// # JS contract
/// - `carousel_id`: `projects-carousel`, `blogs-carousel`, or the short names
///   `projects` / `blogs`.
/// - `direction`: `-1` or `1`; anything else is logged and ignored.
#[wasm_bindgen]
pub fn move_carousel(carousel_id: &str, direction: i32) {
    let (Some(carousel), Some(direction)) =
        (CarouselId::parse(carousel_id), Direction::from_step(direction))
    else {
        warn!(
            "event=move_carousel module=api status=rejected carousel={carousel_id} direction={direction}"
        );
        return;
    };
    with_page("move_carousel", |page| {
        page.dispatch(PageEvent::Nav {
            carousel,
            direction,
        })
    });
}

/// Opens the details popup for an item; unknown ids do nothing.
#[wasm_bindgen]
pub fn show_popup(item_id: &str) {
    let item_id = item_id.to_string();
    with_page("show_popup", |page| {
        page.dispatch(PageEvent::CardClick(item_id))
    });
}

/// Closes the details popup and restores page scrolling.
#[wasm_bindgen]
pub fn close_popup() {
    with_page("close_popup", |page| page.dispatch(PageEvent::CloseClick));
}

/// Re-reads the technical-toggle checkbox and swaps the about text.
#[wasm_bindgen]
pub fn toggle_about_version() {
    with_page("toggle_about_version", |page| {
        if let Some(technical) = page.about_technical_checked() {
            page.dispatch(PageEvent::AboutToggled { technical });
        }
    });
}

/// Minimal health-check API for JS smoke integration.
#[wasm_bindgen]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version to JS.
#[wasm_bindgen]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
