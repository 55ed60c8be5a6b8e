//! Thin wrappers over `web_sys` for the page-level lookups and scrolling the
//! components share. Absent browser objects degrade to no-ops.

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys::Reflect, window, Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

use crate::config::SECTION_SELECTOR;
use crate::navigation::{section_scroll_offset, AnchorTarget};
use crate::scroll_spy::SectionBounds;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Whether the window exposes a global constructor such as
/// `IntersectionObserver`.
pub fn has_global(name: &str) -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Bounds of every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    query_all_html(SECTION_SELECTOR)
        .into_iter()
        .filter(|section| !section.id().is_empty())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

fn header_height() -> Option<f64> {
    document()?
        .query_selector(".header")
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|header| f64::from(header.offset_height()))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_anchor(target: &AnchorTarget) {
    match target {
        AnchorTarget::Top => smooth_scroll_to(0.0),
        AnchorTarget::Section(id) => match html_element_by_id(id) {
            Some(section) => {
                let offset = section_scroll_offset(f64::from(section.offset_top()), header_height());
                smooth_scroll_to(offset);
            }
            None => debug!("No element #{} to scroll to", id),
        },
    }
}

pub fn scroll_into_view_centered(id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
