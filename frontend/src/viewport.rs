use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 300.0;
/// How far below the top edge a section counts as the one being read.
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// True when the whole box is inside a `width` x `height` viewport.
pub fn fully_visible(bounds: Bounds, width: f64, height: f64) -> bool {
    bounds.top >= 0.0 && bounds.left >= 0.0 && bounds.bottom <= height && bounds.right <= width
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section under the reading line. Later sections win when extents
/// overlap.
pub fn active_section(sections: &[SectionExtent], scroll_y: f64) -> Option<&str> {
    let line = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .filter(|s| line >= s.top && line < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER
}

pub fn carousel_layout(viewport_width: f64, cards: usize) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH && cards > 1
}

pub fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        top: rect.top(),
        left: rect.left(),
        bottom: rect.bottom(),
        right: rect.right(),
    }
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

pub fn is_in_viewport(element: &Element) -> bool {
    viewport_size()
        .map(|(width, height)| fully_visible(element_bounds(element), width, height))
        .unwrap_or(false)
}

/// Extents of every `section[id]` on the page, in document order.
pub fn page_sections() -> Vec<SectionExtent> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionExtent {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

pub fn smooth_scroll_to(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to the first element matching `selector`. Returns false
/// when nothing matched.
pub fn smooth_scroll_to_selector(selector: &str) -> bool {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());
    match target {
        Some(element) => {
            smooth_scroll_to(&element, ScrollLogicalPosition::Start);
            true
        }
        None => false,
    }
}

/// `existing` class attribute with `class` added once.
pub fn with_class(existing: &str, class: &str) -> String {
    if existing.split_whitespace().any(|c| c == class) {
        existing.to_string()
    } else if existing.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {}", existing.trim_end(), class)
    }
}

/// Tags `<body>` with `loaded`, which starts the entry transitions in CSS.
pub fn mark_page_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_class_name(&with_class(&body.class_name(), "loaded"));
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
