//! Scroll navigation over the rendered document.
//!
//! All anchor scrolls compensate for the fixed navigation bar with a single
//! global offset, so the math is identical for every section.

/// Height of the fixed navigation chrome, subtracted from every anchor
/// target so headings land below the bar.
pub const HEADER_OFFSET: f64 = 100.0;

/// Scroll distance past which a surface switches its navigation bar to the
/// solid chrome styling.
pub const CHROME_THRESHOLD: f64 = 50.0;

/// Offset the viewport scrolls to for an element whose bounding rect starts
/// at `element_top` while the document is already scrolled by
/// `page_y_offset`.
pub fn anchor_target_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll the primary viewport to its origin.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll_to(&window, 0.0);
    }
}

/// Smooth-scroll the primary viewport so the element tagged `anchor_id`
/// sits just below the fixed chrome. `"top"` bypasses the lookup and goes
/// to the origin; a missing element is a logged no-op.
pub fn scroll_to_anchor(anchor_id: &str) {
    if anchor_id == "top" {
        scroll_to_top();
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(anchor_id) else {
        leptos::logging::warn!("scroll target '{}' not found, ignoring", anchor_id);
        return;
    };

    let element_top = element.get_bounding_client_rect().top();
    let page_y_offset = window.page_y_offset().unwrap_or(0.0);
    smooth_scroll_to(&window, anchor_target_offset(element_top, page_y_offset));
}

/// Suppress or restore scrolling of the underlying document while an
/// overlay covers it.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_compensates_for_fixed_chrome() {
        // Element 800 units into an unscrolled document.
        assert_eq!(anchor_target_offset(800.0, 0.0), 700.0);
    }

    #[test]
    fn test_offset_accounts_for_current_scroll_position() {
        // Element 300 units below the viewport top of a document already
        // scrolled by 500.
        assert_eq!(anchor_target_offset(300.0, 500.0), 700.0);
    }

    #[test]
    fn test_scroll_helpers_are_no_ops_without_a_window() {
        scroll_to_top();
        scroll_to_anchor("about");
        set_body_scroll_locked(true);
    }
}
