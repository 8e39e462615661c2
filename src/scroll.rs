//! Scroll positioning and the cross-page navigation handoff.
//!
//! Inner pages link back to the home page with a URL fragment
//! (`/#portfolio`). The home page reads that fragment on mount, skips its
//! entrance animations and scrolls to the named section, so its initial
//! render is a pure function of the URL instead of an ambient storage flag.

use web_sys::ScrollToOptions;

/// Instantly scroll so that the section with `id` is centered in the
/// viewport. Silently does nothing when the section is missing.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(section) = document.get_element_by_id(id) else {
        return;
    };

    let rect = section.get_bounding_client_rect();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let top = centered_scroll_top(scroll_y, rect.top(), rect.height(), viewport_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Target scroll offset that centers a section of `height` whose top edge is
/// `section_top` below the current viewport top.
fn centered_scroll_top(scroll_y: f64, section_top: f64, height: f64, viewport_height: f64) -> f64 {
    scroll_y + section_top - (viewport_height - height) / 2.0
}

/// Section name carried in a URL fragment, if any.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let section = hash.trim_start_matches('#');
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

/// Fragment of the current browser location.
pub fn current_hash_section() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    section_from_hash(&hash).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_parsing() {
        assert_eq!(section_from_hash("#portfolio"), Some("portfolio"));
        assert_eq!(section_from_hash("portfolio"), Some("portfolio"));
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash(""), None);
    }

    #[test]
    fn centered_scroll_centers_short_sections() {
        // Viewport 1000px, section 400px starting 800px below the viewport
        // top while already scrolled 200px: section center must land at the
        // viewport center.
        let top = centered_scroll_top(200.0, 800.0, 400.0, 1000.0);
        assert_eq!(top, 700.0);
        // section top ends up at 800 + 200 - 700 = 300 => center at 500.
    }

    #[test]
    fn centered_scroll_centers_tall_sections_too() {
        // Section center 1500, viewport center after scrolling 1000 + 500.
        let top = centered_scroll_top(0.0, 500.0, 2000.0, 1000.0);
        assert_eq!(top, 1000.0);
    }
}
