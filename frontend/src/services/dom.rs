//! Small wrappers over `web_sys` used across pages.

use anyhow::{anyhow, Result};
use gloo::utils::{body, document, window};
use wasm_bindgen::JsValue;

/// Viewport width at or below which the mobile layouts are used
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_mobile() -> bool {
    viewport_width() <= MOBILE_BREAKPOINT_PX
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX + 1.0)
}

/// `(viewport height, scroll offset, document height)`
pub fn scroll_metrics() -> (f64, f64, f64) {
    let window = window();
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default();
    let scroll_y = window.scroll_y().unwrap_or_default();
    let page = document()
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default();
    (viewport, scroll_y, page)
}

/// Locks or releases page scrolling behind an overlay
pub fn set_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    if let Err(e) = body().style().set_property("overflow", overflow) {
        log::warn!("Could not set body overflow: {:?}", e);
    }
}

/// Opens `url` in a new tab
pub fn open_external(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(anyhow!("empty url"));
    }
    window()
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| anyhow!("window.open failed: {:?}", e))?;
    Ok(())
}

/// Navigates the current tab, used for `mailto:` and `tel:` links
pub fn set_location(href: &str) -> Result<()> {
    window()
        .location()
        .set_href(href)
        .map_err(|e| anyhow!("could not navigate to {}: {:?}", href, e))
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Uniform random number in `[0, 1)`
pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{}", value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_open_external_rejects_blank_url() {
        assert!(open_external("  ").is_err());
    }

    #[wasm_bindgen_test]
    fn test_random_range() {
        let value = random();
        assert!((0.0..1.0).contains(&value));
    }
}
