//! Injection of third-party `<script>` tags.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use gloo::events::EventListener;
use gloo::utils::document;
use shared::scheduling::ScriptLoaded;
use shared::ScriptError;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::services::dom::js_error;

/// Whether a script with this id, or this exact `src`, is already in the page
pub fn is_present(id: &str, src: &str) -> bool {
    let document = document();
    if document.get_element_by_id(id).is_some() {
        return true;
    }
    document
        .query_selector(&format!("script[src=\"{}\"]", src))
        .ok()
        .flatten()
        .is_some()
}

/// Removes every script matching this id or `src`
pub fn remove(id: &str, src: &str) {
    let document = document();
    if let Some(element) = document.get_element_by_id(id) {
        element.remove();
    }
    if let Ok(matches) = document.query_selector_all(&format!("script[src=\"{}\"]", src)) {
        for i in 0..matches.length() {
            if let Some(element) = matches.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                element.remove();
            }
        }
    }
}

type PendingCallback = Rc<RefCell<Option<ScriptLoaded>>>;

/// Appends an async script to `<head>` and reports load or error to `on_loaded`
pub fn inject(id: &str, src: &str, on_loaded: ScriptLoaded) {
    let callback: PendingCallback = Rc::new(RefCell::new(Some(on_loaded)));

    if let Err(e) = append_script(id, src, callback.clone()) {
        let pending = callback.borrow_mut().take();
        if let Some(on_loaded) = pending {
            on_loaded(Err(ScriptError::Interop(e.to_string())));
        }
    }
}

fn append_script(id: &str, src: &str, callback: PendingCallback) -> Result<()> {
    let document = document();
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a script"))?;
    script.set_id(id);
    script.set_src(src);
    script.set_async(true);

    let on_load = callback.clone();
    EventListener::once(&script, "load", move |_| {
        let pending = on_load.borrow_mut().take();
        if let Some(on_loaded) = pending {
            on_loaded(Ok(()));
        }
    })
    .forget();

    let on_error = callback;
    let failed_src = src.to_string();
    EventListener::once(&script, "error", move |_| {
        let pending = on_error.borrow_mut().take();
        if let Some(on_loaded) = pending {
            on_loaded(Err(ScriptError::LoadFailed { src: failed_src }));
        }
    })
    .forget();

    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    head.append_child(&script).map_err(js_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_ID: &str = "stale-widget-script";
    const TEST_SRC: &str = "https://assets.example.test/widget.js";

    #[wasm_bindgen_test]
    fn test_remove_clears_stale_script() {
        let document = document();
        let stale = document.create_element("script").unwrap();
        stale.set_id(TEST_ID);
        document.body().unwrap().append_child(&stale).unwrap();

        let by_src = document.create_element("script").unwrap();
        by_src.set_attribute("src", TEST_SRC).unwrap();
        by_src.set_attribute("type", "text/plain").unwrap();
        document.body().unwrap().append_child(&by_src).unwrap();

        assert!(is_present(TEST_ID, TEST_SRC));
        remove(TEST_ID, TEST_SRC);
        assert!(!is_present(TEST_ID, TEST_SRC));
    }
}
