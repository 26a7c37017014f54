//! Google tag (`gtag.js`) behind the analytics relay.

use anyhow::{anyhow, Result};
use gloo::utils::{document, window};
use js_sys::{Array, Function, Reflect, JSON};
use serde_json::{json, Value};
use shared::analytics::{AnalyticsSink, PageInfo, TagCommand};
use shared::scheduling::ScriptLoaded;
use wasm_bindgen::{JsCast, JsValue};

use crate::services::dom::js_error;
use crate::services::logging::Logger;
use crate::services::script;

const COMPONENT: &str = "gtag";
const SCRIPT_ID: &str = "gtag-script";

/// Defines `window.dataLayer` and the queueing `window.gtag` function
const BOOTSTRAP: &str = "window.dataLayer = window.dataLayer || [];\
    window.gtag = window.gtag || function () { window.dataLayer.push(arguments); };";

pub fn script_src(tracking_id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={}", tracking_id)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GtagSink;

impl GtagSink {
    fn bootstrap(&self) -> Result<()> {
        Function::new_no_args(BOOTSTRAP)
            .call0(&JsValue::NULL)
            .map_err(js_error)?;
        Ok(())
    }

    fn call(&self, args: Array) -> Result<()> {
        let gtag = Reflect::get(&window(), &JsValue::from_str("gtag"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| anyhow!("window.gtag is not a function"))?;
        gtag.apply(&JsValue::NULL, &args).map_err(js_error)?;
        Ok(())
    }
}

/// Converts a JSON value into a plain JS object
pub fn to_js(value: &Value) -> Result<JsValue> {
    JSON::parse(&value.to_string()).map_err(js_error)
}

fn command_args(command: &TagCommand) -> Result<Array> {
    let args = Array::new();
    match command {
        TagCommand::Js => {
            args.push(&JsValue::from_str("js"));
            args.push(&js_sys::Date::new_0());
        }
        TagCommand::Config { tracking_id } => {
            args.push(&JsValue::from_str("config"));
            args.push(&JsValue::from_str(tracking_id));
            args.push(&to_js(&json!({ "send_page_view": false }))?);
        }
        TagCommand::Event { name, params } => {
            args.push(&JsValue::from_str("event"));
            args.push(&JsValue::from_str(name));
            args.push(&to_js(params)?);
        }
    }
    Ok(args)
}

impl AnalyticsSink for GtagSink {
    fn load_script(&self, tracking_id: &str, on_loaded: ScriptLoaded) {
        if let Err(e) = self.bootstrap() {
            on_loaded(Err(shared::ScriptError::Interop(e.to_string())));
            return;
        }

        let src = script_src(tracking_id);
        if script::is_present(SCRIPT_ID, &src) {
            Logger::debug_with_component(COMPONENT, "gtag script already present");
            on_loaded(Ok(()));
            return;
        }
        script::inject(SCRIPT_ID, &src, on_loaded);
    }

    fn send(&self, command: &TagCommand) {
        let result = command_args(command).and_then(|args| self.call(args));
        if let Err(e) = result {
            Logger::warn_with_component(COMPONENT, &format!("gtag call failed: {}", e));
        }
    }

    fn current_page(&self) -> PageInfo {
        let location = window().location();
        PageInfo {
            path: location.pathname().unwrap_or_else(|_| "/".to_string()),
            title: document().title(),
            location: location.href().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_script_src() {
        assert_eq!(
            script_src("G-ABC123"),
            "https://www.googletagmanager.com/gtag/js?id=G-ABC123"
        );
    }

    #[wasm_bindgen_test]
    fn test_event_args() {
        let args = command_args(&TagCommand::Event {
            name: "program_click".to_string(),
            params: json!({ "program_name": "Maternal" }),
        })
        .unwrap();

        assert_eq!(args.length(), 3);
        assert_eq!(args.get(1).as_string(), Some("program_click".to_string()));
        let params = args.get(2);
        let name = Reflect::get(&params, &JsValue::from_str("program_name")).unwrap();
        assert_eq!(name.as_string(), Some("Maternal".to_string()));
    }
}
