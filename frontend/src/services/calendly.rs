//! Calendly inline widget behind the scheduling launcher.

use gloo::utils::{document, window};
use js_sys::{Function, Reflect};
use serde_json::{json, Value};
use shared::scheduling::{SchedulingRequest, SchedulingWidgetLoader, ScriptLoaded};
use shared::ScriptError;
use wasm_bindgen::{JsCast, JsValue};

use crate::services::gtag::to_js;
use crate::services::{script, Logger};

pub const SCRIPT_ID: &str = "calendly-script";
pub const SCRIPT_SRC: &str = "https://assets.calendly.com/assets/external/widget.js";

fn interop(message: impl Into<String>) -> ScriptError {
    ScriptError::Interop(message.into())
}

/// Options object passed to `Calendly.initInlineWidget`, minus the parent element
pub fn widget_options(request: &SchedulingRequest) -> Value {
    json!({
        "url": request.url,
        "prefill": {
            "name": request.prefill.name,
            "email": request.prefill.email,
            "customAnswers": { "a1": request.prefill.note },
        },
        "utm": {},
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalendlyLoader;

impl CalendlyLoader {
    fn calendly(&self) -> Option<JsValue> {
        Reflect::get(&window(), &JsValue::from_str("Calendly"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }
}

impl SchedulingWidgetLoader for CalendlyLoader {
    fn inject_script(&self, on_loaded: ScriptLoaded) {
        if script::is_present(SCRIPT_ID, SCRIPT_SRC) {
            if self.calendly().is_some() {
                on_loaded(Ok(()));
                return;
            }
            // A tag that never defined the global would leave a duplicate behind
            Logger::warn_with_component("calendly", "Replacing script tag without window.Calendly");
            script::remove(SCRIPT_ID, SCRIPT_SRC);
        }
        script::inject(SCRIPT_ID, SCRIPT_SRC, on_loaded);
    }

    fn open_inline(&self, request: &SchedulingRequest) -> Result<(), ScriptError> {
        let calendly = self
            .calendly()
            .ok_or_else(|| interop("window.Calendly is not defined"))?;

        let container = document()
            .get_element_by_id(&request.container_id)
            .ok_or_else(|| interop(format!("#{} not found", request.container_id)))?;
        container.set_inner_html("");

        let options = to_js(&widget_options(request)).map_err(|e| interop(e.to_string()))?;
        Reflect::set(&options, &JsValue::from_str("parentElement"), &container)
            .map_err(|e| interop(format!("{:?}", e)))?;

        let init = Reflect::get(&calendly, &JsValue::from_str("initInlineWidget"))
            .map_err(|e| interop(format!("{:?}", e)))?
            .dyn_into::<Function>()
            .map_err(|_| interop("Calendly.initInlineWidget is not a function"))?;
        init.call1(&calendly, &options)
            .map_err(|e| interop(format!("{:?}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::scheduling::SchedulingPrefill;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_widget_options_prefill() {
        let request = SchedulingRequest {
            url: "https://calendly.com/liceo-lumen/visita".to_string(),
            container_id: "calendly-container".to_string(),
            prefill: SchedulingPrefill {
                name: "Ana Gomez".to_string(),
                email: "ana@x.com".to_string(),
                note: "Hola".to_string(),
            },
        };

        let options = widget_options(&request);
        assert_eq!(options["url"], "https://calendly.com/liceo-lumen/visita");
        assert_eq!(options["prefill"]["name"], "Ana Gomez");
        assert_eq!(options["prefill"]["customAnswers"]["a1"], "Hola");
    }
}
