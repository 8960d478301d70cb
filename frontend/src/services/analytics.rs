use log::debug;
use wasm_bindgen::{JsCast, JsValue};

use crate::registration::pipeline::{EventParams, Telemetry};

/// Google Analytics through the page's global `gtag` function. Ad blockers
/// routinely remove it, so its presence is checked on every event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gtag;

impl Gtag {
    fn function() -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl Telemetry for Gtag {
    fn event(&self, name: &str, params: &EventParams) {
        let Some(gtag) = Self::function() else {
            debug!("gtag not loaded, dropping event {}", name);
            return;
        };
        let params = match serde_wasm_bindgen::to_value(params) {
            Ok(params) => params,
            Err(e) => {
                debug!("could not encode params for {}: {}", name, e);
                return;
            }
        };
        if let Err(e) = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(name), &params) {
            debug!("gtag threw on {}: {:?}", name, e);
        }
    }
}
