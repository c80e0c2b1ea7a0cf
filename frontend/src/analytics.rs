use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::window;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    /// Ads conversion fired after a contact request goes through.
    Conversion {
        send_to: &'static str,
        value: f64,
        currency: &'static str,
    },
    Interaction {
        category: String,
        action: String,
        label: String,
    },
}

impl AnalyticsEvent {
    pub fn conversion() -> Self {
        AnalyticsEvent::Conversion {
            send_to: config::CONVERSION_SEND_TO,
            value: 1.0,
            currency: config::CONVERSION_CURRENCY,
        }
    }

    pub fn interaction(category: &str, action: &str, label: &str) -> Self {
        AnalyticsEvent::Interaction {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        }
    }
}

/// Fire-and-forget event sink. Implementations must not fail or block the
/// caller.
pub trait Analytics {
    fn track(&self, event: &AnalyticsEvent);
}

#[derive(Serialize)]
struct ConversionParams<'a> {
    send_to: &'a str,
    value: f64,
    currency: &'a str,
}

#[derive(Serialize)]
struct EventParams<'a> {
    event_category: &'a str,
    event_label: &'a str,
}

/// Forwards events to the page's `gtag` global when the tag is loaded.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gtag;

impl Gtag {
    fn function() -> Option<Function> {
        let window = window()?;
        Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn send<P: Serialize>(action: &str, params: &P) {
        let Some(gtag) = Self::function() else {
            return;
        };
        match serde_wasm_bindgen::to_value(params) {
            Ok(params) => {
                if let Err(e) = gtag.call3(
                    &JsValue::NULL,
                    &JsValue::from_str("event"),
                    &JsValue::from_str(action),
                    &params,
                ) {
                    log::warn!("gtag rejected event {}: {:?}", action, e);
                }
            }
            Err(e) => log::warn!("Could not encode analytics params: {}", e),
        }
    }
}

impl Analytics for Gtag {
    fn track(&self, event: &AnalyticsEvent) {
        match event {
            AnalyticsEvent::Conversion { send_to, value, currency } => {
                Self::send(
                    "conversion",
                    &ConversionParams {
                        send_to,
                        value: *value,
                        currency,
                    },
                );
            }
            AnalyticsEvent::Interaction { category, action, label } => {
                Self::send(
                    action,
                    &EventParams {
                        event_category: category,
                        event_label: label,
                    },
                );
                log::info!("Event tracked: {} {} {}", category, action, label);
            }
        }
    }
}

pub fn track(category: &str, action: &str, label: &str) {
    Gtag.track(&AnalyticsEvent::interaction(category, action, label));
}
