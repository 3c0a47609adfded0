//! Google Tag Manager event dispatch.
//!
//! Events are pushed onto `window.dataLayer` as plain objects. The sink is
//! behind a trait so tests can substitute a recording sink; the push-and-
//! forget contract is the same either way. Conversion values are business
//! policy constants used downstream for lead-quality scoring, not derived.

use std::rc::Rc;

use serde::Serialize;

use crate::form::session::FormLocation;

/// One dataLayer entry. Optional keys are omitted entirely, matching what
/// the tag-management script expects.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GtmEvent {
    pub event: &'static str,
    pub form_location: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_value: Option<u32>,
}

pub trait AnalyticsSink {
    fn push(&self, event: GtmEvent);
}

/// Default sink: `window.dataLayer`. Silently a no-op when the global is
/// absent (tag script not loaded, or no window at all).
pub struct DataLayer;

impl AnalyticsSink for DataLayer {
    fn push(&self, event: GtmEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let key = wasm_bindgen::JsValue::from_str("dataLayer");
        let Ok(layer) = js_sys::Reflect::get(window.as_ref(), &key) else {
            return;
        };
        use wasm_bindgen::JsCast;
        let Ok(layer) = layer.dyn_into::<js_sys::Array>() else {
            return;
        };
        if let Ok(value) = serde_wasm_bindgen::to_value(&event) {
            layer.push(&value);
        }
    }
}

#[derive(Clone)]
pub struct Gtm {
    sink: Rc<dyn AnalyticsSink>,
}

impl Gtm {
    pub fn new() -> Self {
        Self { sink: Rc::new(DataLayer) }
    }

    pub fn with_sink(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    /// Emitted exactly once per session, on the first field edit.
    pub fn track_form_start(&self, location: FormLocation) {
        self.sink.push(GtmEvent {
            event: "form_start",
            form_location: location.as_str(),
            form_step: Some(1),
            benefit_type: None,
            conversion_value: None,
        });
    }

    /// Emitted immediately before a non-final submission is dispatched.
    pub fn track_form_step_complete(&self, location: FormLocation, step: u32, benefit_type: &str) {
        self.sink.push(GtmEvent {
            event: "form_step_complete",
            form_location: location.as_str(),
            form_step: Some(step),
            benefit_type: non_empty(benefit_type),
            conversion_value: Some(if step == 1 { 5 } else { 15 }),
        });
    }

    /// Emitted immediately before the final-step submission is dispatched.
    pub fn track_form_submit(&self, location: FormLocation, benefit_type: &str) {
        self.sink.push(GtmEvent {
            event: "form_submit",
            form_location: location.as_str(),
            form_step: None,
            benefit_type: non_empty(benefit_type),
            conversion_value: Some(30),
        });
    }

    /// Best-effort signal when the page unloads mid-session.
    pub fn track_form_abandonment(&self, location: FormLocation, step: u32, benefit_type: &str) {
        self.sink.push(GtmEvent {
            event: "form_abandonment",
            form_location: location.as_str(),
            form_step: Some(step),
            benefit_type: non_empty(benefit_type),
            conversion_value: None,
        });
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<GtmEvent>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn push(&self, event: GtmEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    fn recording_gtm() -> (Gtm, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        (Gtm::with_sink(sink.clone()), sink)
    }

    #[test]
    fn step_one_completion_carries_weight_five() {
        let (gtm, sink) = recording_gtm();
        gtm.track_form_step_complete(FormLocation::Hero, 1, "SSDI");
        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "form_step_complete");
        assert_eq!(events[0].form_step, Some(1));
        assert_eq!(events[0].conversion_value, Some(5));
        assert_eq!(events[0].benefit_type.as_deref(), Some("SSDI"));
    }

    #[test]
    fn deeper_steps_carry_weight_fifteen() {
        let (gtm, sink) = recording_gtm();
        gtm.track_form_step_complete(FormLocation::Mobile, 2, "");
        let events = sink.events.borrow();
        assert_eq!(events[0].conversion_value, Some(15));
        assert_eq!(events[0].benefit_type, None);
    }

    #[test]
    fn final_submit_carries_weight_thirty() {
        let (gtm, sink) = recording_gtm();
        gtm.track_form_submit(FormLocation::Bottom, "SSI");
        let events = sink.events.borrow();
        assert_eq!(events[0].event, "form_submit");
        assert_eq!(events[0].form_location, "bottom");
        assert_eq!(events[0].conversion_value, Some(30));
    }

    #[test]
    fn start_and_abandonment_carry_no_conversion_value() {
        let (gtm, sink) = recording_gtm();
        gtm.track_form_start(FormLocation::Hero);
        gtm.track_form_abandonment(FormLocation::Hero, 1, "SSDI");
        let events = sink.events.borrow();
        assert_eq!(events[0].event, "form_start");
        assert_eq!(events[0].conversion_value, None);
        assert_eq!(events[1].event, "form_abandonment");
        assert_eq!(events[1].form_step, Some(1));
        assert_eq!(events[1].conversion_value, None);
    }

    #[test]
    fn wire_shape_uses_camel_case_and_omits_absent_keys() {
        let value = serde_json::to_value(GtmEvent {
            event: "form_start",
            form_location: "hero",
            form_step: Some(1),
            benefit_type: None,
            conversion_value: None,
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["event"], "form_start");
        assert_eq!(object["formLocation"], "hero");
        assert_eq!(object["formStep"], 1);
        assert!(!object.contains_key("benefitType"));
        assert!(!object.contains_key("conversionValue"));
    }
}
