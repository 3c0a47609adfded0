use chrono::Utc;
use gloo_net::http::Request;
use web_sys::{FormData, RequestMode};

use crate::form::session::{FormLocation, LeadFields};

/// Immutable snapshot sent over the wire for one step. A fresh payload is
/// built per attempt; a manual retry is a new payload, never a replay.
#[derive(Clone, PartialEq, Debug)]
pub struct SubmissionPayload {
    fields: LeadFields,
    location: FormLocation,
    is_partial: bool,
    timestamp: String,
}

impl SubmissionPayload {
    pub fn new(fields: &LeadFields, location: FormLocation, is_partial: bool) -> Self {
        Self {
            fields: fields.clone(),
            location,
            is_partial,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Every wire key, in order. Unset fields go out as empty strings so the
    /// receiving sheet always sees the full column set.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("phone", self.fields.phone.clone()),
            ("email", self.fields.email.clone()),
            ("benefitType", self.fields.benefit_type.clone()),
            ("name", self.fields.name.clone()),
            ("message", self.fields.message.clone()),
            ("location", self.location.as_str().to_string()),
            ("formType", self.location.form_type().to_string()),
            (
                "isPartialSubmission",
                if self.is_partial { "true" } else { "false" }.to_string(),
            ),
            ("timestamp", self.timestamp.clone()),
        ]
    }

    /// Fire-and-forget POST to the spreadsheet webhook.
    ///
    /// The request runs in no-cors mode, so the response is opaque: a 4xx/5xx
    /// from the endpoint is indistinguishable from success and is treated as
    /// success. Only transport-level failures surface as `Err`.
    pub async fn send(&self, endpoint: &str) -> Result<(), String> {
        let form = FormData::new().map_err(|_| "Browser does not support FormData".to_string())?;
        for (key, value) in self.entries() {
            form.append_with_str(key, &value)
                .map_err(|_| format!("Could not append form field '{}'", key))?;
        }

        Request::post(endpoint)
            .mode(RequestMode::NoCors)
            .body(form)
            .send()
            .await
            .map(|_response| ()) // opaque, nothing readable
            .map_err(|e| format!("Request failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> LeadFields {
        LeadFields {
            phone: "6155551234".into(),
            email: "a@b.com".into(),
            benefit_type: "SSDI".into(),
            name: String::new(),
            message: String::new(),
        }
    }

    fn entry<'a>(entries: &'a [(&'static str, String)], key: &str) -> &'a str {
        entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing key {}", key))
    }

    #[test]
    fn partial_payload_carries_all_keys() {
        let payload = SubmissionPayload::new(&sample_fields(), FormLocation::Hero, true);
        let entries = payload.entries();
        assert_eq!(entries.len(), 9);
        assert_eq!(entry(&entries, "phone"), "6155551234");
        assert_eq!(entry(&entries, "benefitType"), "SSDI");
        assert_eq!(entry(&entries, "location"), "hero");
        assert_eq!(entry(&entries, "formType"), "two-step");
        assert_eq!(entry(&entries, "isPartialSubmission"), "true");
        // Uncollected fields still go out, as empty strings.
        assert_eq!(entry(&entries, "name"), "");
        assert_eq!(entry(&entries, "message"), "");
    }

    #[test]
    fn final_payload_is_marked_complete() {
        let mut fields = sample_fields();
        fields.name = "Jane Doe".into();
        fields.message = "Denied twice, need help appealing".into();
        let payload = SubmissionPayload::new(&fields, FormLocation::Bottom, false);
        let entries = payload.entries();
        assert_eq!(entry(&entries, "isPartialSubmission"), "false");
        assert_eq!(entry(&entries, "location"), "bottom");
        assert_eq!(entry(&entries, "name"), "Jane Doe");
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let payload = SubmissionPayload::new(&sample_fields(), FormLocation::Mobile, true);
        let entries = payload.entries();
        assert!(chrono::DateTime::parse_from_rfc3339(entry(&entries, "timestamp")).is_ok());
        assert_eq!(entry(&entries, "formType"), "three-step");
        assert_eq!(entry(&entries, "location"), "mobile-form");
    }

    #[test]
    fn payload_is_a_snapshot_independent_of_later_edits() {
        let mut fields = sample_fields();
        let payload = SubmissionPayload::new(&fields, FormLocation::Hero, true);
        fields.phone = "0000000000".into();
        assert_eq!(entry(&payload.entries(), "phone"), "6155551234");
    }
}
