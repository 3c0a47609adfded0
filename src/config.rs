#[cfg(debug_assertions)]
pub fn submission_endpoint() -> &'static str {
    "http://localhost:3001/lead-intake"  // Local webhook stub when running locally
}

#[cfg(not(debug_assertions))]
pub fn submission_endpoint() -> &'static str {
    // Spreadsheet-backed webhook. Cross-origin and opaque: we never read the
    // response, only transport failures are observable.
    "https://script.google.com/macros/s/AKfycbyGgLeadIntakeWebhookDeployment/exec"
}

pub const OFFICE_PHONE_DISPLAY: &str = "(615) 451-1550";
pub const OFFICE_PHONE_TEL: &str = "tel:+16154511550";
