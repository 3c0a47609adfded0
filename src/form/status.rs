use wasm_bindgen::JsValue;

/// Outcome signalled by an external redirect back to the page.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormStatus {
    Success,
    Error,
}

pub fn parse_form_status(raw: &str) -> Option<FormStatus> {
    match raw {
        "success" => Some(FormStatus::Success),
        "error" => Some(FormStatus::Error),
        _ => None,
    }
}

/// Strips the `formStatus` query parameter from the visible URL so a page
/// refresh does not re-trigger the notification. Best effort.
pub fn strip_form_status_param() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_both_outcomes() {
        assert_eq!(parse_form_status("success"), Some(FormStatus::Success));
        assert_eq!(parse_form_status("error"), Some(FormStatus::Error));
    }

    #[test]
    fn ignores_anything_else() {
        assert_eq!(parse_form_status(""), None);
        assert_eq!(parse_form_status("Success"), None);
        assert_eq!(parse_form_status("done"), None);
    }
}
