use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::form::status::FormStatus;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub status: FormStatus,
    pub on_dismiss: Callback<()>,
}

/// One-shot notification for a form outcome signalled via redirect.
/// Dismisses itself after a few seconds; the timer is dropped (cancelled)
/// if the toast unmounts first.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(()));
                move || drop(timer)
            },
            (),
        );
    }

    let (class, title, message) = match props.status {
        FormStatus::Success => (
            "toast toast-success",
            "Form Submitted Successfully",
            "Thank you! We'll be in touch with you shortly.",
        ),
        FormStatus::Error => (
            "toast toast-error",
            "Form Submission Error",
            "There was an error submitting your form. Please try again.",
        ),
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={class}>
            <style>{STYLE}</style>
            <div class="toast-body">
                <p class="toast-title">{title}</p>
                <p class="toast-message">{message}</p>
            </div>
            <button class="toast-close" onclick={dismiss}>{"✕"}</button>
        </div>
    }
}

const STYLE: &str = r#"
.toast {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 60;
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    max-width: 24rem;
    padding: 1rem 1.25rem;
    border-radius: 4px;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
    background: #fff;
    border-left: 4px solid #18981d;
}
.toast-error {
    border-left-color: #ab091e;
}
.toast-title {
    font-weight: 600;
    color: #102a43;
    margin-bottom: 0.25rem;
}
.toast-message {
    color: #486581;
    font-size: 0.95rem;
}
.toast-close {
    background: none;
    border: none;
    cursor: pointer;
    color: #829ab1;
    font-size: 0.9rem;
    padding: 0;
}
.toast-close:hover {
    color: #102a43;
}
"#;
