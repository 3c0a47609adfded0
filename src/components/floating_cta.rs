use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::mobile_form::MobileForm;
use crate::config;

const MOBILE_BREAKPOINT: f64 = 768.0;

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

fn bar_should_show() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let window_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|element| element.scroll_height() as f64)
        .unwrap_or(0.0);

    // Visible after 20% of a viewport of scroll, hidden near the footer.
    let show_threshold = window_height * 0.2;
    let hide_threshold = document_height - window_height - 100.0;
    scroll_y > show_threshold && scroll_y < hide_threshold
}

/// Sticky call/consultation bar shown only on narrow viewports while the
/// reader is mid-page. The consultation button opens the three-step overlay.
#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let is_visible = use_state(bar_should_show);
    let is_mobile = use_state(viewport_is_mobile);
    let form_open = use_state(|| false);

    {
        let is_visible = is_visible.clone();
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = {
                    let is_visible = is_visible.clone();
                    Closure::wrap(Box::new(move || {
                        is_visible.set(bar_should_show());
                    }) as Box<dyn FnMut()>)
                };
                let resize_callback = Closure::wrap(Box::new(move || {
                    is_mobile.set(viewport_is_mobile());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: MouseEvent| form_open.set(true))
    };
    let close_form = {
        let form_open = form_open.clone();
        Callback::from(move |_| form_open.set(false))
    };

    if !*is_mobile {
        return html! {};
    }

    html! {
        <>
            {
                if *is_visible {
                    html! {
                        <div class="floating-cta">
                            <style>{STYLE}</style>
                            <div class="floating-cta-bar">
                                <a href={config::OFFICE_PHONE_TEL} class="call-button">
                                    {"Call Now"}
                                </a>
                                <button class="form-button" onclick={open_form}>
                                    {"Free Consultation"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <MobileForm is_open={*form_open} on_close={close_form} />
        </>
    }
}

const STYLE: &str = r#"
.floating-cta {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 40;
}
.floating-cta-bar {
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem;
    background: #fff;
    border-top: 1px solid #d9e2ec;
}
.floating-cta .call-button,
.floating-cta .form-button {
    flex: 1;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    font-size: 0.9rem;
    font-weight: 500;
    padding: 0.75rem;
    border-radius: 2px;
    white-space: nowrap;
    cursor: pointer;
    text-decoration: none;
}
.floating-cta .call-button {
    background: #f0b429;
    color: #102a43;
}
.floating-cta .form-button {
    background: #102a43;
    color: #fff;
    border: none;
}
@media (min-width: 768px) {
    .floating-cta { display: none; }
}
"#;
