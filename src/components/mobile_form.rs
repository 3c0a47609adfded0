use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::form::lead_form::use_lead_form;
use crate::form::session::{Field, FormLocation};

#[derive(Properties, PartialEq)]
pub struct MobileFormProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Full-screen three-step overlay used from the floating CTA on narrow
/// viewports. One field per screen; closes itself after the post-success
/// auto-reset.
#[function_component(MobileForm)]
pub fn mobile_form(props: &MobileFormProps) -> Html {
    let on_close = props.on_close.clone();
    let after_reset = {
        let on_close = on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let form = use_lead_form(FormLocation::Mobile, 3, 3_000, Some(after_reset));
    let session = (*form.session).clone();

    if !props.is_open {
        return html! {};
    }

    let edit_input = |field: Field| {
        let on_edit = form.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let edit_select = |field: Field| {
        let on_edit = form.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((field, select.value()));
        })
    };

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let step_field = match session.step {
        1 => html! {
            <label>
                <span>{"Phone Number"}</span>
                <input
                    type="tel"
                    required=true
                    placeholder="(___) ___-____"
                    value={session.fields.phone.clone()}
                    oninput={edit_input(Field::Phone)}
                    disabled={session.submitting}
                />
            </label>
        },
        2 => html! {
            <label>
                <span>{"Email Address"}</span>
                <input
                    type="email"
                    required=true
                    placeholder="your@email.com"
                    value={session.fields.email.clone()}
                    oninput={edit_input(Field::Email)}
                    disabled={session.submitting}
                />
            </label>
        },
        _ => html! {
            <label>
                <span>{"Select Benefit Type"}</span>
                <select
                    required=true
                    onchange={edit_select(Field::BenefitType)}
                    disabled={session.submitting}
                >
                    <option value="" selected={session.fields.benefit_type.is_empty()}>{"Select One"}</option>
                    <option value="SSDI" selected={session.fields.benefit_type == "SSDI"}>{"Social Security Disability (SSDI)"}</option>
                    <option value="SSI" selected={session.fields.benefit_type == "SSI"}>{"Supplemental Security Income (SSI)"}</option>
                    <option value="Both" selected={session.fields.benefit_type == "Both"}>{"Both SSDI & SSI"}</option>
                    <option value="Unknown" selected={session.fields.benefit_type == "Unknown"}>{"Not Sure"}</option>
                </select>
            </label>
        },
    };

    html! {
        <div class="mobile-form-overlay">
            <style>{STYLE}</style>
            <div class="mobile-form-inner">
                <div class="mobile-form-header">
                    <h2>{"Free Consultation"}</h2>
                    <button class="close-button" onclick={close}>{"✕"}</button>
                </div>
                {
                    if session.succeeded {
                        html! {
                            <div class="mobile-form-success">
                                <h3>{"Thank You!"}</h3>
                                <p>{"We'll be in touch shortly."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form onsubmit={form.on_submit.clone()}>
                                {
                                    if let Some(error) = session.last_error.as_ref() {
                                        html! { <div class="mobile-form-error">{error}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                { step_field }
                                <button type="submit" disabled={session.submitting}>
                                    {
                                        if session.submitting {
                                            "Submitting..."
                                        } else if session.step == 3 {
                                            "Submit"
                                        } else {
                                            "Continue"
                                        }
                                    }
                                </button>
                                <div class="step-dots">
                                    {
                                        (1..=3u32).map(|i| {
                                            let class = if i == session.step { "dot active" } else { "dot" };
                                            html! { <div class={class}></div> }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}

const STYLE: &str = r#"
.mobile-form-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: #fff;
}
.mobile-form-inner {
    min-height: 100vh;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
}
.mobile-form-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 2rem;
}
.mobile-form-header h2 {
    font-size: 1.5rem;
    color: #102a43;
}
.close-button {
    background: none;
    border: none;
    font-size: 1.25rem;
    padding: 0.5rem;
    cursor: pointer;
    color: #102a43;
}
.mobile-form-inner form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.mobile-form-inner label span {
    display: block;
    font-size: 1.1rem;
    margin-bottom: 0.5rem;
    color: #102a43;
}
.mobile-form-inner input,
.mobile-form-inner select {
    width: 100%;
    padding: 1rem;
    border: 1px solid #d9e2ec;
    border-radius: 2px;
    font-size: 1.1rem;
    background: #fff;
}
.mobile-form-inner button[type="submit"] {
    background: #f0b429;
    color: #102a43;
    font-weight: 500;
    font-size: 1.1rem;
    padding: 1rem;
    border: none;
    border-radius: 2px;
    cursor: pointer;
}
.mobile-form-inner button[type="submit"]:disabled {
    opacity: 0.7;
}
.mobile-form-error {
    background: #ffe3e3;
    color: #ab091e;
    border-radius: 2px;
    padding: 0.75rem 1rem;
    font-size: 0.95rem;
}
.mobile-form-success {
    text-align: center;
    padding: 2rem 1.5rem;
    background: #e3f9e5;
    border-radius: 2px;
}
.mobile-form-success h3 {
    font-size: 1.25rem;
    color: #18981d;
    margin-bottom: 0.5rem;
}
.mobile-form-success p {
    color: #18981d;
}
.step-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    padding-top: 1rem;
}
.dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #d9e2ec;
}
.dot.active {
    background: #f0b429;
}
"#;
