use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::form::lead_form::use_lead_form;
use crate::form::session::{Field, FormLocation};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub location: FormLocation,
}

/// Two-step lead-capture form, embedded in the hero and the bottom CTA.
/// Step 1 collects contact details and posts a partial lead, step 2
/// completes the inquiry.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let location = props.location;
    let form = use_lead_form(location, 2, 5_000, None);
    let session = (*form.session).clone();

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

    let edit_textarea = |field: Field| {
        let on_edit = form.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((field, textarea.value()));
        })
    };

    if session.succeeded {
        return html! {
            <div class="lead-form lead-form-success">
                <style>{STYLE}</style>
                <div class="success-check">{"✓"}</div>
                <h3>{"Thank You for Reaching Out!"}</h3>
                <p>{"We'll contact you within 24 hours to discuss your case."}</p>
                <button class="reset-link" onclick={form.on_reset.clone()}>
                    {"Submit another inquiry"}
                </button>
            </div>
        };
    }

    let heading = match location {
        FormLocation::Bottom => "Start Your Free Consultation",
        _ => "Get Your Free Case Review",
    };
    let subtitle = if session.step == 1 {
        "Quick 30-second evaluation to check your eligibility."
    } else {
        "Tell us more about your case."
    };

    html! {
        <div class="lead-form">
            <style>{STYLE}</style>
            <div class="lead-form-heading">
                <h2>{heading}</h2>
                <p>{subtitle}</p>
            </div>
            {
                if let Some(error) = session.last_error.as_ref() {
                    html! { <div class="form-error">{error}</div> }
                } else {
                    html! {}
                }
            }
            {
                if session.step == 1 {
                    html! {
                        <form onsubmit={form.on_submit.clone()}>
                            <input
                                type="tel"
                                placeholder="Phone Number*"
                                required=true
                                pattern="[0-9]{3}[0-9]{3}[0-9]{4}"
                                title="Please enter a valid 10-digit phone number"
                                value={session.fields.phone.clone()}
                                oninput={edit_input(Field::Phone)}
                                disabled={session.submitting}
                            />
                            <input
                                type="email"
                                placeholder="Email Address*"
                                required=true
                                value={session.fields.email.clone()}
                                oninput={edit_input(Field::Email)}
                                disabled={session.submitting}
                            />
                            <select
                                required=true
                                onchange={edit_select(Field::BenefitType)}
                                disabled={session.submitting}
                            >
                                <option value="" selected={session.fields.benefit_type.is_empty()}>{"Select Benefit Type*"}</option>
                                <option value="SSDI" selected={session.fields.benefit_type == "SSDI"}>{"Social Security Disability (SSDI)"}</option>
                                <option value="SSI" selected={session.fields.benefit_type == "SSI"}>{"Supplemental Security Income (SSI)"}</option>
                                <option value="UNSURE" selected={session.fields.benefit_type == "UNSURE"}>{"Not Sure/Need Help Deciding"}</option>
                            </select>
                            <button type="submit" disabled={session.submitting}>
                                { if session.submitting { "Checking Eligibility..." } else { "Continue →" } }
                            </button>
                        </form>
                    }
                } else {
                    html! {
                        <form onsubmit={form.on_submit.clone()}>
                            <input
                                type="text"
                                placeholder="Full Name*"
                                required=true
                                value={session.fields.name.clone()}
                                oninput={edit_input(Field::Name)}
                                disabled={session.submitting}
                            />
                            <textarea
                                placeholder="Brief description of your case*"
                                required=true
                                rows="4"
                                value={session.fields.message.clone()}
                                oninput={edit_textarea(Field::Message)}
                                disabled={session.submitting}
                            />
                            <button type="submit" disabled={session.submitting}>
                                { if session.submitting { "Sending..." } else { "Get Free Consultation" } }
                            </button>
                        </form>
                    }
                }
            }
            <p class="form-disclaimer">
                {"By submitting this form, you agree to be contacted about your case."}
            </p>
        </div>
    }
}

const STYLE: &str = r#"
.lead-form {
    width: 100%;
    background: #fff;
    border-radius: 4px;
    padding: 2rem;
    box-shadow: 0 8px 32px rgba(16, 42, 67, 0.15);
}
.lead-form-heading {
    text-align: center;
    margin-bottom: 1.5rem;
}
.lead-form-heading h2 {
    font-size: 1.5rem;
    color: #102a43;
    margin-bottom: 0.5rem;
}
.lead-form-heading p {
    color: #486581;
}
.lead-form form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.lead-form input,
.lead-form select,
.lead-form textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d9e2ec;
    border-radius: 2px;
    font-size: 1rem;
    outline: none;
    transition: border-color 0.2s;
    background: #fff;
}
.lead-form textarea {
    resize: none;
}
.lead-form input:focus,
.lead-form select:focus,
.lead-form textarea:focus {
    border-color: #102a43;
}
.lead-form button[type="submit"] {
    background: #f0b429;
    color: #102a43;
    font-weight: 500;
    font-size: 1rem;
    padding: 0.85rem 1.5rem;
    border: none;
    border-radius: 2px;
    cursor: pointer;
    transition: background 0.2s;
}
.lead-form button[type="submit"]:hover {
    background: #de911d;
}
.lead-form button[type="submit"]:disabled {
    opacity: 0.7;
    cursor: wait;
}
.form-error {
    background: #ffe3e3;
    color: #ab091e;
    border: 1px solid #facdcd;
    border-radius: 2px;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
    font-size: 0.95rem;
}
.form-disclaimer {
    font-size: 0.75rem;
    color: #829ab1;
    text-align: center;
    margin-top: 1rem;
}
.lead-form-success {
    text-align: center;
    padding: 3rem 1.5rem;
}
.lead-form-success .success-check {
    font-size: 3rem;
    color: #18981d;
    margin-bottom: 1rem;
}
.lead-form-success h3 {
    font-size: 1.5rem;
    color: #102a43;
    margin-bottom: 0.5rem;
}
.lead-form-success p {
    font-size: 1.1rem;
    color: #486581;
    margin-bottom: 1.5rem;
}
.reset-link {
    background: none;
    border: none;
    font-size: 0.9rem;
    text-decoration: underline;
    color: #486581;
    cursor: pointer;
}
.reset-link:hover {
    color: #102a43;
}
"#;
