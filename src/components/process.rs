use yew::prelude::*;

use crate::hooks::use_in_view::{use_in_view, InViewOptions};

const STEPS: [(&str, &str); 4] = [
    (
        "Free Case Review",
        "We'll evaluate your case at no cost, explain your options, and develop a strategy tailored to your situation.",
    ),
    (
        "Application & Documentation",
        "We handle all paperwork, gather medical evidence, and ensure your application is complete and compelling.",
    ),
    (
        "Appeals & Hearings",
        "If needed, we'll appeal denials and represent you at hearings, using our expertise to present your case effectively.",
    ),
    (
        "Ongoing Support",
        "We stay with you throughout the process, keeping you informed and fighting for the benefits you deserve.",
    ),
];

#[function_component(Process)]
pub fn process() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions {
        threshold: 0.1,
        trigger_once: true,
        ..Default::default()
    });

    let section_class = if in_view { "process-section visible" } else { "process-section" };

    html! {
        <section ref={section_ref} class={section_class} id="process">
            <style>{STYLE}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"How We Help You Win Your Case"}</h2>
                    <p>{"Our proven process has helped thousands of clients secure their disability benefits. Here's how we'll work together:"}</p>
                </div>
                <div class="step-grid">
                    {
                        STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                            <div class="step-card">
                                <div class="step-number">{index + 1}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="process-footer">
                    <p>{"Don't Wait to Get Help with Your Disability Claim"}</p>
                    <a href="#contact-form" class="process-cta">{"Start Your Free Case Review"}</a>
                </div>
            </div>
        </section>
    }
}

const STYLE: &str = r#"
.process-section {
    padding: 5rem 0;
    background: #fff;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.process-section.visible {
    opacity: 1;
    transform: translateY(0);
}
.process-section .section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.process-section .section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.process-section .section-heading h2 {
    font-size: 2.25rem;
    color: #102a43;
    margin-bottom: 1rem;
}
.process-section .section-heading p {
    font-size: 1.1rem;
    color: #486581;
    max-width: 48rem;
    margin: 0 auto;
}
.step-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}
@media (min-width: 768px) {
    .step-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .step-grid { grid-template-columns: repeat(4, 1fr); }
}
.step-card {
    background: #fff;
    border: 1px solid #d9e2ec;
    border-radius: 8px;
    padding: 1.5rem;
    box-shadow: 0 4px 12px rgba(16, 42, 67, 0.08);
    height: 100%;
}
.step-number {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background: rgba(240, 180, 41, 0.15);
    color: #de911d;
    font-weight: 600;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}
.step-card h3 {
    font-size: 1.15rem;
    color: #102a43;
    margin-bottom: 0.5rem;
}
.step-card p {
    color: #486581;
}
.process-footer {
    margin-top: 4rem;
    text-align: center;
}
.process-footer p {
    font-size: 1.1rem;
    color: #102a43;
    font-weight: 500;
    margin-bottom: 1rem;
}
.process-cta {
    display: inline-block;
    background: #f0b429;
    color: #102a43;
    font-weight: 500;
    padding: 0.85rem 2rem;
    border-radius: 8px;
    text-decoration: none;
    transition: background 0.2s;
}
.process-cta:hover {
    background: #de911d;
}
"#;
