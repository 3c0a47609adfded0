use yew::prelude::*;

use crate::components::hero_form::LeadForm;
use crate::form::session::FormLocation;
use crate::hooks::use_in_view::{use_in_view, InViewOptions};

const BENEFITS: [&str; 6] = [
    "50+ Years Combined Experience",
    "Free Case Review",
    "No Fee Unless You Win",
    "Local Tennessee & Kentucky Experts",
    "Specialized Disability Law Focus",
    "Compassionate, Personal Service",
];

/// Bottom-of-page call to action with a second, fully independent lead form.
#[function_component(BottomCta)]
pub fn bottom_cta() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions {
        threshold: 0.1,
        trigger_once: true,
        ..Default::default()
    });

    let section_class = if in_view { "bottom-cta visible" } else { "bottom-cta" };

    html! {
        <section ref={section_ref} class={section_class}>
            <style>{STYLE}</style>
            <div class="section-inner">
                <div class="bottom-cta-copy">
                    <h2>{"Get Help With Your Disability Case Today"}</h2>
                    <p>{"Take the first step toward securing your benefits. Share your contact info below, and we'll reach out to discuss your case."}</p>
                    <ul class="benefit-list">
                        {
                            BENEFITS.iter().map(|benefit| html! {
                                <li><span class="check">{"✓"}</span>{benefit}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div class="bottom-cta-form">
                    <LeadForm location={FormLocation::Bottom} />
                </div>
            </div>
        </section>
    }
}

const STYLE: &str = r#"
.bottom-cta {
    position: relative;
    padding: 5rem 0;
    background: linear-gradient(rgba(16, 42, 67, 0.92), rgba(16, 42, 67, 0.92)),
        url('/assets/nashville-skyline.webp') center / cover no-repeat;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
.bottom-cta.visible {
    opacity: 1;
    transform: translateY(0);
}
.bottom-cta .section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 1024px) {
    .bottom-cta .section-inner { grid-template-columns: 1fr 1fr; }
}
.bottom-cta-copy h2 {
    font-size: 2.25rem;
    color: #fff;
    margin-bottom: 1rem;
}
.bottom-cta-copy p {
    font-size: 1.1rem;
    color: rgba(255, 255, 255, 0.85);
    margin-bottom: 1.5rem;
}
.bottom-cta .benefit-list {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 1rem;
}
.bottom-cta .benefit-list li {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: rgba(255, 255, 255, 0.9);
}
.bottom-cta .benefit-list .check {
    color: #f0b429;
}
"#;
