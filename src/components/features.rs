use yew::prelude::*;

use crate::hooks::use_in_view::{use_in_view, InViewOptions};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 8] = [
    Feature {
        title: "Specialized Disability Law Expertise",
        description: "Our practice is 100% focused on Social Security Disability law, ensuring you get the most knowledgeable representation possible.",
    },
    Feature {
        title: "50+ Years Combined Experience",
        description: "With over five decades of combined experience, we've successfully helped thousands of clients secure their disability benefits.",
    },
    Feature {
        title: "Personal Attention",
        description: "You'll work directly with our experienced attorneys who will guide you through every step of your disability claim.",
    },
    Feature {
        title: "Timely Case Handling",
        description: "We understand the urgency of your situation and work efficiently to move your case forward as quickly as possible.",
    },
    Feature {
        title: "No Fee Unless You Win",
        description: "We only get paid if we win your case. There are no upfront costs or hidden fees – guaranteed.",
    },
    Feature {
        title: "Local Tennessee & Kentucky Expertise",
        description: "We know the local Social Security offices, judges, and processes, giving you a significant advantage.",
    },
    Feature {
        title: "Full-Service Representation",
        description: "From initial application to appeals and hearings, we handle every aspect of your disability claim.",
    },
    Feature {
        title: "Compassionate Advocacy",
        description: "We treat every client with the respect and compassion they deserve while fighting tirelessly for their benefits.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions {
        threshold: 0.1,
        trigger_once: true,
        ..Default::default()
    });

    let section_class = if in_view {
        "features-section visible"
    } else {
        "features-section"
    };

    html! {
        <section ref={section_ref} class={section_class}>
            <style>{STYLE}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Why Choose George & George Disability Law?"}</h2>
                    <p>{"With over 50 years of combined experience, we've helped thousands of Tennessee and Kentucky residents secure their disability benefits."}</p>
                </div>
                <div class="feature-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

const STYLE: &str = r#"
.features-section {
    padding: 5rem 0;
    background: #fff;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.features-section.visible {
    opacity: 1;
    transform: translateY(0);
}
.features-section .section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.features-section .section-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.features-section .section-heading h2 {
    font-size: 2.25rem;
    color: #102a43;
    margin-bottom: 1rem;
}
.features-section .section-heading p {
    font-size: 1.1rem;
    color: #486581;
    max-width: 48rem;
    margin: 0 auto;
}
.feature-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}
@media (min-width: 768px) {
    .feature-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .feature-grid { grid-template-columns: repeat(4, 1fr); }
}
.feature-card {
    background: #fff;
    border: 1px solid #d9e2ec;
    border-radius: 8px;
    padding: 1.5rem;
    box-shadow: 0 4px 12px rgba(16, 42, 67, 0.08);
    transition: box-shadow 0.2s;
}
.feature-card:hover {
    box-shadow: 0 8px 24px rgba(16, 42, 67, 0.12);
}
.feature-card h3 {
    font-size: 1.15rem;
    color: #102a43;
    margin-bottom: 0.5rem;
}
.feature-card p {
    color: #486581;
}
"#;
