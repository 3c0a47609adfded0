use yew::prelude::*;

use crate::hooks::use_in_view::{use_in_view, InViewOptions};

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Extensive experience", " in Social Security Disability law, helping hundreds of clients"),
    ("Personal approach", " to every case, ensuring clients get the individualized attention they deserve"),
    ("Proven track record", " of successful appeals and hearings before Administrative Law Judges"),
    ("Compassionate advocacy", " that treats clients with the dignity and respect they deserve"),
];

#[function_component(About)]
pub fn about() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions {
        threshold: 0.1,
        trigger_once: true,
        ..Default::default()
    });

    let section_class = if in_view { "about-section visible" } else { "about-section" };

    html! {
        <section ref={section_ref} class={section_class} id="about">
            <style>{STYLE}</style>
            <div class="section-inner">
                <div class="about-portrait">
                    <img src="/assets/chris-about-headshot.png" alt="Attorney Chris George" />
                </div>
                <div class="about-copy">
                    <h2>{"Meet Attorney Chris George"}</h2>
                    <p class="about-lede">
                        {"With over two decades of experience in disability law, Chris George has dedicated his career to helping individuals navigate the complex Social Security Disability system and secure the benefits they deserve."}
                    </p>
                    <ul class="about-highlights">
                        {
                            HIGHLIGHTS.iter().map(|(lead, rest)| html! {
                                <li>
                                    <span class="check">{"✓"}</span>
                                    <p><strong>{*lead}</strong>{*rest}</p>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
        </section>
    }
}

const STYLE: &str = r#"
.about-section {
    padding: 5rem 0;
    background: #f0f4f8;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.about-section.visible {
    opacity: 1;
    transform: translateY(0);
}
.about-section .section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 1024px) {
    .about-section .section-inner { grid-template-columns: 1fr 1fr; }
}
.about-portrait {
    display: flex;
    justify-content: center;
}
.about-portrait img {
    width: 400px;
    height: 400px;
    max-width: 100%;
    border-radius: 50%;
    object-fit: cover;
}
.about-copy h2 {
    font-size: 2.25rem;
    color: #102a43;
    margin-bottom: 1rem;
}
.about-lede {
    font-size: 1.1rem;
    color: #334e68;
    margin-bottom: 1.5rem;
}
.about-highlights {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 1rem;
}
.about-highlights li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.about-highlights .check {
    color: #f0b429;
    margin-top: 0.15rem;
}
.about-highlights p {
    color: #334e68;
}
"#;
