use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::hero_form::LeadForm;
use crate::config;
use crate::form::session::FormLocation;
use crate::variants::VariantCopy;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub copy: VariantCopy,
}

const BENEFITS: [&str; 4] = [
    "50+ Years Combined Experience",
    "Free Case Review",
    "No Fee Unless You Win",
    "Local Tennessee & Kentucky Experts",
];

/// Hero section: variant headline copy, benefit list, embedded lead form,
/// and a navbar that gains a solid background once the page is scrolled.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(window) = &window {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scroll_y > 50.0);
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let nav_class = if *is_scrolled { "top-nav scrolled" } else { "top-nav" };

    html! {
        <header class="hero-header">
            <style>{STYLE}</style>
            <nav class={nav_class}>
                <div class="nav-content">
                    <span class="nav-logo">{"George & George Disability Law"}</span>
                    <a href={config::OFFICE_PHONE_TEL} class="nav-phone">
                        {config::OFFICE_PHONE_DISPLAY}
                    </a>
                </div>
            </nav>
            <div class="hero-content">
                <div class="hero-copy">
                    <h1>{props.copy.headline}</h1>
                    <p class="subheadline">{props.copy.subheadline}</p>
                    <ul class="benefit-list">
                        {
                            BENEFITS.iter().map(|benefit| html! {
                                <li><span class="check">{"✓"}</span>{benefit}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <a href="#contact-form" class="hero-cta">{props.copy.cta}</a>
                </div>
                <div class="hero-form" id="contact-form">
                    <LeadForm location={FormLocation::Hero} />
                </div>
            </div>
        </header>
    }
}

const STYLE: &str = r#"
.hero-header {
    position: relative;
    width: 100%;
    min-height: 100vh;
    background: linear-gradient(rgba(16, 42, 67, 0.85), rgba(16, 42, 67, 0.85)),
        url('/assets/nashville-skyline.webp') center / cover no-repeat;
    overflow: hidden;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    background: transparent;
    transition: background 0.3s, box-shadow 0.3s;
}
.top-nav.scrolled {
    background: #102a43;
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #fff;
    font-size: 1.1rem;
    font-weight: 600;
}
.nav-phone {
    color: #fff;
    font-weight: 500;
    text-decoration: none;
}
.nav-phone:hover {
    color: #f0b429;
}
.hero-content {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 8rem 1.5rem 5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 1024px) {
    .hero-content {
        grid-template-columns: 1fr 1fr;
        min-height: calc(100vh - 8rem);
    }
}
.hero-copy h1 {
    font-size: 2.5rem;
    line-height: 1.15;
    color: #fff;
    margin-bottom: 1.5rem;
}
@media (min-width: 768px) {
    .hero-copy h1 {
        font-size: 3.25rem;
    }
}
.subheadline {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.9);
    margin-bottom: 2rem;
}
.benefit-list {
    list-style: none;
    display: grid;
    gap: 1rem;
    margin-bottom: 2rem;
    padding: 0;
}
.benefit-list li {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: rgba(255, 255, 255, 0.9);
}
.benefit-list .check {
    color: #f0b429;
}
.hero-cta {
    display: inline-block;
    background: #f0b429;
    color: #102a43;
    font-weight: 500;
    padding: 0.85rem 2rem;
    border-radius: 2px;
    text-decoration: none;
    transition: background 0.2s;
}
.hero-cta:hover {
    background: #de911d;
}
"#;
