use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>{STYLE}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3>{"Contact Us"}</h3>
                        <ul>
                            <li>
                                <a href={config::OFFICE_PHONE_TEL}>{config::OFFICE_PHONE_DISPLAY}</a>
                            </li>
                            <li>
                                <a
                                    href="https://maps.google.com/?q=665+Nashville+Pike,+Gallatin,+TN+37066"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"665 Nashville Pike"}<br />{"Gallatin, TN 37066"}
                                </a>
                            </li>
                            <li>
                                <a href="mailto:info@georgeandgeorge.com">{"info@georgeandgeorge.com"}</a>
                            </li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            <li><a href="#about">{"About Us"}</a></li>
                            <li><a href="#process">{"Our Process"}</a></li>
                            <li><a href="#testimonials">{"Testimonials"}</a></li>
                            <li><a href="#contact-form">{"Contact"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Legal"}</h3>
                        <ul>
                            <li><a href="/privacy">{"Privacy Policy"}</a></li>
                            <li><a href="/terms">{"Terms of Service"}</a></li>
                            <li><a href="/disclaimer">{"Legal Disclaimer"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <span class="footer-logo">{"George & George Disability Law"}</span>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} George & George Disability Law. All rights reserved.", year)}</p>
                </div>
            </div>
        </footer>
    }
}

const STYLE: &str = r#"
.site-footer {
    background: #102a43;
    color: #fff;
    padding: 3rem 0;
}
.footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}
@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}
.site-footer h3 {
    font-size: 1.1rem;
    margin-bottom: 1rem;
}
.site-footer ul {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 0.6rem;
}
.site-footer a {
    color: rgba(255, 255, 255, 0.85);
    text-decoration: none;
    transition: color 0.2s;
}
.site-footer a:hover {
    color: #f0b429;
}
.footer-logo {
    font-size: 1.1rem;
    font-weight: 600;
}
.footer-bottom {
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.85rem;
    color: rgba(255, 255, 255, 0.7);
}
"#;
