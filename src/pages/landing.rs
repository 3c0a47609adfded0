use yew::prelude::*;

use crate::components::about::About;
use crate::components::bottom_cta::BottomCta;
use crate::components::features::Features;
use crate::components::floating_cta::FloatingCta;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::process::Process;
use crate::components::testimonials::Testimonials;
use crate::variants::VariantCopy;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub copy: VariantCopy,
}

/// Full campaign page. Only the header copy varies between variants; every
/// other section renders identically.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{STYLE}</style>
            <Header copy={props.copy} />
            <main>
                <Features />
                <About />
                <Process />
                <Testimonials />
                <BottomCta />
            </main>
            <FloatingCta />
            <Footer />
        </div>
    }
}

const STYLE: &str = r#"
.landing-page {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    background: #fff;
    color: #102a43;
}
.landing-page * {
    box-sizing: border-box;
    margin: 0;
}
html {
    scroll-behavior: smooth;
}
"#;
