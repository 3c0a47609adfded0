use log::{info, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod variants;
mod form {
    pub mod lead_form;
    pub mod session;
    pub mod status;
    pub mod submit;
}
mod hooks {
    pub mod use_in_view;
}
mod components {
    pub mod about;
    pub mod bottom_cta;
    pub mod features;
    pub mod floating_cta;
    pub mod footer;
    pub mod header;
    pub mod hero_form;
    pub mod mobile_form;
    pub mod process;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::Toast;
use form::status::{parse_form_status, strip_form_status_param, FormStatus};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/variant/:id")]
    Variant { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering default landing");
            html! { <Landing copy={variants::default_copy()} /> }
        }
        Route::Variant { id } => {
            info!("Rendering landing variant {}", id);
            html! { <Landing copy={variants::copy_for(&id)} /> }
        }
        // Unknown paths get the default campaign page, not an error page.
        Route::NotFound => {
            info!("Unknown route, falling back to default landing");
            html! { <Landing copy={variants::default_copy()} /> }
        }
    }
}

/// Shows a one-shot notification when the page is entered through an
/// external redirect carrying `?formStatus=success|error`, then strips the
/// parameter so a refresh stays quiet.
#[function_component(FormStatusToast)]
fn form_status_toast() -> Html {
    let status_param = use_search_param("formStatus".to_string());
    let status = use_state(|| None::<FormStatus>);

    {
        let status = status.clone();
        use_effect_with_deps(
            move |param: &Option<String>| {
                if let Some(parsed) = param.as_deref().and_then(parse_form_status) {
                    status.set(Some(parsed));
                    strip_form_status_param();
                }
                || ()
            },
            status_param,
        );
    }

    let dismiss = {
        let status = status.clone();
        Callback::from(move |_| status.set(None))
    };

    match *status {
        Some(outcome) => html! { <Toast status={outcome} on_dismiss={dismiss} /> },
        None => html! {},
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <FormStatusToast />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
