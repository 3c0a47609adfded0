use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analytics::Gtm;
use crate::config;
use crate::form::session::{Field, FormAction, FormLocation, FormSession};
use crate::form::submit::SubmissionPayload;

/// Everything a form component needs to drive one lead-capture session.
pub struct LeadFormHandle {
    pub session: UseReducerHandle<FormSession>,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Wires a [`FormSession`] reducer to analytics, the submission client, the
/// abandonment listener and the timed auto-reset.
///
/// The auto-reset is an owned `Timeout`: a manual reset takes and drops it,
/// and unmounting the component drops it with the hook state, so it can
/// never fire against a disposed session. `on_auto_reset` runs after the
/// timed reset (the mobile overlay closes itself with it).
#[hook]
pub fn use_lead_form(
    location: FormLocation,
    total_steps: u32,
    reset_delay_ms: u32,
    on_auto_reset: Option<Callback<()>>,
) -> LeadFormHandle {
    let session = use_reducer(move || FormSession::new(total_steps));
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    // Abandonment tracking: re-armed on every state change so the unload
    // handler sees the latest step and guard flags.
    {
        let session = session.clone();
        use_effect_with_deps(
            move |session: &UseReducerHandle<FormSession>| {
                let snapshot = (**session).clone();
                let unload_callback = Closure::wrap(Box::new(move || {
                    if snapshot.is_abandonable() {
                        Gtm::new().track_form_abandonment(
                            location,
                            snapshot.step,
                            &snapshot.fields.benefit_type,
                        );
                    }
                }) as Box<dyn FnMut()>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "beforeunload",
                        unload_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "beforeunload",
                            unload_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            session,
        );
    }

    let on_edit = {
        let session = session.clone();
        Callback::from(move |(field, value): (Field, String)| {
            // `started` latches exactly once per session, on the first edit.
            if !session.started {
                Gtm::new().track_form_start(location);
            }
            session.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_submit = {
        let session = session.clone();
        let reset_timer = reset_timer.clone();
        let on_auto_reset = on_auto_reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.submitting || session.succeeded || !session.step_is_valid() {
                return;
            }

            let gtm = Gtm::new();
            let final_step = session.is_final_step();
            if final_step {
                gtm.track_form_submit(location, &session.fields.benefit_type);
            } else {
                gtm.track_form_step_complete(location, session.step, &session.fields.benefit_type);
            }

            let payload = SubmissionPayload::new(&session.fields, location, !final_step);
            session.dispatch(FormAction::SubmitStarted);

            let dispatcher = session.dispatcher();
            let reset_timer = reset_timer.clone();
            let on_auto_reset = on_auto_reset.clone();
            spawn_local(async move {
                match payload.send(config::submission_endpoint()).await {
                    Ok(()) => {
                        if final_step {
                            dispatcher.dispatch(FormAction::SubmitSucceeded);
                            let reset_dispatcher = dispatcher.clone();
                            let timer = Timeout::new(reset_delay_ms, move || {
                                reset_dispatcher.dispatch(FormAction::Reset);
                                if let Some(callback) = on_auto_reset {
                                    callback.emit(());
                                }
                            });
                            *reset_timer.borrow_mut() = Some(timer);
                        } else {
                            dispatcher.dispatch(FormAction::StepAdvanced);
                        }
                    }
                    Err(error) => {
                        log!("Lead submission failed:", error);
                        dispatcher.dispatch(FormAction::SubmitFailed(
                            "Something went wrong sending your information. Please try again."
                                .to_string(),
                        ));
                    }
                }
            });
        })
    };

    let on_reset = {
        let session = session.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: MouseEvent| {
            // Cancels any pending auto-reset before resetting immediately.
            reset_timer.borrow_mut().take();
            session.dispatch(FormAction::Reset);
        })
    };

    LeadFormHandle {
        session,
        on_edit,
        on_submit,
        on_reset,
    }
}
