use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct InViewOptions {
    /// Fraction of the target's area that must be visible.
    pub threshold: f64,
    /// Expansion/contraction of the viewport test box, CSS margin syntax.
    pub root_margin: &'static str,
    /// When true, the signal latches on first entry and never reverts.
    pub trigger_once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
            trigger_once: false,
        }
    }
}

/// Reports whether the node behind the returned `NodeRef` has entered the
/// viewport. Used to gate entrance animations.
///
/// Without `IntersectionObserver` on the window object this degrades to a
/// permanent "not visible" and never crashes.
#[hook]
pub fn use_in_view(options: InViewOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state(|| false);
    let entered = use_mut_ref(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |options: &InViewOptions| {
                let InViewOptions {
                    threshold,
                    root_margin,
                    trigger_once,
                } = options.clone();
                let mut active: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> =
                    None;

                if supports_intersection_observer() {
                    if let Some(element) = node.cast::<Element>() {
                        let observer_callback =
                            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                                let Ok(entry) =
                                    entries.get(0).dyn_into::<IntersectionObserverEntry>()
                                else {
                                    return;
                                };
                                let visible = entry.is_intersecting();
                                if trigger_once {
                                    if visible && !*entered.borrow() {
                                        in_view.set(true);
                                        *entered.borrow_mut() = true;
                                    }
                                } else {
                                    in_view.set(visible);
                                }
                            })
                                as Box<dyn FnMut(js_sys::Array)>);

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(threshold));
                        init.set_root_margin(root_margin);

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            observer_callback.as_ref().unchecked_ref(),
                            &init,
                        ) {
                            observer.observe(&element);
                            active = Some((observer, observer_callback));
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            options,
        );
    }

    (node, *in_view)
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
