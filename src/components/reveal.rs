//! Entrance animation driven by an `IntersectionObserver`.
//!
//! Each wrapped element starts hidden and transitions to its revealed state
//! the first time it crosses into the viewport, then stops being observed.
//! The stagger delay is an explicit prop, not a class-name convention.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const VISIBILITY_THRESHOLD: f64 = 0.1;

type CrossingCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Delay before the entrance transition runs, in milliseconds.
    #[prop_or_default]
    pub stagger_ms: u32,
    /// Render already revealed; used when returning from an inner page.
    #[prop_or_default]
    pub force_visible: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| props.force_visible);

    {
        let node = node.clone();
        let visible = visible.clone();
        let force_visible = props.force_visible;
        use_effect_with_deps(
            move |_| {
                let mut watcher: Option<(IntersectionObserver, CrossingCallback)> = None;

                if !force_visible {
                    if let Some(element) = node.cast::<Element>() {
                        let callback = CrossingCallback::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let crossed = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                if crossed {
                                    visible.set(true);
                                    // First crossing only.
                                    observer.disconnect();
                                }
                            },
                        );
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                watcher = Some((observer, callback));
                            }
                            Err(err) => {
                                log::warn!("reveal: could not observe element: {err:?}");
                            }
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = (props.stagger_ms > 0).then(|| format!("transition-delay: {}ms;", props.stagger_ms));

    html! {
        <div
            ref={node}
            {style}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
