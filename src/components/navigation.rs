use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Fixed header. Fades out once the page is scrolled past a threshold: most
/// of the hero height on the home page, almost immediately on inner pages.
#[function_component(Navigation)]
pub fn navigation() -> Html {
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let hidden = hidden.clone();
                        move || {
                            let Some(win) = web_sys::window() else {
                                return;
                            };
                            let on_home = win
                                .location()
                                .pathname()
                                .map(|path| path == "/")
                                .unwrap_or(true);
                            let viewport = win
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(0.0);
                            let threshold = if on_home { viewport * 0.8 } else { 50.0 };
                            let scroll_y = win.scroll_y().unwrap_or(0.0);
                            hidden.set(scroll_y > threshold);
                        }
                    });
                    let listener_added = window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok();
                    Box::new(move || {
                        if listener_added {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <header class={classes!("top-nav", (*hidden).then_some("hidden"))}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/images/logo.png" alt={format!("{} Logo", config::STUDIO_NAME)} />
                </Link<Route>>

                <nav class="nav-links">
                    <a href="/#about" class="nav-link">{"About"}</a>
                    <a href="/#portfolio" class="nav-link">{"Portfolio"}</a>
                    <a href="/#contact" class="nav-link">{"Contact"}</a>
                </nav>
            </div>
        </header>
    }
}
