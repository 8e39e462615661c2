//! Full-screen hero video carousel.
//!
//! The slide/timer state machine lives in [`crate::carousel`]; this component
//! provides its two collaborators: a playback surface over the mounted
//! `<video>` elements and a scheduler backed by `gloo_timers::callback::Interval`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::carousel::{
    AdvanceScheduler, CarouselController, PlaybackStartError, PlaybackSurface, ADVANCE_PERIOD_MS,
    WARMUP_DELAY_MS,
};
use crate::data;

/// Starts and pauses the mounted `<video>` elements.
struct VideoSurface {
    videos: Rc<Vec<NodeRef>>,
}

impl VideoSurface {
    fn video(&self, index: usize) -> Option<HtmlVideoElement> {
        self.videos
            .get(index)
            .and_then(|node| node.cast::<HtmlVideoElement>())
    }
}

impl PlaybackSurface for VideoSurface {
    fn begin_playback(&mut self, index: usize) -> Result<(), PlaybackStartError> {
        let video = self
            .video(index)
            .ok_or_else(|| PlaybackStartError::new("video element is not mounted"))?;
        video.set_current_time(0.0);
        match video.play() {
            Ok(promise) => {
                // An autoplay block surfaces as a rejected promise. Log it
                // and move on; the next advance retries naturally.
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("hero video {index}: play was prevented: {err:?}");
                    }
                });
                Ok(())
            }
            Err(err) => Err(PlaybackStartError::new(format!("{err:?}"))),
        }
    }

    fn pause(&mut self, index: usize) {
        if let Some(video) = self.video(index) {
            let _ = video.pause();
        }
    }
}

/// Repeating advance timer. Dropping the `Interval` clears it.
struct IntervalScheduler {
    on_tick: Callback<()>,
}

impl AdvanceScheduler for IntervalScheduler {
    type Handle = Interval;

    fn repeating(&mut self, period_ms: u32) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick.emit(()))
    }
}

type HeroController = CarouselController<VideoSurface, IntervalScheduler>;

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let items = use_memo(|_| data::hero_media(), ());
    // One NodeRef per slide; a `vec![..; n]` would clone a single shared ref.
    let video_refs = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        items.len(),
    );
    let controller: Rc<RefCell<Option<HeroController>>> = use_mut_ref(|| None);
    let active = use_state(|| 0usize);
    let armed = use_state(|| false);

    let on_tick = {
        let controller = controller.clone();
        let active = active.clone();
        Callback::from(move |_| {
            if let Some(c) = controller.borrow_mut().as_mut() {
                c.tick();
                active.set(c.active_index());
            }
        })
    };

    {
        let controller = controller.clone();
        let items = items.clone();
        let video_refs = video_refs.clone();
        let active = active.clone();
        let armed = armed.clone();
        use_effect_with_deps(
            move |_| {
                for node in video_refs.iter() {
                    if let Some(video) = node.cast::<HtmlVideoElement>() {
                        video.set_muted(true);
                    }
                }

                let surface = VideoSurface {
                    videos: video_refs,
                };
                let scheduler = IntervalScheduler { on_tick };
                *controller.borrow_mut() = Some(CarouselController::new(
                    (*items).clone(),
                    surface,
                    scheduler,
                    ADVANCE_PERIOD_MS,
                ));

                // Give the videos time to load before the first play.
                let warmup = {
                    let controller = controller.clone();
                    Timeout::new(WARMUP_DELAY_MS, move || {
                        if let Some(c) = controller.borrow_mut().as_mut() {
                            c.arm();
                            armed.set(true);
                            active.set(c.active_index());
                        }
                    })
                };

                move || {
                    // Cancels the warm-up if we unmount inside the first
                    // second, then kills the advance timer.
                    drop(warmup);
                    if let Some(c) = controller.borrow_mut().as_mut() {
                        c.detach();
                    }
                }
            },
            (),
        );
    }

    let on_indicator_click = {
        let controller = controller.clone();
        let active = active.clone();
        Callback::from(move |index: usize| {
            if let Some(c) = controller.borrow_mut().as_mut() {
                c.go_to(index);
                active.set(c.active_index());
            }
        })
    };

    html! {
        <div class="hero-carousel">
            { for items.iter().enumerate().map(|(index, item)| {
                let is_active = index == *active;
                let onerror = Callback::from(move |_: Event| {
                    log::error!("hero video {index} failed to load");
                });
                html! {
                    <div key={index} class={classes!("hero-slide", is_active.then_some("active"))}>
                        <video
                            ref={video_refs[index].clone()}
                            src={item.source_ref.clone()}
                            playsinline=true
                            preload="metadata"
                            aria-label={item.label.clone()}
                            {onerror}
                        />
                        if !*armed && is_active {
                            <div class="hero-loading"><div class="spinner"></div></div>
                        }
                    </div>
                }
            }) }

            <div class="hero-indicators">
                { for (0..items.len()).map(|index| {
                    let is_active = index == *active;
                    let onclick = {
                        let on_indicator_click = on_indicator_click.clone();
                        Callback::from(move |_: MouseEvent| on_indicator_click.emit(index))
                    };
                    html! {
                        <button
                            key={index}
                            class={classes!("hero-indicator", is_active.then_some("active"))}
                            aria-label={format!("Go to video {}", index + 1)}
                            {onclick}
                        >
                            <span class="dot"></span>
                            if is_active && *armed {
                                // Re-keyed per slide so the fill animation
                                // restarts on every index change.
                                <span
                                    key={format!("fill-{index}")}
                                    class="progress-fill"
                                    style={format!("animation-duration: {ADVANCE_PERIOD_MS}ms;")}
                                ></span>
                            }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
