//! Featured-project carousel: previous and next projects peek from the
//! sides, clicking the center card opens the overlay, swipe works on touch.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::project_overlay::ProjectOverlay;
use crate::models::Project;

/// Input is ignored while a slide transition is animating.
const TRANSITION_LOCK_MS: u32 = 500;

/// Minimum horizontal travel for a touch gesture to count as a swipe.
const SWIPE_THRESHOLD_PX: i32 = 50;

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let current = use_state(|| 0usize);
    let transitioning = use_state(|| false);
    let selected = use_state(|| None::<Project>);
    let touch_start_x = use_mut_ref(|| 0i32);
    let touch_end_x = use_mut_ref(|| 0i32);

    let count = props.projects.len();
    if count == 0 {
        return html! {};
    }

    let shift = {
        let current = current.clone();
        let transitioning = transitioning.clone();
        Callback::from(move |target: usize| {
            if *transitioning {
                return;
            }
            transitioning.set(true);
            current.set(target);
            let transitioning = transitioning.clone();
            Timeout::new(TRANSITION_LOCK_MS, move || transitioning.set(false)).forget();
        })
    };

    let next = {
        let shift = shift.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| shift.emit((*current + 1) % count))
    };

    let prev = {
        let shift = shift.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| shift.emit((*current + count - 1) % count))
    };

    let ontouchstart = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                *touch_start_x.borrow_mut() = touch.client_x();
            }
        })
    };

    let ontouchmove = {
        let touch_end_x = touch_end_x.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                *touch_end_x.borrow_mut() = touch.client_x();
            }
        })
    };

    let ontouchend = {
        let shift = shift.clone();
        let current = current.clone();
        let touch_start_x = touch_start_x.clone();
        let touch_end_x = touch_end_x.clone();
        Callback::from(move |_: TouchEvent| {
            let travel = *touch_start_x.borrow() - *touch_end_x.borrow();
            if travel > SWIPE_THRESHOLD_PX {
                shift.emit((*current + 1) % count);
            } else if travel < -SWIPE_THRESHOLD_PX {
                shift.emit((*current + count - 1) % count);
            }
        })
    };

    let open_overlay = {
        let selected = selected.clone();
        Callback::from(move |project: Project| selected.set(Some(project)))
    };

    let close_overlay = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let prev_index = (*current + count - 1) % count;
    let next_index = (*current + 1) % count;
    let current_project = &props.projects[*current];

    let open_current = {
        let open_overlay = open_overlay.clone();
        let project = current_project.clone();
        Callback::from(move |_: MouseEvent| open_overlay.emit(project.clone()))
    };

    html! {
        <>
            <div class="project-carousel" {ontouchstart} {ontouchmove} {ontouchend}>
                <div class="carousel-panel side left">
                    <img
                        src={props.projects[prev_index].thumbnail.clone()}
                        alt={props.projects[prev_index].title.clone()}
                    />
                </div>

                <div class="carousel-panel center" onclick={open_current}>
                    <img
                        src={current_project.thumbnail.clone()}
                        alt={current_project.title.clone()}
                    />
                    <div class="card-gradient"></div>
                    <div class="card-caption">
                        <h3>{ &current_project.title }</h3>
                        <p>{ &current_project.short_description }</p>
                    </div>
                </div>

                <div class="carousel-panel side right">
                    <img
                        src={props.projects[next_index].thumbnail.clone()}
                        alt={props.projects[next_index].title.clone()}
                    />
                </div>

                <button class="carousel-control left" onclick={prev} aria-label="Previous project">
                    {"‹"}
                </button>
                <button class="carousel-control right" onclick={next} aria-label="Next project">
                    {"›"}
                </button>

                <div class="carousel-dots">
                    { for (0..count).map(|index| {
                        let onclick = {
                            let shift = shift.clone();
                            Callback::from(move |_: MouseEvent| shift.emit(index))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", (index == *current).then_some("active"))}
                                aria-label={format!("Go to project {}", index + 1)}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            </div>

            if let Some(project) = (*selected).clone() {
                <ProjectOverlay {project} on_close={close_overlay} />
            }
        </>
    }
}
