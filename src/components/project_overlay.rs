//! Full-screen project detail overlay.
//!
//! While mounted it locks body scrolling (keeping the page visually where it
//! was) and hides the navigation chrome via the `overlay-open` body class;
//! unmounting restores the saved scroll position.

use yew::prelude::*;

use crate::models::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectOverlayProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

#[function_component(ProjectOverlay)]
pub fn project_overlay(props: &ProjectOverlayProps) -> Html {
    let fullscreen_image = use_state(|| None::<String>);

    use_effect_with_deps(
        move |_| {
            let locked = web_sys::window().and_then(|window| {
                let body = window.document()?.body()?;
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let style = body.style();

                let saved = [
                    ("overflow", style.get_property_value("overflow").ok()?),
                    ("position", style.get_property_value("position").ok()?),
                    ("top", style.get_property_value("top").ok()?),
                    ("width", style.get_property_value("width").ok()?),
                ];

                let _ = body.class_list().add_1("overlay-open");
                let _ = style.set_property("overflow", "hidden");
                let _ = style.set_property("position", "fixed");
                let _ = style.set_property("top", &format!("-{scroll_y}px"));
                let _ = style.set_property("width", "100%");

                Some((body, saved, scroll_y))
            });

            move || {
                if let Some((body, saved, scroll_y)) = locked {
                    let _ = body.class_list().remove_1("overlay-open");
                    let style = body.style();
                    for (name, value) in saved {
                        let _ = style.set_property(name, &value);
                    }
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, scroll_y);
                    }
                }
            }
        },
        (),
    );

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let open_fullscreen = {
        let fullscreen_image = fullscreen_image.clone();
        Callback::from(move |image: String| fullscreen_image.set(Some(image)))
    };

    let close_fullscreen = {
        let fullscreen_image = fullscreen_image.clone();
        Callback::from(move |_: MouseEvent| fullscreen_image.set(None))
    };

    let project = &props.project;

    html! {
        <>
            <div class="project-overlay">
                <div class="container">
                    <div class="overlay-header">
                        <div>
                            <h2>{ &project.title }</h2>
                            <p>{ format!("{} • {}", project.location, project.year) }</p>
                        </div>
                        <button class="icon-button" onclick={close.clone()} aria-label="Close">
                            {"✕"}
                        </button>
                    </div>

                    <div class="overlay-body">
                        <div class="overlay-gallery">
                            { for project.all_images().into_iter().enumerate().map(|(index, image)| {
                                let onclick = {
                                    let open_fullscreen = open_fullscreen.clone();
                                    let image = image.clone();
                                    Callback::from(move |_: MouseEvent| open_fullscreen.emit(image.clone()))
                                };
                                html! {
                                    <div key={index} class="overlay-image" {onclick}>
                                        <img
                                            src={image.clone()}
                                            alt={format!("{} - Image {}", project.title, index + 1)}
                                        />
                                    </div>
                                }
                            }) }
                        </div>

                        <div class="overlay-details">
                            <section>
                                <h3>{"About this project"}</h3>
                                <p>{ &project.description }</p>
                            </section>

                            if !project.features.is_empty() {
                                <section>
                                    <h3>{"Features"}</h3>
                                    <ul>
                                        { for project.features.iter().map(|feature| html! {
                                            <li>{ feature }</li>
                                        }) }
                                    </ul>
                                </section>
                            }

                            <section>
                                <h3>{"Project Details"}</h3>
                                <dl>
                                    <dt>{"Client"}</dt><dd>{ &project.client }</dd>
                                    <dt>{"Location"}</dt><dd>{ &project.location }</dd>
                                    <dt>{"Year"}</dt><dd>{ &project.year }</dd>
                                    <dt>{"Type"}</dt><dd>{ &project.kind }</dd>
                                    if let Some(architect) = &project.architect {
                                        <>
                                            <dt>{"Architect"}</dt><dd>{ architect }</dd>
                                        </>
                                    }
                                </dl>
                            </section>

                            <button class="button wide" onclick={close}>
                                {"Close Project"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            if let Some(image) = (*fullscreen_image).clone() {
                <div class="fullscreen-view" onclick={close_fullscreen.clone()}>
                    <img src={image} alt="Fullscreen view" />
                    <button
                        class="icon-button fullscreen-close"
                        onclick={close_fullscreen}
                        aria-label="Close fullscreen"
                    >
                        {"✕"}
                    </button>
                </div>
            }
        </>
    }
}
