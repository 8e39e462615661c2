use yew::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_overlay::ProjectOverlay;
use crate::data;
use crate::models::Project;
use crate::scroll;

/// Per-card entrance delay, matching the original grid stagger.
const CARD_STAGGER_MS: u32 = 100;

#[function_component(Projects)]
pub fn projects() -> Html {
    let selected = use_state(|| None::<Project>);

    use_effect_with_deps(
        move |_| {
            scroll::scroll_to_top();
            || ()
        },
        (),
    );

    let open_overlay = {
        let selected = selected.clone();
        Callback::from(move |project: Project| selected.set(Some(project)))
    };

    let close_overlay = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <>
            <div class="page inner">
                <div class="container">
                    <a href="/#portfolio" class="back-link">{"← Back to Portfolio"}</a>

                    <h1>{"Our "}<span>{"Projects"}</span></h1>
                    <p class="lead">
                        {"Explore our complete portfolio of architectural visualizations \
                          spanning residential, commercial, cultural, and mixed-use projects \
                          from around the world."}
                    </p>
                </div>

                <div class="container">
                    <div class="project-grid">
                        { for data::projects().into_iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard
                                key={project.id.clone()}
                                project={project.clone()}
                                on_open={open_overlay.clone()}
                                entrance_delay_ms={index as u32 * CARD_STAGGER_MS}
                            />
                        }) }
                    </div>
                </div>
            </div>

            if let Some(project) = (*selected).clone() {
                <ProjectOverlay {project} on_close={close_overlay} />
            }
        </>
    }
}
