use yew::prelude::*;

use crate::models::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_open: Callback<Project>,
    /// Entrance animation delay for staggered grids, in milliseconds.
    #[prop_or_default]
    pub entrance_delay_ms: u32,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let project = props.project.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project.clone()))
    };

    html! {
        <div
            class="project-card"
            style={format!("animation-delay: {}ms;", props.entrance_delay_ms)}
            {onclick}
        >
            <img src={props.project.thumbnail.clone()} alt={props.project.title.clone()} />
            <div class="card-gradient"></div>
            <div class="card-caption">
                <h3>{ &props.project.title }</h3>
                <p>{ format!("{} • {}", props.project.kind, props.project.location) }</p>
            </div>
        </div>
    }
}
