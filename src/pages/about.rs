use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::scroll;

struct Approach {
    title: &'static str,
    blurb: &'static str,
}

const APPROACH: [Approach; 3] = [
    Approach {
        title: "Understanding",
        blurb: "We begin by deeply understanding your project's vision, goals, and unique \
                challenges. This foundation allows us to create visualizations that truly \
                represent your design intent.",
    },
    Approach {
        title: "Craftsmanship",
        blurb: "Our team combines technical expertise with artistic sensibility to craft images \
                that are not just accurate representations but emotionally resonant visual \
                experiences.",
    },
    Approach {
        title: "Innovation",
        blurb: "We continuously explore new technologies and techniques to push the boundaries \
                of what's possible in architectural visualization, from real-time rendering to \
                immersive VR experiences.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page inner">
            <div class="container">
                <a href="/#about" class="back-link">{"← Back to About Section"}</a>
            </div>

            <section class="section gradient">
                <div class="container split">
                    <div>
                        <Reveal>
                            <h1>{"About "}<span>{ config::STUDIO_NAME }</span></h1>
                        </Reveal>
                        <Reveal stagger_ms={150}>
                            <p class="lead">
                                {"Our mission is to transform architectural concepts into \
                                  compelling visual narratives that communicate the essence of \
                                  design. We believe in the power of visualization to inspire, \
                                  inform, and influence."}
                            </p>
                        </Reveal>
                    </div>
                    <Reveal stagger_ms={450} class="about-image">
                        <img src="/images/logo-render.png" alt={format!("{} 3D Logo", config::STUDIO_NAME)} />
                    </Reveal>
                </div>
            </section>

            <section class="section gradient">
                <div class="container">
                    <Reveal class="centered">
                        <h2>{"Our "}<span>{"Approach"}</span></h2>
                    </Reveal>

                    <div class="approach-grid">
                        { for APPROACH.iter().enumerate().map(|(index, approach)| html! {
                            <Reveal
                                key={approach.title}
                                stagger_ms={index as u32 * 150}
                                class="glass approach-card"
                            >
                                <h3>{ approach.title }</h3>
                                <p>{ approach.blurb }</p>
                            </Reveal>
                        }) }
                    </div>

                    <Reveal class="centered">
                        <a href="/#contact" class="button">{"Contact Us"}</a>
                    </Reveal>
                </div>
            </section>

            <section class="section gradient">
                <div class="container narrow">
                    <div class="glass-dark contact-panel">
                        <Reveal>
                            <h2>{"Get in "}<span>{"Touch"}</span></h2>
                        </Reveal>
                        <Reveal stagger_ms={150}>
                            <p>
                                {"Ready to bring your architectural vision to life? Contact us \
                                  to discuss your project and discover how our visualization \
                                  services can help you communicate your design."}
                            </p>
                        </Reveal>
                        <Reveal stagger_ms={300}>
                            <a class="button mail-link" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                { config::CONTACT_EMAIL }
                            </a>
                        </Reveal>
                    </div>
                </div>
            </section>
        </div>
    }
}
