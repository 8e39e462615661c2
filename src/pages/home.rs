use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero_carousel::HeroCarousel;
use crate::components::project_carousel::ProjectCarousel;
use crate::components::reveal::Reveal;
use crate::config;
use crate::data;
use crate::scroll;
use crate::Route;

/// Settle delay before scrolling to a section named in the URL fragment.
const SCROLL_SETTLE_MS: u32 = 100;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "3D Exterior Rendering",
        blurb: "Photorealistic exterior visualizations that showcase your building in its \
                environment with perfect lighting and atmosphere.",
    },
    Service {
        title: "3D Interior Rendering",
        blurb: "Immersive interior visualizations that communicate spatial qualities, materials, \
                and lighting with stunning realism.",
    },
    Service {
        title: "Virtual Reality",
        blurb: "Interactive VR experiences that allow clients to explore and interact with your \
                designs before they're built.",
    },
    Service {
        title: "Animation & Film",
        blurb: "Cinematic architectural animations that tell the story of your project through \
                carefully crafted sequences.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // When an inner page links back with `/#portfolio` the fragment is the
    // page's input: entrance animations are skipped and we scroll straight
    // to the section. First visits animate normally.
    let return_target = scroll::current_hash_section();
    let returning = return_target.is_some();

    use_effect_with_deps(
        move |_| {
            let settle = return_target.map(|section| {
                Timeout::new(SCROLL_SETTLE_MS, move || {
                    scroll::scroll_to_section(&section);
                })
            });
            move || drop(settle)
        },
        (),
    );

    html! {
        <div class="page home">
            <section class="hero">
                <HeroCarousel />
                <div class="hero-tagline">
                    <p>{"Architectural Visualization"}</p>
                </div>
            </section>

            <section id="about" class="section gradient">
                <div class="container narrow centered">
                    <Reveal force_visible={returning}>
                        <h2>{"Crafting Visual "}<span>{"Experiences"}</span></h2>
                    </Reveal>
                    <Reveal stagger_ms={150} force_visible={returning}>
                        <p class="lead">
                            {"We are a boutique architectural visualization studio dedicated to \
                              transforming architectural concepts into compelling visual \
                              narratives. Our team combines technical expertise with artistic \
                              vision to create stunning visualizations that communicate the \
                              essence of your design."}
                        </p>
                    </Reveal>
                    <Reveal stagger_ms={450} force_visible={returning}>
                        <Link<Route> to={Route::About} classes="button outline">
                            {"Learn More About Us →"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </section>

            <section class="section gradient">
                <div class="container">
                    <div class="section-heading">
                        <Reveal force_visible={returning}>
                            <h2>{"Our "}<span>{"Services"}</span></h2>
                        </Reveal>
                        <Reveal stagger_ms={150} force_visible={returning}>
                            <p>
                                {"We offer a comprehensive range of visualization services to \
                                  meet the diverse needs of architects, developers, and \
                                  designers."}
                            </p>
                        </Reveal>
                    </div>

                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <Reveal
                                key={service.title}
                                stagger_ms={index as u32 * 150}
                                force_visible={returning}
                                class="glass service-card"
                            >
                                <h3>{ service.title }</h3>
                                <p>{ service.blurb }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="section gradient">
                <div class="container">
                    <div class="section-heading">
                        <Reveal force_visible={returning}>
                            <h2>{"Featured "}<span>{"Projects"}</span></h2>
                        </Reveal>
                        <Reveal stagger_ms={150} force_visible={returning}>
                            <p>
                                {"Explore our portfolio of architectural visualizations spanning \
                                  residential, commercial, and cultural projects."}
                            </p>
                        </Reveal>
                    </div>

                    <Reveal force_visible={returning}>
                        <ProjectCarousel projects={data::projects()} />
                    </Reveal>

                    <Reveal force_visible={returning} class="centered">
                        <Link<Route> to={Route::Projects} classes="button">
                            {"View All Projects →"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </section>

            <section id="contact" class="section gradient">
                <div class="container narrow">
                    <div class="glass-dark contact-panel">
                        <Reveal force_visible={returning}>
                            <h2>{"Let's "}<span>{"Connect"}</span></h2>
                        </Reveal>
                        <Reveal stagger_ms={150} force_visible={returning}>
                            <p>
                                {"Ready to bring your architectural vision to life? Contact us \
                                  to discuss your project and discover how our visualization \
                                  services can help you communicate your design."}
                            </p>
                        </Reveal>
                        <Reveal stagger_ms={300} force_visible={returning}>
                            <ContactForm />
                        </Reveal>
                        <Reveal stagger_ms={450} force_visible={returning}>
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
