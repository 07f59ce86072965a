use std::rc::Rc;

use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::image_loader::ImageLoader;
use crate::components::reveal::Reveal;
use crate::config::SITE_LOGO;
use crate::content::FeaturedProject;
use crate::dom::VisibilityObserver;
use crate::pages::contact::Contact;
use crate::NavigationContext;

const HERO_VIDEO: &str = "/saridena_constructions/videos/bg_video.mp4";

/// Share of the hero that must be on screen before the video restarts.
const HERO_REPLAY_THRESHOLD: f64 = 0.6;

const SERVICES: [(&str, &str); 6] = [
    (
        "Custom Villa Construction",
        "From foundation to finish, we build bespoke villas tailored to your unique lifestyle and preferences.",
    ),
    (
        "Architectural Design",
        "Our in-house architects collaborate with you to create stunning, functional, and timeless designs.",
    ),
    (
        "Project Management",
        "We provide end-to-end project oversight, ensuring your project is on time, on budget, and to the highest quality.",
    ),
    (
        "Renovations & Remodeling",
        "Transform your existing space with our expert renovation services, from minor updates to complete overhauls.",
    ),
    (
        "Sustainable Building",
        "Implementing eco-friendly practices and materials for energy-efficient and environmentally responsible constructions.",
    ),
    (
        "Smart Home Integration",
        "Integrating cutting-edge smart home technologies for enhanced comfort, security, and efficiency.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub project: Rc<FeaturedProject>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        z-index: 0;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.45);
                        z-index: 1;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        color: #fff;
                        max-width: 40rem;
                    }
                    .hero-logo {
                        height: 3rem;
                        filter: drop-shadow(2px 2px 2px rgba(0, 0, 0, 0.6));
                        margin-bottom: 2rem;
                    }
                    .hero-content h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.05;
                        margin: 0 0 1.5rem;
                    }
                    .hero-content p {
                        font-size: 1.25rem;
                        opacity: 0.9;
                        margin-bottom: 2rem;
                    }
                    .about-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        margin-top: 4rem;
                    }
                    .about-figure {
                        max-width: 20rem;
                        margin: 0 auto;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        text-align: center;
                        padding: 2.5rem 1.5rem;
                        border: 2px solid var(--border);
                        border-radius: 0.75rem;
                        background: var(--background);
                        transition: transform 0.4s ease, box-shadow 0.4s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-0.75rem);
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
                    }
                    .project-card {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid var(--border);
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                    }
                    .project-card .image-loader {
                        min-height: 18rem;
                    }
                    .project-card-body {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .project-card-meta {
                        color: var(--muted-foreground);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Projects project={props.project.clone()} />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

/// Full-height video banner. The clip restarts whenever the hero comes back into view.
#[function_component(Hero)]
fn hero() -> Html {
    let section = use_node_ref();
    let video = use_node_ref();

    {
        let section = section.clone();
        let video = video.clone();
        use_effect_with_deps(
            move |_| {
                let observer = section.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(&element, HERO_REPLAY_THRESHOLD, move |visible| {
                        if !visible {
                            return;
                        }
                        if let Some(video) = video.cast::<HtmlVideoElement>() {
                            video.set_current_time(0.0);
                            // Autoplay may be refused; the poster frame stays up.
                            let _ = video.play();
                        }
                    })
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero" ref={section}>
            <video
                ref={video}
                class="hero-video"
                src={HERO_VIDEO}
                autoplay=true
                muted=true
                playsinline=true
            />
            <div class="hero-shade"></div>
            <div class="container hero-content">
                <img src={SITE_LOGO} alt="Saridena Logo" class="hero-logo" />
                <h1>{"Crafting Spaces, Building Legacies"}</h1>
                <p>{"Luxury villas designed with intent and built with precision, from the first sketch to the final key."}</p>
                <a href="#projects" class="button button-primary">{"Explore portfolio"}</a>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <Reveal id="about" class={classes!("page-section")}>
            <div class="container">
                <div class="section-intro">
                    <p class="section-kicker">{"Virtual Reality Experience"}</p>
                    <h2 class="section-heading">{"Experience Your Dream Villa in Virtual Reality"}</h2>
                    <p class="section-lead">
                        {"Before a single brick is laid, step into your future home. Our 3D modeling and VR technology offer an immersive, real-time experience."}
                    </p>
                </div>
                <div class="about-row">
                    <div>
                        <h3>{"Walk Through Your Vision"}</h3>
                        <p>
                            {"Our clients don't just see blueprints; they explore their entire villa in a virtual environment, with the freedom to change interiors, layouts and exterior elements in real time."}
                        </p>
                        <p>
                            {"Adjust kitchen finishes, move walls or experiment with lighting before construction begins, so the final villa is precisely what you envisioned."}
                        </p>
                    </div>
                    <div class="about-figure">
                        <ImageLoader
                            src="/saridena_constructions/photos/vr/vr_walkthrough.png"
                            alt="VR Walkthrough"
                        />
                    </div>
                </div>
                <div class="about-row">
                    <div class="about-figure">
                        <ImageLoader
                            src="/saridena_constructions/photos/vr/vr_customization.png"
                            alt="VR Customization"
                        />
                    </div>
                    <div>
                        <h3>{"Customize Every Detail"}</h3>
                        <p>
                            {"Materials, textures and furniture placement can all be previewed at true scale, turning decisions that usually happen on site into choices made with confidence."}
                        </p>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <Reveal id="services" class={classes!("page-section", "muted-section")} threshold={0.3}>
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-heading">{"OUR "}<span class="accent">{"EXPERTISE"}</span></h2>
                    <p class="section-lead">
                        {"Comprehensive construction services that bring your architectural dreams to reality with unmatched precision and quality."}
                    </p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(title, description)| html! {
                        <div key={*title} class="service-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsProps {
    project: Rc<FeaturedProject>,
}

#[function_component(Projects)]
fn projects(props: &ProjectsProps) -> Html {
    let navigation = use_context::<NavigationContext>();
    let details = navigation.map(|navigation| navigation.go_to_project_detail());
    let project = &props.project;

    html! {
        <Reveal id="projects" class={classes!("page-section")}>
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-heading">{"Our Projects"}</h2>
                    <p class="section-lead">{"Homes shaped by their setting and finished without compromise."}</p>
                </div>
                <article class="project-card">
                    <ImageLoader
                        src={project.card_image.clone()}
                        alt={project.name.clone()}
                        eager=true
                    />
                    <div class="project-card-body">
                        <img src={project.logo.clone()} alt={project.name.clone()} class="project-card-logo" />
                        <h3>{ project.name.clone() }</h3>
                        <p class="project-card-meta">{ format!("{} · {}", project.kind, project.location) }</p>
                        <p>{ project.summary.clone() }</p>
                        <button class="button button-primary" onclick={details}>{"Details"}</button>
                    </div>
                </article>
            </div>
        </Reveal>
    }
}
