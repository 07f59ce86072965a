use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::image_loader::ImageLoader;
use crate::components::project_gallery::ProjectGallery;
use crate::components::reveal::Reveal;
use crate::config::SITE_LOGO;
use crate::content::FeaturedProject;
use crate::NavigationContext;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project: Rc<FeaturedProject>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let navigation = use_context::<NavigationContext>();
    let back = navigation.as_ref().map(|navigation| navigation.go_to_home());
    let all_projects = navigation.map(|navigation| navigation.go_to_home());

    // Each bump asks the gallery to show the location tab.
    let locate = use_state(|| 0u32);
    let view_on_map = {
        let locate = locate.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Jumping to project location");
            locate.set(*locate + 1);
        })
    };

    let project = &props.project;

    html! {
        <div class="project-detail">
            <style>
                {r#"
                    .back-bar {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        background: var(--background);
                        border-bottom: 1px solid var(--border);
                    }
                    .back-bar .container {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 0.75rem;
                        padding-bottom: 0.75rem;
                    }
                    .back-link {
                        background: none;
                        border: none;
                        color: var(--foreground);
                        font: inherit;
                        cursor: pointer;
                    }
                    .back-link:hover {
                        color: var(--accent);
                    }
                    .back-bar img {
                        height: 2rem;
                    }
                    .detail-hero {
                        position: relative;
                        height: 70vh;
                        min-height: 26rem;
                        overflow: hidden;
                    }
                    .detail-hero .image-loader {
                        position: absolute;
                        inset: 0;
                    }
                    .detail-hero-text {
                        position: absolute;
                        inset: auto 0 0 0;
                        padding: 3rem 0;
                        color: #fff;
                        background: linear-gradient(transparent, rgba(0, 0, 0, 0.75));
                    }
                    .detail-hero-text h1 {
                        font-size: clamp(2.5rem, 6vw, 4rem);
                        margin: 0.5rem 0;
                    }
                    .detail-status {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2.5rem;
                    }
                    .stat {
                        padding: 1.5rem;
                        border: 1px solid var(--border);
                        border-radius: 0.75rem;
                    }
                    .stat dt {
                        color: var(--muted-foreground);
                        font-size: 0.85rem;
                        text-transform: uppercase;
                    }
                    .stat dd {
                        margin: 0.5rem 0 0;
                        font-size: 1.15rem;
                        font-weight: 600;
                    }
                    .spec-table {
                        width: 100%;
                        border-collapse: collapse;
                    }
                    .spec-table th,
                    .spec-table td {
                        text-align: left;
                        padding: 0.9rem 0.5rem;
                        border-bottom: 1px solid var(--border);
                        vertical-align: top;
                    }
                    .spec-table th {
                        width: 30%;
                    }
                    .pill-list {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        list-style: none;
                        padding: 0;
                    }
                    .pill-list li {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: var(--secondary);
                    }
                    .detail-cta {
                        text-align: center;
                    }
                    .detail-cta ul {
                        justify-content: center;
                    }
                    .cta-actions {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                "#}
            </style>
            <div class="back-bar">
                <div class="container">
                    <button class="back-link" onclick={back}>{"← Back to Projects"}</button>
                    <img src={SITE_LOGO} alt="Saridena Logo" />
                </div>
            </div>

            <header class="detail-hero">
                <ImageLoader src={project.hero_image.clone()} alt={project.name.clone()} eager=true />
                <div class="detail-hero-text">
                    <div class="container">
                        <span class="detail-status">{ project.status.clone() }</span>
                        <h1>{ project.name.clone() }</h1>
                        <p>{ project.tagline.clone() }</p>
                        <p>{ project.location.clone() }</p>
                    </div>
                </div>
            </header>

            <main>
                <Reveal class={classes!("page-section")}>
                    <div class="container">
                        <p class="section-kicker">{ project.kind.clone() }</p>
                        <h2 class="section-heading">{"Overview"}</h2>
                        { for project.overview.iter().map(|paragraph| html! {
                            <p class="section-lead">{ paragraph.clone() }</p>
                        }) }
                        <dl class="stats-grid">
                            { for project.stats.iter().map(|stat| html! {
                                <div key={stat.label.clone()} class="stat">
                                    <dt>{ stat.label.clone() }</dt>
                                    <dd>{ stat.value.clone() }</dd>
                                </div>
                            }) }
                        </dl>
                    </div>
                </Reveal>

                <section class="page-section">
                    <div class="container">
                        <ProjectGallery catalog={project.catalog.clone()} locate={*locate} />
                    </div>
                </section>

                <Reveal class={classes!("page-section", "muted-section")}>
                    <div class="container">
                        <h2 class="section-heading">{"Project Specification"}</h2>
                        <table class="spec-table">
                            <tbody>
                                { for project.specifications.iter().map(|spec| html! {
                                    <tr key={spec.label.clone()}>
                                        <th>{ spec.label.clone() }</th>
                                        <td>{ spec.value.clone() }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                        <h3>{"Community"}</h3>
                        { for project.community.iter().map(|line| html! { <p>{ line.clone() }</p> }) }
                    </div>
                </Reveal>

                <Reveal class={classes!("page-section")}>
                    <div class="container">
                        <h2 class="section-heading">{"Amenities"}</h2>
                        <ul class="pill-list">
                            { for project.amenities.iter().map(|amenity| html! {
                                <li>{ amenity.clone() }</li>
                            }) }
                        </ul>
                    </div>
                </Reveal>

                <Reveal class={classes!("page-section", "muted-section", "detail-cta")}>
                    <div class="container">
                        <h2 class="section-heading">{ format!("Discover {}", project.name) }</h2>
                        <ul class="pill-list">
                            { for project.highlights.iter().map(|highlight| html! {
                                <li>{ highlight.clone() }</li>
                            }) }
                        </ul>
                        <div class="cta-actions">
                            <button class="button button-primary" onclick={view_on_map}>{"View on Google Maps"}</button>
                            <button class="button button-outline" onclick={all_projects}>{"View All Projects"}</button>
                        </div>
                    </div>
                </Reveal>
            </main>
            <Footer />
        </div>
    }
}
