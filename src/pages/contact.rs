use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;

const OFFICE_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3806.364132382749!2d78.37205527578001!3d17.44227730122031!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bcb930075c2b685%3A0x5bc8df8a8dd5561b!2sSaridena%20Constructions%20Pvt.%20Ltd.!5e0!3m2!1sen!2sin!4v1754119943453!5m2!1sen!2sin";
const OFFICE_MAP_LINK: &str = "https://maps.app.goo.gl/6rtDxSb5oQHDvC4q7";

/// Contact section. Messages are not sent anywhere yet, the form only
/// acknowledges the visitor inline.
#[function_component(Contact)]
pub fn contact() -> Html {
    let name_input = use_node_ref();
    let sent_by = use_state(|| None::<String>);

    let onsubmit = {
        let name_input = name_input.clone();
        let sent_by = sent_by.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_input
                .cast::<HtmlInputElement>()
                .map(|input| input.value().trim().to_string())
                .unwrap_or_default();
            info!("Contact form submitted");
            sent_by.set(Some(name));
        })
    };

    let acknowledgement = match &*sent_by {
        Some(name) if !name.is_empty() => format!("Thank you, {}. We will be in touch shortly.", name),
        Some(_) => "Thank you. We will be in touch shortly.".to_string(),
        None => String::new(),
    };

    html! {
        <Reveal id="contact" class={classes!("page-section")}>
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        font-weight: 600;
                        font-size: 0.9rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem;
                        border: 1px solid var(--border);
                        border-radius: 0.5rem;
                        background: var(--background);
                        color: var(--foreground);
                        font: inherit;
                    }
                    .contact-thanks {
                        color: var(--primary);
                        font-weight: 600;
                    }
                    .contact-info dt {
                        font-weight: 600;
                        margin-top: 1.25rem;
                    }
                    .contact-info dd {
                        margin: 0.25rem 0 0;
                        color: var(--muted-foreground);
                    }
                    .contact-info a {
                        color: inherit;
                    }
                    .contact-map {
                        margin-top: 1.5rem;
                        height: 14rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-heading">{"Get In Touch"}</h2>
                    <p class="section-lead">
                        {"Have a project in mind or want to learn more about our services? We'd love to hear from you."}
                    </p>
                </div>
                <div class="contact-grid">
                    <div>
                        <h3>{"Send Us a Message"}</h3>
                        <form class="contact-form" onsubmit={onsubmit}>
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" type="text" placeholder="Your Name" ref={name_input} />
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" type="email" placeholder="your@example.com" />
                            <label for="contact-subject">{"Subject"}</label>
                            <input id="contact-subject" type="text" placeholder="Project Inquiry" />
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" rows="5" placeholder="Tell us about your project..." />
                            <button type="submit" class="button button-primary">{"Send Message"}</button>
                            if sent_by.is_some() {
                                <p class="contact-thanks">{ acknowledgement }</p>
                            }
                        </form>
                    </div>
                    <div>
                        <h3>{"Contact Information"}</h3>
                        <dl class="contact-info">
                            <dt>{"Email Us"}</dt>
                            <dd><a href="mailto:info@saridena.com">{"info@saridena.com"}</a></dd>
                            <dt>{"Call Us"}</dt>
                            <dd><a href="tel:+1234567890">{"+1 (234) 567-890"}</a></dd>
                            <dt>{"Visit Our Office"}</dt>
                            <dd>
                                <address>{"Saridena Constructions Pvt. Ltd., Hyderabad, Telangana"}</address>
                            </dd>
                            <dt>{"Business Hours"}</dt>
                            <dd>{"Monday - Saturday: 9:30 AM - 6:00 PM"}</dd>
                            <dd>{"Sunday: Closed"}</dd>
                        </dl>
                        <div class="map-tile contact-map">
                            <iframe
                                src={OFFICE_MAP_EMBED}
                                title="Saridena Constructions office"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                            <a href={OFFICE_MAP_LINK} target="_blank" rel="noopener noreferrer" class="map-overlay">
                                {"View in Larger Map"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
