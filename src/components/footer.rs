use chrono::Datelike;
use yew::prelude::*;

use crate::config::SITE_LOGO;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: var(--secondary);
                        border-top: 1px solid var(--border);
                        padding: 1rem 0;
                        font-size: 0.875rem;
                    }
                    .site-footer .container {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .footer-logo {
                        height: 2rem;
                        width: auto;
                        filter: drop-shadow(2px 2px 10px rgba(255, 255, 255, 0.6));
                    }
                    .footer-social a {
                        margin-left: 1rem;
                        color: var(--foreground);
                        text-decoration: none;
                    }
                    .footer-social a:hover {
                        color: var(--accent);
                    }
                "#}
            </style>
            <div class="container">
                <img src={SITE_LOGO} alt="Saridena Logo" class="footer-logo" />
                <p>{format!("© {} Saridena Constructions Pvt. Ltd.", year)}</p>
                <div class="footer-social">
                    <a href="#" aria-label="Facebook">{"Facebook"}</a>
                    <a href="#" aria-label="Instagram">{"Instagram"}</a>
                    <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </div>
        </footer>
    }
}
