use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::theme::ModeToggle;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

const LINK_STAGGER_MS: u32 = 100;

/// How many links are visible after the next stagger step, if any remain hidden.
fn next_shown(count: usize) -> Option<usize> {
    (count < NAV_LINKS.len()).then(|| count + 1)
}

/// Floating pill nav. Links are plain anchors; the hash listener routes them.
#[function_component(Header)]
pub fn header() -> Html {
    // Links slide in one after another on first render.
    let shown = use_state(|| 0usize);

    {
        let count = *shown;
        let shown = shown.clone();
        use_effect_with_deps(
            move |count| {
                let timeout = next_shown(*count)
                    .map(|next| Timeout::new(LINK_STAGGER_MS, move || shown.set(next)));
                move || drop(timeout)
            },
            count,
        );
    }

    html! {
        <div class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                    }
                    .site-header nav {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.9rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(16px);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                    }
                    .nav-link {
                        color: var(--foreground);
                        font-weight: 500;
                        text-decoration: none;
                        opacity: 0;
                        transform: translateY(-10px);
                        transition: opacity 0.3s ease, transform 0.3s ease, color 0.2s;
                    }
                    .nav-link.shown {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .nav-link:hover {
                        color: var(--accent);
                    }
                "#}
            </style>
            <nav>
                { for NAV_LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                    <a
                        key={*href}
                        href={*href}
                        class={classes!("nav-link", (i < *shown).then(|| "shown"))}
                    >
                        {*label}
                    </a>
                }) }
                <ModeToggle />
            </nav>
        </div>
    }
}
