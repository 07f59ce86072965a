use yew::prelude::*;

use crate::config::{SITE_LOGO, SPLASH_DURATION_MS};

#[function_component(Loader)]
pub fn loader() -> Html {
    let fill = format!("animation-duration: {}ms;", SPLASH_DURATION_MS);

    html! {
        <div class="loader-container">
            <style>
                {r#"
                    .loader-container {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        background: var(--background);
                        z-index: 100;
                    }
                    .loader-logo {
                        width: 180px;
                        height: auto;
                        animation: loaderPulse 1.5s ease-in-out infinite;
                    }
                    .progress-bar-container {
                        width: 220px;
                        height: 3px;
                        background: var(--muted);
                        border-radius: 2px;
                        overflow: hidden;
                    }
                    .progress-bar {
                        height: 100%;
                        width: 0;
                        background: var(--primary);
                        animation-name: loaderFill;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }
                    @keyframes loaderFill {
                        from { width: 0; }
                        to { width: 100%; }
                    }
                    @keyframes loaderPulse {
                        0%, 100% { opacity: 0.85; }
                        50% { opacity: 1; }
                    }
                "#}
            </style>
            <img src={SITE_LOGO} alt="Saridena Constructions" class="loader-logo" />
            <div class="progress-bar-container">
                <div class="progress-bar" style={fill}></div>
            </div>
        </div>
    }
}
