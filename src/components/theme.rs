use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn stored_theme() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or(Theme::Light)
}

fn store_theme(theme: Theme) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                warn!("Could not persist theme");
            }
        }
    }
}

/// Toggles the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
    }
}

#[function_component(ModeToggle)]
pub fn mode_toggle() -> Html {
    let theme = use_state(stored_theme);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            debug!("Theme -> {}", next.as_str());
            apply_theme(next);
            store_theme(next);
            theme.set(next);
        })
    };

    let dark = *theme == Theme::Dark;
    html! {
        <button
            class={classes!("mode-toggle", dark.then(|| "on"))}
            role="switch"
            aria-checked={dark.to_string()}
            aria-label="Toggle dark mode"
            onclick={onclick}
        >
            <span class="mode-toggle-thumb">{ if dark { "☾" } else { "☀" } }</span>
        </button>
    }
}
