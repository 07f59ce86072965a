use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::gallery::{Direction, MediaItem, MediaKind};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub item: MediaItem,
    /// One-based, counted over the items the lightbox can show.
    pub position: usize,
    pub total: usize,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<Direction>,
    /// Raw `KeyboardEvent.key` values while the overlay is mounted.
    pub on_key: Callback<String>,
}

/// Full-screen viewer. Mount it only while a lightbox is open: the window
/// keydown listener lives exactly as long as this component.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_key = props.on_key.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            on_key.emit(e.key());
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let step = |direction: Direction| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_navigate.emit(direction);
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let media = match &props.item.kind {
        MediaKind::Image { path } => html! {
            <img src={path.clone()} alt={props.item.name.clone()} class="lightbox-media" />
        },
        MediaKind::Model3d { model_url } => html! {
            <@{"model-viewer"}
                src={model_url.clone()}
                alt={props.item.name.clone()}
                camera-controls="true"
                auto-rotate="true"
                class="lightbox-media lightbox-model"
            />
        },
        MediaKind::EmbeddedMap { .. } => html! {},
    };

    html! {
        <div class="lightbox" onclick={close.clone()}>
            <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
            <button
                class="lightbox-nav lightbox-prev"
                aria-label="Previous image"
                onclick={step(Direction::Prev)}
            >
                {"‹"}
            </button>
            <button
                class="lightbox-nav lightbox-next"
                aria-label="Next image"
                onclick={step(Direction::Next)}
            >
                {"›"}
            </button>
            <div class="lightbox-stage" onclick={swallow}>
                { media }
                <div class="lightbox-caption">
                    <p class="lightbox-title">{ props.item.name.clone() }</p>
                    <p class="lightbox-count">{ format!("{} of {}", props.position, props.total) }</p>
                </div>
            </div>
        </div>
    }
}
