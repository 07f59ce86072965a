use web_sys::Element;
use yew::prelude::*;

use crate::dom::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct ImageLoaderProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Eager images skip the visibility wait.
    #[prop_or_default]
    pub eager: bool,
}

/// Image with a pulsing placeholder until it has loaded.
///
/// Lazy images only mount their `<img>` once 10% of the frame is visible.
/// A failed load leaves the placeholder up.
#[function_component(ImageLoader)]
pub fn image_loader(props: &ImageLoaderProps) -> Html {
    let loaded = use_state(|| false);
    let in_view = use_state(|| false);
    let frame = use_node_ref();

    {
        let in_view = in_view.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |eager| {
                let observer = if *eager {
                    None
                } else {
                    frame.cast::<Element>().and_then(|element| {
                        VisibilityObserver::observe_once(&element, 0.1, move || in_view.set(true))
                    })
                };
                move || drop(observer)
            },
            props.eager,
        );
    }

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let show_img = props.eager || *in_view;
    let loading = if props.eager { "eager" } else { "lazy" };

    html! {
        <div ref={frame} class={classes!("image-loader", props.class.clone())}>
            if !*loaded {
                <div class="image-placeholder"><div class="spinner"></div></div>
            }
            if show_img {
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    class={classes!("image-loader-img", (*loaded).then(|| "loaded"))}
                    loading={loading}
                    decoding="async"
                    onload={onload}
                    onclick={props.onclick.clone()}
                />
            }
        </div>
    }
}
