use web_sys::Element;
use yew::prelude::*;

use crate::dom::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.2)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Section that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |threshold| {
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe_once(&element, *threshold, move || {
                        revealed.set(true);
                    })
                });
                move || drop(observer)
            },
            props.threshold,
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), (*revealed).then(|| "revealed"))}
        >
            { for props.children.iter() }
        </section>
    }
}
