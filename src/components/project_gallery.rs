use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::image_loader::ImageLoader;
use crate::components::lightbox::Lightbox;
use crate::config::PROJECT_GALLERY_ID;
use crate::dom::{self, BodyScrollLock};
use crate::gallery::{Direction, GalleryController, MediaCatalog, MediaCategory, MediaItem, MediaKind};

const COL_SPANS: [u8; 16] = [6, 6, 4, 8, 5, 7, 3, 9, 8, 4, 6, 6, 7, 5, 4, 8];
const ROW_SPANS: [u8; 16] = [1, 2, 1, 1, 2, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1];

/// Images this close to the front load eagerly.
const EAGER_COUNT: usize = 3;

/// Slide keys carry the category so a tab switch remounts every tile.
fn tile_key(category: MediaCategory, index: usize) -> String {
    format!("{}-{}", category.label(), index)
}

fn collage_style(index: usize) -> String {
    format!(
        "grid-column: span {}; grid-row: span {};",
        COL_SPANS[index % COL_SPANS.len()],
        ROW_SPANS[index % ROW_SPANS.len()]
    )
}

#[derive(Properties, PartialEq)]
pub struct ProjectGalleryProps {
    pub catalog: Rc<MediaCatalog>,
    /// Bumping this jumps to the location tab and scrolls the gallery into view.
    #[prop_or_default]
    pub locate: u32,
}

#[function_component(ProjectGallery)]
pub fn project_gallery(props: &ProjectGalleryProps) -> Html {
    let controller = {
        let catalog = props.catalog.clone();
        use_mut_ref(move || GalleryController::new(catalog, BodyScrollLock))
    };
    let redraw = use_force_update();
    let carousel = use_node_ref();

    // Release the scroll lock even if the page goes away with the lightbox up.
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    controller.borrow_mut().close_lightbox();
                }
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |locate| {
                if *locate > 0 {
                    controller
                        .borrow_mut()
                        .select_category(MediaCategory::LocationAndLayout);
                    redraw.force_update();
                    dom::scroll_into_view(PROJECT_GALLERY_ID);
                }
                || ()
            },
            props.locate,
        );
    }

    let epoch = controller.borrow().carousel_epoch();
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(track) = carousel.cast::<Element>() {
                    track.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            epoch,
        );
    }

    let select = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        move |category: MediaCategory| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                controller.borrow_mut().select_category(category);
                redraw.force_update();
            })
        }
    };

    let open = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        move |index: usize| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                match controller.borrow_mut().open_lightbox(index) {
                    Ok(item) => debug!("Opened {}", item.name),
                    Err(e) => warn!("Lightbox request rejected: {}", e),
                }
                redraw.force_update();
            })
        }
    };

    let on_close = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            controller.borrow_mut().close_lightbox();
            redraw.force_update();
        })
    };

    let on_navigate = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |direction: Direction| {
            controller.borrow_mut().navigate(direction);
            redraw.force_update();
        })
    };

    let on_key = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |key: String| {
            if controller.borrow_mut().handle_key(&key) {
                redraw.force_update();
            }
        })
    };

    let scroll_track = |direction: Direction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = carousel.cast::<Element>() {
                let width = f64::from(track.client_width());
                let dx = match direction {
                    Direction::Prev => -width,
                    Direction::Next => width,
                };
                track.scroll_by_with_x_and_y(dx, 0.0);
            }
        })
    };

    let gallery = controller.borrow();
    let selected = gallery.selected_category();
    let items = gallery.items();

    let tile = |index: usize, item: &MediaItem| -> Html {
        match &item.kind {
            MediaKind::EmbeddedMap {
                embed_url,
                external_url,
            } => html! {
                <div class="map-tile">
                    <iframe
                        src={embed_url.clone()}
                        title={item.name.clone()}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                    <a href={external_url.clone()} target="_blank" rel="noopener noreferrer" class="map-overlay">
                        {"View in Larger Map"}
                    </a>
                </div>
            },
            MediaKind::Image { path } => html! {
                <ImageLoader
                    src={path.clone()}
                    alt={item.name.clone()}
                    class={classes!("gallery-image")}
                    eager={index < EAGER_COUNT}
                    onclick={open(index)}
                />
            },
            MediaKind::Model3d { .. } => html! {
                <button class="model-tile" onclick={open(index)}>
                    <span>{"3D"}</span>
                    <span class="model-tile-name">{ item.name.clone() }</span>
                </button>
            },
        }
    };

    let body = if selected == MediaCategory::LocationAndLayout {
        html! {
            <div class="gallery-collage">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <div key={tile_key(selected, index)} class="gallery-tile" style={collage_style(index)}>
                        { tile(index, item) }
                    </div>
                }) }
            </div>
        }
    } else {
        html! {
            <div class="gallery-carousel">
                <button class="carousel-nav carousel-prev" aria-label="Previous slides" onclick={scroll_track(Direction::Prev)}>{"‹"}</button>
                <div class="carousel-track" ref={carousel.clone()}>
                    { for items.iter().enumerate().map(|(index, item)| html! {
                        <div key={tile_key(selected, index)} class="carousel-slide">
                            <div class="gallery-tile">{ tile(index, item) }</div>
                        </div>
                    }) }
                </div>
                <button class="carousel-nav carousel-next" aria-label="Next slides" onclick={scroll_track(Direction::Next)}>{"›"}</button>
            </div>
        }
    };

    let lightbox = match (gallery.lightbox_position(), gallery.active_item()) {
        (Some((position, total)), Some(item)) => html! {
            <Lightbox
                item={item.clone()}
                position={position}
                total={total}
                on_close={on_close}
                on_navigate={on_navigate}
                on_key={on_key}
            />
        },
        _ => html! {},
    };

    html! {
        <div id={PROJECT_GALLERY_ID} class="project-gallery">
            <h3 class="section-heading">{"PROJECT GALLERY"}</h3>
            <nav class="gallery-tabs">
                { for gallery.catalog().categories().map(|category| html! {
                    <button
                        key={category.label()}
                        class={classes!("gallery-tab", (category == selected).then(|| "active"))}
                        onclick={select(category)}
                    >
                        { category.label() }
                    </button>
                }) }
            </nav>
            { body }
            { lightbox }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_keys_differ_between_tabs() {
        assert_ne!(
            tile_key(MediaCategory::Exterior, 0),
            tile_key(MediaCategory::Interior, 0)
        );
        assert_eq!(tile_key(MediaCategory::FloorPlan, 2), "Floor Plan-2");
    }

    #[test]
    fn collage_spans_cycle() {
        assert_eq!(collage_style(0), collage_style(COL_SPANS.len()));
        assert_eq!(collage_style(1), "grid-column: span 6; grid-row: span 2;");
    }
}
