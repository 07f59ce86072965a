use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod gallery;
mod navigation;
mod components {
    pub mod footer;
    pub mod header;
    pub mod image_loader;
    pub mod lightbox;
    pub mod loader;
    pub mod project_gallery;
    pub mod reveal;
    pub mod theme;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod project_detail;
}

use components::loader::Loader;
use config::{SECTION_SCROLL_DELAY_MS, SPLASH_DURATION_MS};
use content::FeaturedProject;
use navigation::{NavEffect, NavState, NavigationController, NavigationEvent};
use pages::{home::Home, project_detail::ProjectDetail};

/// In-app navigation requests flow through this instead of window events.
#[derive(Clone, PartialEq)]
pub struct NavigationContext {
    pub dispatch: Callback<NavigationEvent>,
}

impl NavigationContext {
    pub fn go_to_project_detail(&self) -> Callback<MouseEvent> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(NavigationEvent::GoToProjectDetail);
        })
    }

    pub fn go_to_home(&self) -> Callback<MouseEvent> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(NavigationEvent::GoToHome);
        })
    }
}

fn apply_effects(effects: Vec<NavEffect>, scroll_timer: &RefCell<Option<Timeout>>) {
    for effect in effects {
        match effect {
            NavEffect::SetFragment(fragment) => dom::set_fragment(fragment),
            NavEffect::ClearFragment => dom::clear_fragment(),
            NavEffect::ScrollToTop => dom::scroll_to_top(),
            NavEffect::ScrollToSection(section) => {
                // Replacing the handle cancels any scroll still pending.
                let timeout = Timeout::new(SECTION_SCROLL_DELAY_MS, move || {
                    dom::scroll_into_view(section);
                });
                *scroll_timer.borrow_mut() = Some(timeout);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub project: Rc<FeaturedProject>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let nav = use_mut_ref(|| NavigationController::new(&dom::current_fragment(), dom::now_ms()));
    let state = use_state(|| nav.borrow().state());
    let scroll_timer = use_mut_ref(|| None::<Timeout>);

    let dispatch = {
        let nav = nav.clone();
        let state = state.clone();
        let scroll_timer = scroll_timer.clone();
        Callback::from(move |event: NavigationEvent| {
            let effects = nav.borrow_mut().handle(event);
            apply_effects(effects, &scroll_timer);
            state.set(nav.borrow().state());
        })
    };

    {
        let nav = nav.clone();
        let scroll_timer = scroll_timer.clone();
        use_effect_with_deps(
            move |_| {
                apply_effects(nav.borrow().mount_effects(), &scroll_timer);
                || ()
            },
            (),
        );
    }

    // Splash gate: (attempt, delay). A timer that fires before the splash
    // has run its course bumps the attempt and re-arms for the remainder.
    // Dropping the timeout on unmount cancels the hand-over.
    let splash_attempt = use_state(|| (0u32, SPLASH_DURATION_MS));
    {
        let pending = *splash_attempt;
        let nav = nav.clone();
        let state = state.clone();
        let scroll_timer = scroll_timer.clone();
        let splash_attempt = splash_attempt.clone();
        use_effect_with_deps(
            move |&(attempt, delay)| {
                let loading = nav.borrow().state() == NavState::Loading;
                let splash = loading.then(|| {
                    Timeout::new(delay, move || {
                        let now = dom::now_ms();
                        let effects = nav.borrow_mut().poll_splash(now);
                        match effects {
                            Some(effects) => {
                                apply_effects(effects, &scroll_timer);
                                state.set(nav.borrow().state());
                            }
                            None => {
                                let remaining = nav.borrow().splash_remaining_ms(now);
                                warn!("Splash timer fired early, re-arming for {} ms", remaining);
                                splash_attempt.set((attempt + 1, remaining));
                            }
                        }
                    })
                });
                move || drop(splash)
            },
            pending,
        );
    }

    {
        let scroll_timer = scroll_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    scroll_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Hash changes only matter once the splash is gone.
    {
        let dispatch = dispatch.clone();
        let listening = nav.borrow().is_listening();
        use_effect_with_deps(
            move |listening| {
                let attached = if *listening {
                    web_sys::window().map(|window| {
                        let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
                            dispatch.emit(NavigationEvent::HashChanged(dom::current_fragment()));
                        }) as Box<dyn FnMut(web_sys::Event)>);
                        if let Err(e) = window.add_event_listener_with_callback(
                            "hashchange",
                            on_hash_change.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to listen for hash changes: {:?}", e);
                        }
                        (window, on_hash_change)
                    })
                } else {
                    None
                };

                move || {
                    if let Some((window, on_hash_change)) = attached {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            on_hash_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            listening,
        );
    }

    let context = NavigationContext { dispatch };
    let page = match *state {
        NavState::Loading => html! { <Loader /> },
        NavState::Home => {
            info!("Rendering Home page");
            html! { <Home project={props.project.clone()} /> }
        }
        NavState::ProjectDetail => {
            info!("Rendering Project detail page");
            html! { <ProjectDetail project={props.project.clone()} /> }
        }
    };

    html! {
        <ContextProvider<NavigationContext> context={context}>
            { page }
        </ContextProvider<NavigationContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    components::theme::apply_theme(components::theme::stored_theme());

    let project = content::featured_project().expect("embedded project content is malformed");

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        project: Rc::new(project),
    })
    .render();
}
