//! Top-level view selection.
//!
//! The controller owns the single authoritative view state. The URL fragment
//! is a mirror of it: the controller reads fragments through
//! [`NavigationEvent::HashChanged`] and asks for fragment updates through
//! [`NavEffect`]s, which the caller applies to the browser.

use log::{debug, info};

use crate::config::{
    HOME_SECTION_ANCHORS, PROJECTS_ANCHOR, PROJECT_DETAIL_FRAGMENT, SPLASH_DURATION_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    ProjectDetail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Loading,
    Home,
    ProjectDetail,
}

impl From<View> for NavState {
    fn from(view: View) -> Self {
        match view {
            View::Home => NavState::Home,
            View::ProjectDetail => NavState::ProjectDetail,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    GoToProjectDetail,
    GoToHome,
    HashChanged(String),
}

/// Side effects the browser glue must apply after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEffect {
    SetFragment(&'static str),
    ClearFragment,
    ScrollToTop,
    /// Smooth-scroll a home section into view once it has mounted.
    ScrollToSection(&'static str),
}

/// Where a fragment points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    pub section: Option<&'static str>,
}

/// Resolves a raw fragment, with or without the leading `#`.
///
/// Anything other than the reserved project detail value lands on the home
/// view; known section anchors additionally name the section to reveal.
pub fn resolve_fragment(raw: &str) -> Route {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    if fragment == PROJECT_DETAIL_FRAGMENT {
        return Route {
            view: View::ProjectDetail,
            section: None,
        };
    }
    let section = HOME_SECTION_ANCHORS
        .iter()
        .copied()
        .find(|anchor| *anchor == fragment);
    Route {
        view: View::Home,
        section,
    }
}

pub struct NavigationController {
    state: NavState,
    // Where the splash hands over to. Only meaningful while loading.
    destination: Route,
    mounted_at_ms: f64,
}

impl NavigationController {
    /// Builds the controller from the fragment present at page load.
    ///
    /// The reserved project detail fragment skips the splash entirely.
    pub fn new(initial_fragment: &str, mounted_at_ms: f64) -> Self {
        let route = resolve_fragment(initial_fragment);
        let state = match route.view {
            View::ProjectDetail => NavState::ProjectDetail,
            View::Home => NavState::Loading,
        };
        info!("Navigation starting in {:?} (fragment {:?})", state, initial_fragment);
        Self {
            state,
            destination: route,
            mounted_at_ms,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Hash and in-app navigation listeners are only wanted once the splash
    /// is gone.
    pub fn is_listening(&self) -> bool {
        self.state != NavState::Loading
    }

    /// Effects to apply right after mount.
    pub fn mount_effects(&self) -> Vec<NavEffect> {
        match self.state {
            NavState::ProjectDetail => vec![NavEffect::ScrollToTop],
            _ => Vec::new(),
        }
    }

    /// Ends the splash if it has been up long enough.
    ///
    /// Returns `Some` only for the one call that performs the hand-over.
    pub fn poll_splash(&mut self, now_ms: f64) -> Option<Vec<NavEffect>> {
        if self.state != NavState::Loading {
            return None;
        }
        let elapsed = now_ms - self.mounted_at_ms;
        if elapsed < f64::from(SPLASH_DURATION_MS) {
            debug!("Splash still running ({:.0} ms elapsed)", elapsed);
            return None;
        }
        info!("Splash finished after {:.0} ms", elapsed);
        let mut effects = self.enter(self.destination.view);
        if let Some(section) = self.destination.section {
            effects.push(NavEffect::ScrollToSection(section));
        }
        Some(effects)
    }

    /// Delay before the splash is worth polling again, in whole milliseconds.
    ///
    /// Clamped to a full splash so a wall clock stepping backwards cannot
    /// push the hand-over out indefinitely.
    pub fn splash_remaining_ms(&self, now_ms: f64) -> u32 {
        let duration = f64::from(SPLASH_DURATION_MS);
        let remaining = (duration - (now_ms - self.mounted_at_ms)).ceil();
        remaining.clamp(1.0, duration) as u32
    }

    pub fn handle(&mut self, event: NavigationEvent) -> Vec<NavEffect> {
        if self.state == NavState::Loading {
            debug!("Ignoring {:?} while the splash is up", event);
            return Vec::new();
        }

        match event {
            NavigationEvent::GoToProjectDetail => {
                let mut effects = vec![NavEffect::SetFragment(PROJECT_DETAIL_FRAGMENT)];
                effects.extend(self.enter(View::ProjectDetail));
                effects
            }
            NavigationEvent::GoToHome => {
                let mut effects = Vec::new();
                if self.state == NavState::ProjectDetail {
                    effects.push(NavEffect::ClearFragment);
                }
                effects.extend(self.enter(View::Home));
                effects.push(NavEffect::ScrollToSection(PROJECTS_ANCHOR));
                effects
            }
            NavigationEvent::HashChanged(fragment) => {
                let route = resolve_fragment(&fragment);
                let mut effects = self.enter(route.view);
                if let Some(section) = route.section {
                    effects.push(NavEffect::ScrollToSection(section));
                }
                effects
            }
        }
    }

    fn enter(&mut self, view: View) -> Vec<NavEffect> {
        let next = NavState::from(view);
        if self.state == next {
            return Vec::new();
        }
        info!("Navigation {:?} -> {:?}", self.state, next);
        self.state = next;
        match view {
            View::ProjectDetail => vec![NavEffect::ScrollToTop],
            View::Home => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_home() -> NavigationController {
        let mut nav = NavigationController::new("", 0.0);
        nav.poll_splash(f64::from(SPLASH_DURATION_MS));
        nav
    }

    #[test]
    fn non_reserved_fragments_resolve_home() {
        for fragment in ["", "#", "about", "#contact", "projects", "garbage", "lakewood", "#LAKEWOOD-VILLAS"] {
            assert_eq!(resolve_fragment(fragment).view, View::Home, "{fragment:?}");
        }
        assert_eq!(resolve_fragment("#lakewood-villas").view, View::ProjectDetail);
        assert_eq!(resolve_fragment("lakewood-villas").view, View::ProjectDetail);
    }

    #[test]
    fn section_anchors_are_recognised() {
        assert_eq!(resolve_fragment("#projects").section, Some("projects"));
        assert_eq!(resolve_fragment("contact").section, Some("contact"));
        assert_eq!(resolve_fragment("elsewhere").section, None);
        assert_eq!(resolve_fragment("").section, None);
    }

    #[test]
    fn reserved_fragment_at_load_skips_splash() {
        let nav = NavigationController::new("#lakewood-villas", 0.0);
        assert_eq!(nav.state(), NavState::ProjectDetail);
        assert!(nav.is_listening());
        assert_eq!(nav.mount_effects(), vec![NavEffect::ScrollToTop]);
    }

    #[test]
    fn splash_hands_over_once_and_not_early() {
        let mut nav = NavigationController::new("#about", 500.0);
        assert_eq!(nav.state(), NavState::Loading);
        assert!(!nav.is_listening());
        assert!(nav.mount_effects().is_empty());

        assert_eq!(nav.poll_splash(3499.0), None);
        assert_eq!(nav.state(), NavState::Loading);

        assert_eq!(
            nav.poll_splash(3500.0),
            Some(vec![NavEffect::ScrollToSection("about")])
        );
        assert_eq!(nav.state(), NavState::Home);
        assert!(nav.is_listening());

        assert_eq!(nav.poll_splash(9000.0), None);
        assert_eq!(nav.state(), NavState::Home);
    }

    #[test]
    fn early_poll_reports_the_remaining_delay() {
        let mut nav = NavigationController::new("", 1000.0);
        assert_eq!(nav.poll_splash(3995.0), None);
        let remaining = nav.splash_remaining_ms(3995.0);
        assert_eq!(remaining, 5);

        let effects = nav.poll_splash(3995.0 + f64::from(remaining));
        assert_eq!(effects, Some(Vec::new()));
        assert_eq!(nav.state(), NavState::Home);
    }

    #[test]
    fn remaining_delay_is_bounded_by_one_splash() {
        let nav = NavigationController::new("", 1000.0);
        // Clock stepped back past the mount time.
        assert_eq!(nav.splash_remaining_ms(200.0), SPLASH_DURATION_MS);
        assert_eq!(nav.splash_remaining_ms(3999.2), 1);
        assert_eq!(nav.splash_remaining_ms(50_000.0), 1);
    }

    #[test]
    fn events_during_splash_are_ignored() {
        let mut nav = NavigationController::new("", 0.0);
        assert!(nav.handle(NavigationEvent::GoToProjectDetail).is_empty());
        assert!(nav
            .handle(NavigationEvent::HashChanged("lakewood-villas".into()))
            .is_empty());
        assert_eq!(nav.state(), NavState::Loading);
    }

    #[test]
    fn details_action_opens_project_page() {
        let mut nav = ready_home();
        let effects = nav.handle(NavigationEvent::GoToProjectDetail);
        assert_eq!(nav.state(), NavState::ProjectDetail);
        assert_eq!(
            effects,
            vec![
                NavEffect::SetFragment(PROJECT_DETAIL_FRAGMENT),
                NavEffect::ScrollToTop
            ]
        );
    }

    #[test]
    fn mirrored_hash_change_after_details_is_a_no_op() {
        let mut nav = ready_home();
        nav.handle(NavigationEvent::GoToProjectDetail);
        let effects = nav.handle(NavigationEvent::HashChanged("#lakewood-villas".into()));
        assert!(effects.is_empty());
        assert_eq!(nav.state(), NavState::ProjectDetail);
    }

    #[test]
    fn back_action_returns_to_projects_section() {
        let mut nav = NavigationController::new("lakewood-villas", 0.0);
        let effects = nav.handle(NavigationEvent::GoToHome);
        assert_eq!(nav.state(), NavState::Home);
        assert_eq!(
            effects,
            vec![
                NavEffect::ClearFragment,
                NavEffect::ScrollToSection(PROJECTS_ANCHOR)
            ]
        );
    }

    #[test]
    fn empty_hash_leaves_project_page() {
        let mut nav = NavigationController::new("lakewood-villas", 0.0);
        let effects = nav.handle(NavigationEvent::HashChanged(String::new()));
        assert_eq!(nav.state(), NavState::Home);
        assert!(effects.is_empty());
    }

    #[test]
    fn projects_anchor_leaves_project_page_and_scrolls() {
        let mut nav = NavigationController::new("lakewood-villas", 0.0);
        let effects = nav.handle(NavigationEvent::HashChanged("#projects".into()));
        assert_eq!(nav.state(), NavState::Home);
        assert_eq!(effects, vec![NavEffect::ScrollToSection("projects")]);
    }

    #[test]
    fn unknown_hash_is_treated_as_home() {
        let mut nav = NavigationController::new("lakewood-villas", 0.0);
        let effects = nav.handle(NavigationEvent::HashChanged("#%%nonsense".into()));
        assert_eq!(nav.state(), NavState::Home);
        assert!(effects.is_empty());
    }

    #[test]
    fn hash_change_can_open_project_page_from_home() {
        let mut nav = ready_home();
        let effects = nav.handle(NavigationEvent::HashChanged("#lakewood-villas".into()));
        assert_eq!(nav.state(), NavState::ProjectDetail);
        assert_eq!(effects, vec![NavEffect::ScrollToTop]);
    }
}
