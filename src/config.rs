use log::Level;

/// How long the splash loader stays up before the first real view renders.
pub const SPLASH_DURATION_MS: u32 = 3000;

/// Delay before scrolling a home section into view after a view switch,
/// so the target section has mounted.
pub const SECTION_SCROLL_DELAY_MS: u32 = 100;

/// Fragment that selects the standalone project detail page.
pub const PROJECT_DETAIL_FRAGMENT: &str = "lakewood-villas";

/// Anchor of the projects section on the home page.
pub const PROJECTS_ANCHOR: &str = "projects";

/// Section anchors rendered by the home page, in page order.
pub const HOME_SECTION_ANCHORS: [&str; 5] = ["home", "about", "services", PROJECTS_ANCHOR, "contact"];

/// Id of the gallery block on the project detail page.
pub const PROJECT_GALLERY_ID: &str = "project-gallery";

pub const SITE_LOGO: &str = "/saridena_constructions/photos/saridena_logo.png";

pub const THEME_STORAGE_KEY: &str = "saridena-theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
