//! Category-filtered media gallery with a lightbox overlay.
//!
//! The page scroll lock is held by the open lightbox itself, so every path
//! that drops the lightbox (close, category change, dropping the controller)
//! releases the lock.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

/// Gallery tabs. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum MediaCategory {
    #[serde(rename = "Location and layout")]
    LocationAndLayout,
    Exterior,
    #[serde(rename = "Floor Plan")]
    FloorPlan,
    Interior,
    #[serde(rename = "Isometric View")]
    IsometricView,
}

impl MediaCategory {
    pub const ORDER: [MediaCategory; 5] = [
        MediaCategory::LocationAndLayout,
        MediaCategory::Exterior,
        MediaCategory::FloorPlan,
        MediaCategory::Interior,
        MediaCategory::IsometricView,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MediaCategory::LocationAndLayout => "Location and layout",
            MediaCategory::Exterior => "Exterior",
            MediaCategory::FloorPlan => "Floor Plan",
            MediaCategory::Interior => "Interior",
            MediaCategory::IsometricView => "Isometric View",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaKind {
    Image { path: String },
    /// Non-interactive map frame plus a link out to the full maps site.
    EmbeddedMap { embed_url: String, external_url: String },
    Model3d { model_url: String },
}

impl MediaKind {
    /// Whether the item can be shown in the lightbox.
    pub fn is_viewable(&self) -> bool {
        !matches!(self, MediaKind::EmbeddedMap { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    pub name: String,
    #[serde(flatten)]
    pub kind: MediaKind,
}

/// Read-only media lists per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaCatalog {
    items: BTreeMap<MediaCategory, Vec<MediaItem>>,
}

impl MediaCatalog {
    pub fn new(items: BTreeMap<MediaCategory, Vec<MediaItem>>) -> Self {
        Self { items }
    }

    /// Categories that have an entry, in display order.
    pub fn categories(&self) -> impl Iterator<Item = MediaCategory> + '_ {
        self.items.keys().copied()
    }

    pub fn items(&self, category: MediaCategory) -> &[MediaItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("lightbox index {index} out of range for {category} ({len} items)")]
    IndexOutOfRange {
        category: MediaCategory,
        index: usize,
        len: usize,
    },
    #[error("item {index} of {category} cannot be shown in the lightbox")]
    NotViewable { category: MediaCategory, index: usize },
    #[error("page scroll is already locked by another overlay")]
    ScrollLockHeld,
}

/// Exclusive page scroll suppression.
///
/// Scrolling stays suppressed for as long as the returned guard lives.
/// `acquire` yields `None` while another guard is alive.
pub trait ScrollLock {
    type Guard;

    fn acquire(&self) -> Option<Self::Guard>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Step(Direction),
}

impl LightboxKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Close),
            "ArrowLeft" => Some(LightboxKey::Step(Direction::Prev)),
            "ArrowRight" => Some(LightboxKey::Step(Direction::Next)),
            _ => None,
        }
    }
}

struct OpenLightbox<G> {
    index: usize,
    _lock: G,
}

pub struct GalleryController<L: ScrollLock> {
    catalog: Rc<MediaCatalog>,
    selected: MediaCategory,
    lightbox: Option<OpenLightbox<L::Guard>>,
    // Bumped on every category change; the carousel rewinds when it moves.
    carousel_epoch: u32,
    lock: L,
}

impl<L: ScrollLock> GalleryController<L> {
    pub fn new(catalog: Rc<MediaCatalog>, lock: L) -> Self {
        let selected = catalog
            .categories()
            .next()
            .unwrap_or(MediaCategory::LocationAndLayout);
        Self {
            catalog,
            selected,
            lightbox: None,
            carousel_epoch: 0,
            lock,
        }
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> MediaCategory {
        self.selected
    }

    pub fn items(&self) -> &[MediaItem] {
        self.catalog.items(self.selected)
    }

    pub fn carousel_epoch(&self) -> u32 {
        self.carousel_epoch
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox.as_ref().map(|open| open.index)
    }

    pub fn active_item(&self) -> Option<&MediaItem> {
        let index = self.lightbox_index()?;
        self.items().get(index)
    }

    /// One-based position of the open item among the items the lightbox can
    /// show, and how many such items the category has.
    pub fn lightbox_position(&self) -> Option<(usize, usize)> {
        let index = self.lightbox_index()?;
        let viewable = |item: &&MediaItem| item.kind.is_viewable();
        let items = self.items();
        let position = items.iter().take(index).filter(viewable).count() + 1;
        Some((position, items.iter().filter(viewable).count()))
    }

    /// Switches tabs. An open lightbox is always closed first.
    ///
    /// Returns whether a lightbox was closed.
    pub fn select_category(&mut self, category: MediaCategory) -> bool {
        let closed = self.close_lightbox();
        self.selected = category;
        self.carousel_epoch = self.carousel_epoch.wrapping_add(1);
        debug!("Gallery category -> {}", category);
        closed
    }

    pub fn open_lightbox(&mut self, index: usize) -> Result<&MediaItem, GalleryError> {
        let category = self.selected;
        let items = self.catalog.items(category);
        let item = items.get(index).ok_or(GalleryError::IndexOutOfRange {
            category,
            index,
            len: items.len(),
        })?;
        if !item.kind.is_viewable() {
            return Err(GalleryError::NotViewable { category, index });
        }

        match self.lightbox.as_mut() {
            Some(open) => open.index = index,
            None => {
                let lock = self.lock.acquire().ok_or(GalleryError::ScrollLockHeld)?;
                self.lightbox = Some(OpenLightbox { index, _lock: lock });
            }
        }
        debug!("Lightbox open at {} {}/{}", category, index + 1, items.len());
        Ok(item)
    }

    /// Returns whether a lightbox was open.
    pub fn close_lightbox(&mut self) -> bool {
        let was_open = self.lightbox.take().is_some();
        if was_open {
            debug!("Lightbox closed");
        }
        was_open
    }

    /// Steps the lightbox with wraparound, skipping items it cannot show.
    ///
    /// Returns the new index, or `None` when no lightbox is open.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let catalog = Rc::clone(&self.catalog);
        let items = catalog.items(self.selected);
        let open = self.lightbox.as_mut()?;
        let len = items.len();
        if len == 0 {
            warn!("Lightbox open over an empty category");
            return None;
        }

        let mut next = open.index;
        for _ in 0..len {
            next = match direction {
                Direction::Prev if next == 0 => len - 1,
                Direction::Prev => next - 1,
                Direction::Next if next + 1 >= len => 0,
                Direction::Next => next + 1,
            };
            if items[next].kind.is_viewable() {
                break;
            }
        }
        open.index = next;
        debug!("Lightbox {:?} -> {}/{}", direction, next + 1, len);
        Some(next)
    }

    /// Applies a keyboard shortcut. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.lightbox.is_none() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close_lightbox(),
            Some(LightboxKey::Step(direction)) => self.navigate(direction).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Single-holder lock that counts live guards.
    #[derive(Clone, Default)]
    struct CountingLock {
        held: Rc<Cell<u32>>,
        acquisitions: Rc<Cell<u32>>,
    }

    struct CountingGuard(Rc<Cell<u32>>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl ScrollLock for CountingLock {
        type Guard = CountingGuard;

        fn acquire(&self) -> Option<CountingGuard> {
            if self.held.get() > 0 {
                return None;
            }
            self.held.set(1);
            self.acquisitions.set(self.acquisitions.get() + 1);
            Some(CountingGuard(Rc::clone(&self.held)))
        }
    }

    impl CountingLock {
        fn is_held(&self) -> bool {
            self.held.get() > 0
        }
    }

    fn image(name: &str) -> MediaItem {
        MediaItem {
            name: name.to_string(),
            kind: MediaKind::Image {
                path: format!("/photos/{name}.jpg"),
            },
        }
    }

    fn map() -> MediaItem {
        MediaItem {
            name: "Site map".to_string(),
            kind: MediaKind::EmbeddedMap {
                embed_url: "https://maps.example/embed".to_string(),
                external_url: "https://maps.example/place".to_string(),
            },
        }
    }

    fn catalog() -> Rc<MediaCatalog> {
        let mut items = BTreeMap::new();
        items.insert(
            MediaCategory::Exterior,
            (0..7).map(|i| image(&format!("exterior-{i}"))).collect(),
        );
        items.insert(
            MediaCategory::FloorPlan,
            (0..3).map(|i| image(&format!("plan-{i}"))).collect(),
        );
        items.insert(MediaCategory::LocationAndLayout, vec![image("layout"), map()]);
        items.insert(MediaCategory::Interior, Vec::new());
        items.insert(
            MediaCategory::IsometricView,
            vec![MediaItem {
                name: "Massing model".to_string(),
                kind: MediaKind::Model3d {
                    model_url: "/models/villa.glb".to_string(),
                },
            }],
        );
        Rc::new(MediaCatalog::new(items))
    }

    fn controller() -> (GalleryController<CountingLock>, CountingLock) {
        let lock = CountingLock::default();
        (GalleryController::new(catalog(), lock.clone()), lock)
    }

    #[test]
    fn categories_follow_display_order() {
        let catalog = catalog();
        let order: Vec<_> = catalog.categories().collect();
        assert_eq!(order, MediaCategory::ORDER.to_vec());
    }

    #[test]
    fn starts_on_first_category() {
        let (gallery, lock) = controller();
        assert_eq!(gallery.selected_category(), MediaCategory::LocationAndLayout);
        assert_eq!(gallery.lightbox_index(), None);
        assert!(!lock.is_held());
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let (mut gallery, _) = controller();
        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(6).unwrap();
        assert_eq!(gallery.navigate(Direction::Next), Some(0));
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let (mut gallery, _) = controller();
        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(0).unwrap();
        assert_eq!(gallery.navigate(Direction::Prev), Some(6));
        assert_eq!(gallery.active_item().map(|i| i.name.as_str()), Some("exterior-6"));
    }

    #[test]
    fn single_item_stays_put_both_ways() {
        let (mut gallery, _) = controller();
        gallery.select_category(MediaCategory::IsometricView);
        gallery.open_lightbox(0).unwrap();
        assert_eq!(gallery.navigate(Direction::Next), Some(0));
        assert_eq!(gallery.navigate(Direction::Prev), Some(0));
    }

    #[test]
    fn navigation_skips_map_items() {
        let (mut gallery, _) = controller();
        assert_eq!(gallery.selected_category(), MediaCategory::LocationAndLayout);
        gallery.open_lightbox(0).unwrap();
        assert_eq!(gallery.navigate(Direction::Next), Some(0));
        assert_eq!(gallery.navigate(Direction::Prev), Some(0));
    }

    #[test]
    fn counter_ignores_map_items() {
        let (mut gallery, _) = controller();
        assert_eq!(gallery.lightbox_position(), None);
        gallery.open_lightbox(0).unwrap();
        assert_eq!(gallery.lightbox_position(), Some((1, 1)));

        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(4).unwrap();
        assert_eq!(gallery.lightbox_position(), Some((5, 7)));
    }

    #[test]
    fn navigate_without_lightbox_does_nothing() {
        let (mut gallery, _) = controller();
        gallery.select_category(MediaCategory::Exterior);
        assert_eq!(gallery.navigate(Direction::Next), None);
        assert_eq!(gallery.lightbox_index(), None);
    }

    #[test]
    fn out_of_range_open_is_rejected_everywhere() {
        let (mut gallery, lock) = controller();
        for category in MediaCategory::ORDER {
            gallery.select_category(category);
            let len = gallery.items().len();
            for index in [len, len + 1, usize::MAX] {
                assert_eq!(
                    gallery.open_lightbox(index).unwrap_err(),
                    GalleryError::IndexOutOfRange { category, index, len }
                );
            }
            assert_eq!(gallery.lightbox_index(), None);
            assert!(!lock.is_held());
        }
    }

    #[test]
    fn empty_category_rejects_index_zero() {
        let (mut gallery, _) = controller();
        gallery.select_category(MediaCategory::Interior);
        assert!(matches!(
            gallery.open_lightbox(0),
            Err(GalleryError::IndexOutOfRange { len: 0, .. })
        ));
    }

    #[test]
    fn map_item_cannot_open_lightbox() {
        let (mut gallery, lock) = controller();
        assert_eq!(
            gallery.open_lightbox(1).unwrap_err(),
            GalleryError::NotViewable {
                category: MediaCategory::LocationAndLayout,
                index: 1
            }
        );
        assert!(!lock.is_held());
    }

    #[test]
    fn scroll_lock_released_after_every_close() {
        let (mut gallery, lock) = controller();
        gallery.select_category(MediaCategory::Exterior);
        for round in 0..5 {
            gallery.open_lightbox(round).unwrap();
            assert!(lock.is_held());
            assert!(gallery.close_lightbox());
            assert!(!lock.is_held());
        }
        assert!(!gallery.close_lightbox());
        assert!(!lock.is_held());
        assert_eq!(lock.acquisitions.get(), 5);
    }

    #[test]
    fn reopening_while_open_keeps_one_lock() {
        let (mut gallery, lock) = controller();
        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(1).unwrap();
        gallery.open_lightbox(4).unwrap();
        assert_eq!(gallery.lightbox_index(), Some(4));
        assert_eq!(lock.acquisitions.get(), 1);
        gallery.close_lightbox();
        assert!(!lock.is_held());
    }

    #[test]
    fn second_overlay_cannot_take_the_lock() {
        let lock = CountingLock::default();
        let mut first = GalleryController::new(catalog(), lock.clone());
        let mut second = GalleryController::new(catalog(), lock.clone());
        first.select_category(MediaCategory::Exterior);
        second.select_category(MediaCategory::Exterior);

        first.open_lightbox(0).unwrap();
        assert_eq!(second.open_lightbox(0).unwrap_err(), GalleryError::ScrollLockHeld);
        assert_eq!(second.lightbox_index(), None);

        first.close_lightbox();
        assert!(second.open_lightbox(0).is_ok());
    }

    #[test]
    fn dropping_controller_releases_lock() {
        let (mut gallery, lock) = controller();
        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(3).unwrap();
        drop(gallery);
        assert!(!lock.is_held());
    }

    #[test]
    fn category_change_closes_lightbox() {
        let (mut gallery, lock) = controller();
        gallery.select_category(MediaCategory::Exterior);
        gallery.open_lightbox(2).unwrap();
        let epoch = gallery.carousel_epoch();

        assert!(gallery.select_category(MediaCategory::FloorPlan));
        assert_eq!(gallery.lightbox_index(), None);
        assert_eq!(gallery.active_item(), None);
        assert!(!lock.is_held());
        assert_ne!(gallery.carousel_epoch(), epoch);
        assert_eq!(gallery.items().len(), 3);
    }

    #[test]
    fn keyboard_shortcuts_drive_the_lightbox() {
        let (mut gallery, lock) = controller();
        gallery.select_category(MediaCategory::Exterior);
        assert!(!gallery.handle_key("ArrowRight"));

        gallery.open_lightbox(6).unwrap();
        assert!(gallery.handle_key("ArrowRight"));
        assert_eq!(gallery.lightbox_index(), Some(0));
        assert!(gallery.handle_key("ArrowLeft"));
        assert_eq!(gallery.lightbox_index(), Some(6));
        assert!(!gallery.handle_key("Enter"));
        assert!(gallery.handle_key("Escape"));
        assert_eq!(gallery.lightbox_index(), None);
        assert!(!lock.is_held());
    }

    #[test]
    fn key_mapping() {
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Close));
        assert_eq!(
            LightboxKey::from_key("ArrowLeft"),
            Some(LightboxKey::Step(Direction::Prev))
        );
        assert_eq!(
            LightboxKey::from_key("ArrowRight"),
            Some(LightboxKey::Step(Direction::Next))
        );
        assert_eq!(LightboxKey::from_key("a"), None);
    }
}
