use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::gallery::{MediaCatalog, MediaCategory, MediaItem};

const LAKEWOOD_VILLAS: &str = include_str!("../content/lakewood_villas.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed project content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("gallery category {0} is listed more than once")]
    DuplicateCategory(MediaCategory),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize)]
struct GallerySection {
    category: MediaCategory,
    items: Vec<MediaItem>,
}

#[derive(Deserialize)]
struct RawProject {
    name: String,
    tagline: String,
    location: String,
    kind: String,
    status: String,
    logo: String,
    hero_image: String,
    card_image: String,
    summary: String,
    overview: Vec<String>,
    stats: Vec<LabeledValue>,
    specifications: Vec<LabeledValue>,
    community: Vec<String>,
    amenities: Vec<String>,
    highlights: Vec<String>,
    gallery: Vec<GallerySection>,
}

/// The featured development shown on the project detail page.
#[derive(Debug, PartialEq)]
pub struct FeaturedProject {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub kind: String,
    pub status: String,
    pub logo: String,
    pub hero_image: String,
    pub card_image: String,
    pub summary: String,
    pub overview: Vec<String>,
    pub stats: Vec<LabeledValue>,
    pub specifications: Vec<LabeledValue>,
    pub community: Vec<String>,
    pub amenities: Vec<String>,
    pub highlights: Vec<String>,
    pub catalog: Rc<MediaCatalog>,
}

impl FeaturedProject {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawProject = serde_json::from_str(json)?;

        let mut sections = BTreeMap::new();
        for section in raw.gallery {
            if sections.insert(section.category, section.items).is_some() {
                return Err(ContentError::DuplicateCategory(section.category));
            }
        }

        Ok(Self {
            name: raw.name,
            tagline: raw.tagline,
            location: raw.location,
            kind: raw.kind,
            status: raw.status,
            logo: raw.logo,
            hero_image: raw.hero_image,
            card_image: raw.card_image,
            summary: raw.summary,
            overview: raw.overview,
            stats: raw.stats,
            specifications: raw.specifications,
            community: raw.community,
            amenities: raw.amenities,
            highlights: raw.highlights,
            catalog: Rc::new(MediaCatalog::new(sections)),
        })
    }
}

/// Parses the project content compiled into the binary.
pub fn featured_project() -> Result<FeaturedProject, ContentError> {
    FeaturedProject::from_json(LAKEWOOD_VILLAS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::MediaKind;

    #[test]
    fn shipped_content_parses() {
        let project = featured_project().unwrap();
        assert_eq!(project.name, "LakeWoods Villas");
        assert_eq!(project.amenities.len(), 12);

        let categories: Vec<_> = project.catalog.categories().collect();
        assert_eq!(categories, MediaCategory::ORDER.to_vec());
        assert_eq!(project.catalog.items(MediaCategory::Exterior).len(), 7);
        assert_eq!(project.catalog.items(MediaCategory::Interior).len(), 20);
    }

    #[test]
    fn shipped_map_is_not_viewable() {
        let project = featured_project().unwrap();
        let layout = project.catalog.items(MediaCategory::LocationAndLayout);
        assert!(matches!(layout[1].kind, MediaKind::EmbeddedMap { .. }));
        assert!(!layout[1].kind.is_viewable());
        assert!(layout[0].kind.is_viewable());
    }

    #[test]
    fn every_media_kind_deserialises() {
        let item: MediaItem =
            serde_json::from_str(r#"{"name": "Model", "type": "model3d", "model_url": "/m.glb"}"#)
                .unwrap();
        assert_eq!(
            item.kind,
            MediaKind::Model3d {
                model_url: "/m.glb".to_string()
            }
        );
        let item: MediaItem =
            serde_json::from_str(r#"{"name": "Front", "type": "image", "path": "/a.jpg"}"#).unwrap();
        assert!(item.kind.is_viewable());
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(LAKEWOOD_VILLAS).unwrap();
        let gallery = doc["gallery"].as_array_mut().unwrap();
        let first = gallery[0].clone();
        gallery.push(first);
        let err = FeaturedProject::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateCategory(MediaCategory::LocationAndLayout)
        ));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let mut doc: serde_json::Value = serde_json::from_str(LAKEWOOD_VILLAS).unwrap();
        doc["gallery"][0]["category"] = serde_json::Value::from("Rooftop");
        let err = FeaturedProject::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
