//! Section catalog
//!
//! The catalog is static configuration: an ordered, immutable list of
//! sections embedded in the binary and parsed once at startup. Every
//! presentation surface addresses sections by index.

use std::collections::HashSet;

use tracing::info;

mod section;

pub use section::{LayoutHint, SceneKind, Section};

/// Embedded deck content
const BUILTIN_SECTIONS: &str = include_str!("sections.json");

/// Errors raised while loading the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse section catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section catalog is empty")]
    Empty,
    #[error("duplicate section id '{0}'")]
    DuplicateId(String),
}

/// The narrative chapters of the deck, used to group sections onto a
/// shared stage scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chapter {
    Energy,
    Matrix,
    Security,
    Finale,
}

/// Which product track a section belongs to, shown as the badge in the
/// copy panel header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    EnergyAi,
    SecurityAi,
}

impl Track {
    pub fn label(&self) -> &'static str {
        match self {
            Track::EnergyAi => "ENERGY_AI",
            Track::SecurityAi => "SECURITY_AI",
        }
    }
}

/// The ordered, immutable list of deck sections
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Load the embedded catalog
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_SECTIONS)?;
        info!("Loaded section catalog with {} sections", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sections: Vec<Section> = serde_json::from_str(json)?;
        if sections.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateId(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get a section by index
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Which chapter a section index falls into. Indices past the end
    /// belong to the finale.
    pub fn chapter_of(index: usize) -> Chapter {
        match index {
            0..=2 => Chapter::Energy,
            3..=6 => Chapter::Matrix,
            7..=11 => Chapter::Security,
            _ => Chapter::Finale,
        }
    }

    /// First section index of a chapter, for computing the sub-step a
    /// scene animates within
    pub fn chapter_start(chapter: Chapter) -> usize {
        match chapter {
            Chapter::Energy => 0,
            Chapter::Matrix => 3,
            Chapter::Security => 7,
            Chapter::Finale => 12,
        }
    }

    /// Product track for the copy panel badge
    pub fn track_of(index: usize) -> Track {
        if index < 7 {
            Track::EnergyAi
        } else {
            Track::SecurityAi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.section(0).unwrap().id, "scene-1");
        assert_eq!(catalog.section(13).unwrap().visual, SceneKind::Unified);
        assert!(catalog.section(14).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "a", "title": "A", "subtitle": "", "description": "",
             "highlights": [], "visual": "orbit-core", "layout": "left"},
            {"id": "a", "title": "B", "subtitle": "", "description": "",
             "highlights": [], "visual": "unified", "layout": "center"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_chapter_grouping() {
        assert_eq!(Catalog::chapter_of(0), Chapter::Energy);
        assert_eq!(Catalog::chapter_of(2), Chapter::Energy);
        assert_eq!(Catalog::chapter_of(3), Chapter::Matrix);
        assert_eq!(Catalog::chapter_of(6), Chapter::Matrix);
        assert_eq!(Catalog::chapter_of(7), Chapter::Security);
        assert_eq!(Catalog::chapter_of(11), Chapter::Security);
        assert_eq!(Catalog::chapter_of(12), Chapter::Finale);
        assert_eq!(Catalog::chapter_of(13), Chapter::Finale);
    }

    #[test]
    fn test_track_badge_split() {
        assert_eq!(Catalog::track_of(6), Track::EnergyAi);
        assert_eq!(Catalog::track_of(7), Track::SecurityAi);
    }

    #[test]
    fn test_chapter_starts_align_with_grouping() {
        for chapter in [Chapter::Energy, Chapter::Matrix, Chapter::Security, Chapter::Finale] {
            let start = Catalog::chapter_start(chapter);
            assert_eq!(Catalog::chapter_of(start), chapter);
            if start > 0 {
                assert_ne!(Catalog::chapter_of(start - 1), chapter);
            }
        }
    }
}
