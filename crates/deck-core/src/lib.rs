//! Core functionality for the Orbit Deck presentation
//!
//! This crate provides the section catalog and the navigation state
//! machine that every presentation surface renders from.

pub mod catalog;
pub mod navigation;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Chapter, LayoutHint, SceneKind, Section, Track};
pub use navigation::{
    NavRequest, NavigationContext, NavigationEngine, NavigationSubscriber, TRANSITION_COOLDOWN,
};
