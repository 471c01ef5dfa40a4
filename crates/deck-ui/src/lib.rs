//! User interface chrome for the deck
//!
//! This crate provides the egui-based overlay surfaces: the copy panel,
//! dot rail, status HUD, and the bottom control bar. Every surface is a
//! pure function of the published navigation snapshot; the only state
//! they emit back is navigation requests from clicks.

pub mod content;
pub mod controls;
pub mod dots;
pub mod hud;
pub mod theme;

// Re-export commonly used types
pub use content::ContentPanel;
pub use controls::ControlBar;
pub use dots::DotRail;
pub use hud::StatusHud;
pub use theme::{apply_theme, palette, Theme};
