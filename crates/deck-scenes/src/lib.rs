//! Animated background scenes for the deck
//!
//! One scene per narrative chapter; the active section index selects the
//! scene and the sub-step it animates. Scenes are pure functions of the
//! published navigation snapshot plus wall-clock time, drawn with the
//! egui painter.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::{Catalog, Chapter, LayoutHint, NavigationContext};

pub mod fx;

mod energy;
mod matrix;
mod response;
mod security;

pub use energy::EnergyScene;
pub use matrix::MatrixScene;
pub use response::ResponseScene;
pub use security::SecurityScene;

use fx::{ease_out_cubic, with_alpha};

/// Per-frame context handed to scenes
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame {
    /// Stage rect the scene may paint into
    pub rect: Rect,
    /// Wall-clock animation time in seconds
    pub time: f64,
    /// Active section index
    pub index: usize,
    /// Step within the scene's chapter, starting at 0
    pub sub_step: usize,
    /// Eased transition progress, 0 at the start of a section change
    pub reveal: f32,
}

/// Base trait for chapter scenes
pub trait Scene: Send + Sync {
    /// Display name, for logging
    fn name(&self) -> &str;

    /// The chapter this scene covers
    fn chapter(&self) -> Chapter;

    /// Draw the scene
    fn ui(&mut self, ui: &mut Ui, frame: &SceneFrame);
}

/// Floating label shown above the stage for each section
pub fn stage_label(index: usize) -> &'static str {
    match index {
        0 => "Unseen Energy Loss",
        1 => "Solar Power Source",
        2 => "Live Solar Intelligence",
        3 => "AI Core Online",
        4 => "Infrastructure Awareness Map",
        5 => "Smart Energy Control",
        6 => "System Activity Log",
        7 => "Live Facility View",
        8 => "Vision Processing Layer",
        9 => "Behavior Analysis",
        10 => "Hygiene Intelligence",
        11 => "Smart Alerts",
        12 => "System Harmony",
        13 => "ORBIT AI Infrastructure OS",
        _ => "",
    }
}

const BG: Color32 = Color32::from_rgb(0, 4, 8);
const CYAN: Color32 = Color32::from_rgb(34, 211, 238);

/// The full-window stage that hosts the chapter scenes
pub struct SceneStage {
    scenes: Vec<Box<dyn Scene>>,
}

impl SceneStage {
    pub fn new() -> Self {
        Self {
            scenes: vec![
                Box::new(EnergyScene::new()),
                Box::new(MatrixScene::new()),
                Box::new(SecurityScene::new()),
                Box::new(ResponseScene::new()),
            ],
        }
    }

    /// Draw the stage for the current navigation snapshot
    ///
    /// `transition` is the raw progress of the running section change in
    /// [0, 1]; 1.0 while idle.
    pub fn ui(&mut self, ui: &mut Ui, nav: &NavigationContext, transition: f32, layout: LayoutHint) {
        let full = ui.max_rect();
        let time = ui.input(|i| i.time);
        let painter = ui.painter();

        painter.rect_filled(full, Rounding::same(0.0), BG);
        self.draw_backdrop(ui, full, time);

        let chapter = Catalog::chapter_of(nav.current_index);

        // Non-centered sections leave the left band to the copy panel
        let stage_rect = if layout.is_centered() {
            full
        } else {
            Rect::from_min_max(
                Pos2::new(full.min.x + full.width() * 0.2, full.min.y),
                full.max,
            )
        };

        let frame = SceneFrame {
            rect: stage_rect.shrink(full.width() * 0.04),
            time,
            index: nav.current_index,
            sub_step: nav.current_index - Catalog::chapter_start(chapter),
            reveal: ease_out_cubic(transition),
        };

        for scene in &mut self.scenes {
            if scene.chapter() == chapter {
                scene.ui(ui, &frame);
            }
        }

        self.draw_label(ui, full, nav.current_index, frame.reveal);
    }

    /// Background grid plus the atmospheric radial glow
    fn draw_backdrop(&self, ui: &Ui, rect: Rect, time: f64) {
        let painter = ui.painter();
        let grid_color = Color32::from_rgb(10, 16, 24);
        let spacing = 64.0;

        let mut x = rect.min.x;
        while x < rect.max.x {
            painter.line_segment(
                [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
                Stroke::new(1.0, grid_color),
            );
            x += spacing;
        }
        let mut y = rect.min.y;
        while y < rect.max.y {
            painter.line_segment(
                [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
                Stroke::new(1.0, grid_color),
            );
            y += spacing;
        }

        // Layered circles stand in for the radial glow gradient
        let glow_center = Pos2::new(
            rect.min.x + rect.width() * 0.6,
            rect.min.y + rect.height() * 0.5,
        );
        let breath = fx::pulse(time, 6.0);
        let max_radius = rect.width() * 0.45;
        for i in 0..6 {
            let t = i as f32 / 6.0;
            let alpha = 0.035 * (1.0 - t) * (0.7 + 0.3 * breath);
            painter.circle_filled(glow_center, max_radius * (0.4 + t * 0.6), with_alpha(CYAN, alpha));
        }
    }

    /// Pill-shaped stage label at the top center
    fn draw_label(&self, ui: &Ui, rect: Rect, index: usize, reveal: f32) {
        let text = stage_label(index);
        if text.is_empty() {
            return;
        }

        let painter = ui.painter();
        let font = FontId::monospace(11.0);
        let center = Pos2::new(rect.center().x, rect.min.y + 72.0);
        let label = text.to_uppercase();

        let galley = painter.layout_no_wrap(label.clone(), font.clone(), Color32::WHITE);
        let pill = Rect::from_center_size(
            center,
            galley.size() + Vec2::new(44.0, 22.0),
        );

        painter.rect_filled(pill, Rounding::same(14.0), with_alpha(Color32::BLACK, 0.9 * reveal));
        painter.rect_stroke(pill, Rounding::same(14.0), Stroke::new(1.0, with_alpha(CYAN, 0.4 * reveal)));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            label,
            font,
            with_alpha(CYAN, 0.7 * reveal),
        );
    }
}

impl Default for SceneStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_a_stage_label() {
        for index in 0..14 {
            assert!(!stage_label(index).is_empty(), "missing label for {index}");
        }
        assert_eq!(stage_label(14), "");
    }

    #[test]
    fn test_stage_covers_every_chapter() {
        let stage = SceneStage::new();
        for index in 0..14 {
            let chapter = Catalog::chapter_of(index);
            assert!(
                stage.scenes.iter().any(|s| s.chapter() == chapter),
                "no scene for section {index}"
            );
        }
    }
}
