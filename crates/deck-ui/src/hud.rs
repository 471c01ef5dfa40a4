//! Top-right status HUD

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::NavigationContext;

use crate::theme::palette;

/// Status line shown while a transition is running
pub fn status_text(transitioning: bool) -> &'static str {
    if transitioning {
        "POSITIONING..."
    } else {
        "SYNC_ACTIVE"
    }
}

/// The core-status HUD
pub struct StatusHud;

impl StatusHud {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&self, ui: &mut Ui, nav: &NavigationContext) {
        let full = ui.max_rect();
        let painter = ui.painter();
        let anchor = Pos2::new(full.max.x - 36.0, full.min.y + 36.0);

        // Brand badge
        let badge = Rect::from_center_size(anchor, Vec2::splat(44.0));
        painter.rect_filled(badge, Rounding::same(12.0), Color32::from_rgba_unmultiplied(255, 255, 255, 12));
        painter.rect_stroke(badge, Rounding::same(12.0), Stroke::new(1.0, palette::LINE));
        painter.text(
            badge.center(),
            Align2::CENTER_CENTER,
            "O",
            FontId::proportional(24.0),
            palette::TEXT,
        );

        let (color, text) = if nav.transitioning {
            (palette::ORANGE, status_text(true))
        } else {
            // Idle indicator breathes
            let breath = (0.6 + 0.4 * (ui.input(|i| i.time) * 2.0).sin().abs()) as f32;
            (palette::CYAN.linear_multiply(breath), status_text(false))
        };

        let text_anchor = Pos2::new(badge.min.x - 14.0, anchor.y);
        painter.text(
            Pos2::new(text_anchor.x, text_anchor.y - 12.0),
            Align2::RIGHT_CENTER,
            "ORBIT AI CORE STATUS",
            FontId::monospace(8.0),
            palette::TEXT_FAINT,
        );
        painter.text(
            Pos2::new(text_anchor.x, text_anchor.y + 8.0),
            Align2::RIGHT_CENTER,
            text,
            FontId::monospace(12.0),
            color,
        );
        let galley = painter.layout_no_wrap(text.to_string(), FontId::monospace(12.0), color);
        painter.circle_filled(
            Pos2::new(text_anchor.x - galley.size().x - 12.0, text_anchor.y + 8.0),
            4.0,
            color,
        );
    }
}

impl Default for StatusHud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_tracks_transitioning() {
        assert_eq!(status_text(true), "POSITIONING...");
        assert_eq!(status_text(false), "SYNC_ACTIVE");
    }
}
