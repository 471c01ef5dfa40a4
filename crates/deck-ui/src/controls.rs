//! Bottom control bar: arrow buttons, sequence counter, idle hint

use std::sync::Arc;

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use deck_core::{NavRequest, NavigationContext, NavigationEngine};

use crate::theme::palette;

/// Zero-padded `07 / 14` sequence counter
pub fn format_sequence(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

/// The arrow controls under the stage
pub struct ControlBar {
    navigation: Arc<NavigationEngine>,
}

impl ControlBar {
    pub fn new(navigation: Arc<NavigationEngine>) -> Self {
        Self { navigation }
    }

    pub fn ui(&self, ui: &mut Ui) {
        let nav = self.navigation.context();
        let full = ui.max_rect();
        let center = Pos2::new(full.center().x, full.max.y - 48.0);

        let at_start = nav.current_index == 0;
        let at_end = nav.current_index + 1 == nav.section_count;

        self.arrow_button(ui, center - Vec2::new(84.0, 0.0), false, at_start || nav.transitioning);
        self.arrow_button(ui, center + Vec2::new(84.0, 0.0), true, at_end || nav.transitioning);

        let painter = ui.painter();
        painter.text(
            center - Vec2::new(0.0, 10.0),
            Align2::CENTER_CENTER,
            "SEQUENCE",
            FontId::monospace(8.0),
            palette::TEXT_FAINT,
        );
        painter.text(
            center + Vec2::new(0.0, 8.0),
            Align2::CENTER_CENTER,
            format_sequence(nav.current_index, nav.section_count),
            FontId::monospace(13.0),
            palette::CYAN.linear_multiply(0.85),
        );

        self.idle_hint(ui, &nav, full);
    }

    /// Round prev/next button; disabled buttons still render, dimmed
    fn arrow_button(&self, ui: &mut Ui, center: Pos2, forward: bool, disabled: bool) {
        let hit = Rect::from_center_size(center, Vec2::splat(48.0));
        let id = ui.id().with(("nav-arrow", forward));
        let response = ui.interact(hit, id, Sense::click());

        let alpha = if disabled {
            0.2
        } else if response.hovered() {
            1.0
        } else {
            0.6
        };

        let painter = ui.painter();
        painter.circle_stroke(
            center,
            24.0,
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, (40.0 * alpha) as u8)),
        );
        let dir = if forward { 1.0 } else { -1.0 };
        let tip = center + Vec2::new(7.0 * dir, 0.0);
        let tail = center - Vec2::new(7.0 * dir, 0.0);
        let stroke = Stroke::new(2.0, palette::TEXT.linear_multiply(alpha));
        painter.line_segment([tail, tip], stroke);
        painter.line_segment([tip, tip + Vec2::new(-6.0 * dir, -5.0)], stroke);
        painter.line_segment([tip, tip + Vec2::new(-6.0 * dir, 5.0)], stroke);

        if response.clicked() && !disabled {
            let request = if forward { NavRequest::Next } else { NavRequest::Previous };
            tracing::trace!(?request, "Arrow control clicked");
            self.navigation.navigate(request);
        }
    }

    /// First-section hint, hidden once the user starts moving
    fn idle_hint(&self, ui: &Ui, nav: &NavigationContext, full: Rect) {
        if nav.current_index != 0 || nav.transitioning {
            return;
        }

        let painter = ui.painter();
        let pulse = (0.4 + 0.6 * (ui.input(|i| i.time) * 1.5).sin().abs()) as f32;
        let anchor = Pos2::new(full.max.x - 64.0, full.max.y - 96.0);
        painter.text(
            anchor,
            Align2::RIGHT_CENTER,
            "USE ARROWS OR SCROLL",
            FontId::monospace(9.0),
            palette::TEXT_FAINT.linear_multiply(pulse),
        );
        painter.line_segment(
            [anchor + Vec2::new(10.0, 14.0), anchor + Vec2::new(10.0, 44.0)],
            Stroke::new(1.0, palette::CYAN.linear_multiply(pulse * 0.7)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sequence_is_zero_padded() {
        assert_eq!(format_sequence(0, 14), "01 / 14");
        assert_eq!(format_sequence(6, 14), "07 / 14");
        assert_eq!(format_sequence(13, 14), "14 / 14");
        assert_eq!(format_sequence(8, 9), "09 / 09");
    }
}
