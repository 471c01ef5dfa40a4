//! Foreground copy panel: progress header, titles, highlight rows

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::{Catalog, NavigationContext, Section, Track};

use crate::theme::palette;

/// Zero-padded pitch tag for the header, e.g. `ORBIT_LOGIC // PITCH_07`
pub fn pitch_tag(index: usize) -> String {
    format!("ORBIT_LOGIC // PITCH_{:02}", index + 1)
}

/// Fraction of the deck completed at `index`, for the progress bar
pub fn progress_fraction(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f32 / total as f32
}

fn faded(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// The left copy panel
pub struct ContentPanel;

impl ContentPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the panel for the active section
    ///
    /// `reveal` fades the copy in over the transition window.
    pub fn ui(&self, ui: &mut Ui, section: &Section, nav: &NavigationContext, reveal: f32) {
        let full = ui.max_rect();
        let width = (full.width() * 0.42).min(560.0);
        let panel = Rect::from_min_max(full.min, Pos2::new(full.min.x + width, full.max.y));
        let painter = ui.painter();

        // Depth gradient so the copy reads over the stage
        let steps = 12;
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            let slice = Rect::from_min_max(
                Pos2::new(panel.min.x + panel.width() * t, panel.min.y),
                Pos2::new(panel.min.x + panel.width() * (t + 1.0 / steps as f32), panel.max.y),
            );
            painter.rect_filled(slice, Rounding::same(0.0), faded(Color32::BLACK, 0.85 * (1.0 - t)));
        }

        let track = Catalog::track_of(nav.current_index);
        let accent = match track {
            Track::EnergyAi => palette::ORANGE,
            Track::SecurityAi => palette::CYAN,
        };

        let x = panel.min.x + 56.0;
        let mut y = panel.min.y + panel.height() * 0.16;

        // Progress header
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_CENTER,
            pitch_tag(nav.current_index),
            FontId::monospace(10.0),
            faded(palette::TEXT_FAINT, reveal),
        );
        let badge_galley = painter.layout_no_wrap(
            track.label().to_string(),
            FontId::monospace(10.0),
            accent,
        );
        let badge = Rect::from_center_size(
            Pos2::new(panel.min.x + width - 80.0, y),
            badge_galley.size() + Vec2::new(20.0, 10.0),
        );
        painter.rect_stroke(badge, Rounding::same(6.0), Stroke::new(1.0, faded(accent, 0.5 * reveal)));
        painter.text(
            badge.center(),
            Align2::CENTER_CENTER,
            track.label(),
            FontId::monospace(10.0),
            faded(accent, reveal),
        );
        y += 22.0;

        // Progress bar
        let bar = Rect::from_min_size(Pos2::new(x, y), Vec2::new(width - 160.0, 4.0));
        painter.rect_filled(bar, Rounding::same(2.0), faded(Color32::WHITE, 0.1 * reveal));
        let filled = progress_fraction(nav.current_index, nav.section_count);
        let fill_rect = Rect::from_min_size(bar.min, Vec2::new(bar.width() * filled, bar.height()));
        painter.rect_filled(fill_rect, Rounding::same(2.0), faded(accent, reveal));
        y += 48.0;

        // Subtitle, title, rule, description
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_CENTER,
            section.subtitle.to_uppercase(),
            FontId::monospace(12.0),
            faded(accent, reveal),
        );
        y += 34.0;
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_CENTER,
            &section.title,
            FontId::proportional(40.0),
            faded(palette::TEXT, reveal),
        );
        y += 44.0;
        painter.rect_filled(
            Rect::from_min_size(Pos2::new(x, y), Vec2::new(52.0, 4.0)),
            Rounding::same(2.0),
            faded(accent, 0.6 * reveal),
        );
        y += 28.0;

        let desc = painter.layout(
            section.description.clone(),
            FontId::proportional(15.0),
            faded(palette::TEXT, 0.85 * reveal),
            width - 120.0,
        );
        let desc_height = desc.size().y;
        painter.galley(Pos2::new(x, y), desc);
        y += desc_height + 36.0;

        // Highlight rows
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_CENTER,
            "CORE_DELIVERABLES",
            FontId::monospace(10.0),
            faded(palette::TEXT_FAINT, reveal),
        );
        y += 24.0;

        for (i, highlight) in section.highlights.iter().enumerate() {
            // Rows trail in behind the header
            let row_reveal = (reveal * 1.5 - i as f32 * 0.2).clamp(0.0, 1.0);
            let row = Rect::from_min_size(Pos2::new(x, y), Vec2::new(width - 130.0, 44.0));
            painter.rect_filled(row, Rounding::same(10.0), faded(Color32::WHITE, 0.04 * row_reveal));
            painter.rect_stroke(
                row,
                Rounding::same(10.0),
                Stroke::new(1.0, faded(Color32::WHITE, 0.1 * row_reveal)),
            );
            painter.circle_filled(
                Pos2::new(row.min.x + 22.0, row.center().y),
                4.0,
                faded(accent, row_reveal),
            );
            painter.text(
                Pos2::new(row.min.x + 40.0, row.center().y),
                Align2::LEFT_CENTER,
                highlight,
                FontId::proportional(14.0),
                faded(palette::TEXT, 0.9 * row_reveal),
            );
            y += 52.0;
        }
    }
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_tag_is_zero_padded() {
        assert_eq!(pitch_tag(0), "ORBIT_LOGIC // PITCH_01");
        assert_eq!(pitch_tag(6), "ORBIT_LOGIC // PITCH_07");
        assert_eq!(pitch_tag(13), "ORBIT_LOGIC // PITCH_14");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(0, 14), 1.0 / 14.0);
        assert_eq!(progress_fraction(13, 14), 1.0);
        assert_eq!(progress_fraction(0, 0), 0.0);
    }
}
