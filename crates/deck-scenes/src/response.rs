//! Finale chapter: operational balance and the unified platform

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::Chapter;

use crate::fx::{glow_circle, pulse, with_alpha};
use crate::{Scene, SceneFrame};

const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);

/// The three subsystems orbiting the core in the finale
const SATELLITES: [(&str, Color32); 3] = [
    ("ENERGY", ORANGE),
    ("SECURITY", CYAN),
    ("HYGIENE", GREEN),
];

pub struct ResponseScene;

impl ResponseScene {
    pub fn new() -> Self {
        Self
    }

    fn draw_orbits(&self, ui: &Ui, frame: &SceneFrame, unified: bool) {
        let painter = ui.painter();
        let center = frame.rect.center();
        let base = frame.rect.height().min(frame.rect.width()) * 0.16;

        for (i, (label, color)) in SATELLITES.iter().enumerate() {
            let radius = base * (1.3 + i as f32 * 0.55);
            painter.circle_stroke(
                center,
                radius,
                Stroke::new(1.0, with_alpha(*color, 0.25 * frame.reveal)),
            );

            // In steady state the satellites settle into even spacing
            let phase = if unified {
                i as f64 / SATELLITES.len() as f64 * std::f64::consts::TAU + frame.time * 0.15
            } else {
                frame.time * (0.35 + i as f64 * 0.12)
            };
            let pos = center
                + Vec2::new(
                    radius * phase.cos() as f32,
                    radius * phase.sin() as f32 * 0.55,
                );
            glow_circle(painter, pos, 6.0, *color, 0.8 * frame.reveal);
            painter.text(
                pos + Vec2::new(0.0, -16.0),
                Align2::CENTER_CENTER,
                *label,
                FontId::monospace(9.0),
                with_alpha(*color, 0.8 * frame.reveal),
            );
        }

        let beat = pulse(frame.time, 2.2);
        glow_circle(painter, center, base * (0.45 + 0.04 * beat), CYAN, 0.9 * frame.reveal);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "O",
            FontId::proportional(34.0),
            with_alpha(Color32::BLACK, frame.reveal),
        );
    }

    fn draw_banner(&self, ui: &Ui, frame: &SceneFrame) {
        let painter = ui.painter();
        let center = Pos2::new(
            frame.rect.center().x,
            frame.rect.max.y - frame.rect.height() * 0.12,
        );
        let pill = Rect::from_center_size(center, Vec2::new(320.0, 44.0));
        painter.rect_filled(pill, Rounding::same(12.0), with_alpha(Color32::BLACK, 0.75 * frame.reveal));
        painter.rect_stroke(pill, Rounding::same(12.0), Stroke::new(1.0, with_alpha(CYAN, 0.5 * frame.reveal)));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "ONE OS  //  ENERGY + SAFETY + HYGIENE",
            FontId::monospace(11.0),
            with_alpha(Color32::WHITE, 0.9 * frame.reveal),
        );
    }
}

impl Scene for ResponseScene {
    fn name(&self) -> &str {
        "Response"
    }

    fn chapter(&self) -> Chapter {
        Chapter::Finale
    }

    fn ui(&mut self, ui: &mut Ui, frame: &SceneFrame) {
        let unified = frame.sub_step >= 1;
        self.draw_orbits(ui, frame, unified);
        if unified {
            self.draw_banner(ui, frame);
        }
    }
}
