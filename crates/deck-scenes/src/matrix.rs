//! Matrix chapter: the neural core, zone occupancy, auto-shutdown, logs

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::Chapter;

use crate::fx::{glow_circle, pulse, with_alpha};
use crate::{Scene, SceneFrame};

const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
const SLATE: Color32 = Color32::from_rgb(30, 41, 59);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);

/// Hardcoded event feed for the audit-log step; the deck shows
/// presentation constants, not live data
const LOG_LINES: [&str; 6] = [
    "09:14  WING-B3  auto-shutdown  HVAC",
    "09:12  WING-A1  occupancy 0 -> lights off",
    "09:07  GRID     solar feed prioritized",
    "08:58  WING-C2  occupancy 14 -> hold",
    "08:51  WING-B1  auto-shutdown  lighting",
    "08:47  CORE     logic tuning applied",
];

pub struct MatrixScene;

impl MatrixScene {
    pub fn new() -> Self {
        Self
    }

    /// Sub-step 0: the neural core, rings and spokes around a nucleus
    fn draw_core(&self, ui: &Ui, frame: &SceneFrame) {
        let painter = ui.painter();
        let center = frame.rect.center();
        let base = frame.rect.height().min(frame.rect.width()) * 0.22;

        for ring in 0..3 {
            let radius = base * (1.0 + ring as f32 * 0.55);
            let spin = frame.time * (0.3 + ring as f64 * 0.15);
            painter.circle_stroke(
                center,
                radius,
                Stroke::new(1.5, with_alpha(CYAN, (0.35 - ring as f32 * 0.08) * frame.reveal)),
            );
            // Orbiting node per ring
            let angle = spin % std::f64::consts::TAU;
            let node = center
                + Vec2::new(
                    radius * angle.cos() as f32,
                    radius * angle.sin() as f32 * 0.6,
                );
            painter.circle_filled(node, 4.0, with_alpha(CYAN, frame.reveal));
        }

        for spoke in 0..8 {
            let angle = spoke as f32 / 8.0 * std::f32::consts::TAU;
            let tip = center + Vec2::angled(angle) * base * 0.85;
            painter.line_segment(
                [center, tip],
                Stroke::new(1.0, with_alpha(CYAN, 0.2 * frame.reveal)),
            );
        }

        let beat = pulse(frame.time, 1.4);
        glow_circle(painter, center, base * (0.3 + 0.06 * beat), CYAN, 0.9 * frame.reveal);
    }

    /// Sub-steps 1 and 2: the campus zone grid, shutting down on step 2
    fn draw_zone_grid(&self, ui: &Ui, frame: &SceneFrame, shutdown: bool) {
        let painter = ui.painter();
        let grid = Rect::from_center_size(
            frame.rect.center(),
            Vec2::new(frame.rect.width() * 0.6, frame.rect.height() * 0.5),
        );
        let rows = 4;
        let cols = 5;
        let cell = Vec2::new(grid.width() / cols as f32, grid.height() / rows as f32);

        for row in 0..rows {
            for col in 0..cols {
                let zone = Rect::from_min_size(
                    grid.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                    cell,
                )
                .shrink(5.0);
                let seed = row * cols + col;
                let occupied = seed % 4 != 1;

                if occupied {
                    let heat = pulse(frame.time + seed as f64 * 0.5, 2.0);
                    painter.rect_filled(
                        zone,
                        Rounding::same(4.0),
                        with_alpha(CYAN, (0.1 + 0.25 * heat) * frame.reveal),
                    );
                } else if shutdown {
                    // Confirmed empty: load shed, zone goes dark
                    painter.rect_filled(zone, Rounding::same(4.0), with_alpha(SLATE, 0.5 * frame.reveal));
                    painter.text(
                        zone.center(),
                        Align2::CENTER_CENTER,
                        "OFF",
                        FontId::monospace(9.0),
                        with_alpha(GREEN, 0.8 * frame.reveal),
                    );
                } else {
                    painter.rect_filled(
                        zone,
                        Rounding::same(4.0),
                        with_alpha(ORANGE, (0.2 + 0.2 * pulse(frame.time + seed as f64, 1.0)) * frame.reveal),
                    );
                }
                painter.rect_stroke(
                    zone,
                    Rounding::same(4.0),
                    Stroke::new(1.0, with_alpha(Color32::WHITE, 0.1 * frame.reveal)),
                );
            }
        }

        if shutdown {
            painter.text(
                Pos2::new(grid.center().x, grid.max.y + 26.0),
                Align2::CENTER_CENTER,
                "124 kWh SAVED TODAY",
                FontId::monospace(12.0),
                with_alpha(GREEN, frame.reveal),
            );
        }
    }

    /// Sub-step 3: the scrolling event log
    fn draw_log_feed(&self, ui: &Ui, frame: &SceneFrame) {
        let painter = ui.painter();
        let panel = Rect::from_center_size(
            frame.rect.center(),
            Vec2::new(frame.rect.width() * 0.55, frame.rect.height() * 0.45),
        );

        painter.rect_filled(panel, Rounding::same(12.0), with_alpha(Color32::BLACK, 0.6 * frame.reveal));
        painter.rect_stroke(
            panel,
            Rounding::same(12.0),
            Stroke::new(1.0, with_alpha(CYAN, 0.3 * frame.reveal)),
        );

        let row_height = panel.height() / (LOG_LINES.len() as f32 + 1.0);
        // Feed creeps upward and wraps, newest line glowing
        let scroll = (frame.time * 0.4) % 1.0;
        for (i, line) in LOG_LINES.iter().enumerate() {
            let y = panel.min.y + row_height * (i as f32 + 1.0 - scroll as f32);
            if y < panel.min.y + 8.0 || y > panel.max.y - 8.0 {
                continue;
            }
            let emphasis = if i == 0 { 0.9 } else { 0.45 };
            painter.text(
                Pos2::new(panel.min.x + 18.0, y),
                Align2::LEFT_CENTER,
                *line,
                FontId::monospace(11.0),
                with_alpha(CYAN, emphasis * frame.reveal),
            );
        }
    }
}

impl Scene for MatrixScene {
    fn name(&self) -> &str {
        "Matrix"
    }

    fn chapter(&self) -> Chapter {
        Chapter::Matrix
    }

    fn ui(&mut self, ui: &mut Ui, frame: &SceneFrame) {
        match frame.sub_step {
            0 => self.draw_core(ui, frame),
            1 => self.draw_zone_grid(ui, frame, false),
            2 => self.draw_zone_grid(ui, frame, true),
            _ => self.draw_log_feed(ui, frame),
        }
    }
}
