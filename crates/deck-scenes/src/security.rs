//! Security chapter: live monitoring, vision pipeline, hygiene, dispatch

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::Chapter;

use crate::fx::{glow_circle, pulse, with_alpha};
use crate::{Scene, SceneFrame};

const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
const RED: Color32 = Color32::from_rgb(248, 113, 113);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);

pub struct SecurityScene;

impl SecurityScene {
    pub fn new() -> Self {
        Self
    }

    fn viewport(&self, frame: &SceneFrame) -> Rect {
        Rect::from_center_size(
            frame.rect.center(),
            Vec2::new(frame.rect.width() * 0.6, frame.rect.height() * 0.5),
        )
    }

    fn draw_camera_frame(&self, ui: &Ui, view: Rect, frame: &SceneFrame, tag: &str) {
        let painter = ui.painter();
        painter.rect_filled(view, Rounding::same(10.0), with_alpha(Color32::BLACK, 0.55 * frame.reveal));
        painter.rect_stroke(
            view,
            Rounding::same(10.0),
            Stroke::new(1.5, with_alpha(Color32::WHITE, 0.2 * frame.reveal)),
        );
        // REC-style corner tag
        let blink = pulse(frame.time, 1.0);
        painter.circle_filled(
            view.min + Vec2::new(16.0, 16.0),
            4.0,
            with_alpha(RED, (0.3 + 0.7 * blink) * frame.reveal),
        );
        painter.text(
            view.min + Vec2::new(28.0, 16.0),
            Align2::LEFT_CENTER,
            tag,
            FontId::monospace(10.0),
            with_alpha(Color32::WHITE, 0.5 * frame.reveal),
        );
    }

    /// Anonymized silhouette: a head circle over a capsule body
    fn draw_silhouette(&self, ui: &Ui, foot: Pos2, height: f32, alpha: f32) {
        let painter = ui.painter();
        let head = Pos2::new(foot.x, foot.y - height * 0.85);
        let body = Rect::from_center_size(
            Pos2::new(foot.x, foot.y - height * 0.35),
            Vec2::new(height * 0.38, height * 0.65),
        );
        painter.circle_filled(head, height * 0.14, with_alpha(CYAN, alpha));
        painter.rect_filled(body, Rounding::same(height * 0.18), with_alpha(CYAN, alpha * 0.8));
    }

    /// Sub-step 0: zone quadrants with drifting occupants
    fn draw_monitor(&self, ui: &Ui, frame: &SceneFrame) {
        let view = self.viewport(frame);
        self.draw_camera_frame(ui, view, frame, "LIVE // 4 ZONES");
        let painter = ui.painter();

        painter.line_segment(
            [Pos2::new(view.center().x, view.min.y), Pos2::new(view.center().x, view.max.y)],
            Stroke::new(1.0, with_alpha(Color32::WHITE, 0.12 * frame.reveal)),
        );
        painter.line_segment(
            [Pos2::new(view.min.x, view.center().y), Pos2::new(view.max.x, view.center().y)],
            Stroke::new(1.0, with_alpha(Color32::WHITE, 0.12 * frame.reveal)),
        );

        for i in 0..7 {
            let drift = (frame.time * 0.25 + i as f64 * 0.618) % 1.0;
            let quad_x = if i % 2 == 0 { 0.05 } else { 0.55 };
            let quad_y = if i % 4 < 2 { 0.15 } else { 0.65 };
            let foot = Pos2::new(
                view.min.x + view.width() * (quad_x + 0.35 * drift as f32),
                view.min.y + view.height() * (quad_y + 0.2),
            );
            self.draw_silhouette(ui, foot, 36.0, 0.7 * frame.reveal);
        }
    }

    /// Sub-step 1: the downsampling scan sweep
    fn draw_scan(&self, ui: &Ui, frame: &SceneFrame) {
        let view = self.viewport(frame);
        self.draw_camera_frame(ui, view, frame, "EDGE // 1 FPS");
        let painter = ui.painter();

        // Coarse privacy mosaic
        let cols = 12;
        let rows = 7;
        let cell = Vec2::new(view.width() / cols as f32, view.height() / rows as f32);
        for row in 0..rows {
            for col in 0..cols {
                let seed = ((row * 31 + col * 17) % 9) as f32 / 9.0;
                let block = Rect::from_min_size(
                    view.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                    cell,
                )
                .shrink(1.0);
                painter.rect_filled(
                    block,
                    Rounding::same(1.0),
                    with_alpha(CYAN, seed * 0.12 * frame.reveal),
                );
            }
        }

        // Sweep line, top to bottom
        let sweep = ((frame.time * 0.5) % 1.0) as f32;
        let y = view.min.y + view.height() * sweep;
        painter.line_segment(
            [Pos2::new(view.min.x, y), Pos2::new(view.max.x, y)],
            Stroke::new(2.0, with_alpha(CYAN, 0.8 * frame.reveal)),
        );
    }

    /// Sub-step 2: situation detection, boxes without identities
    fn draw_analysis(&self, ui: &Ui, frame: &SceneFrame) {
        let view = self.viewport(frame);
        self.draw_camera_frame(ui, view, frame, "YOLO // ANON");
        let painter = ui.painter();

        let labels = ["CROWD", "LOITER", "CLEAR"];
        for (i, label) in labels.iter().enumerate() {
            let foot = Pos2::new(
                view.min.x + view.width() * (0.22 + 0.28 * i as f32),
                view.min.y + view.height() * 0.72,
            );
            self.draw_silhouette(ui, foot, 44.0, 0.8 * frame.reveal);

            let lock = pulse(frame.time + i as f64 * 0.6, 2.4);
            let bounds = Rect::from_center_size(
                Pos2::new(foot.x, foot.y - 20.0),
                Vec2::new(36.0 + 4.0 * lock, 56.0 + 4.0 * lock),
            );
            let color = if i == 2 { GREEN } else { ORANGE };
            painter.rect_stroke(
                bounds,
                Rounding::same(2.0),
                Stroke::new(1.5, with_alpha(color, 0.9 * frame.reveal)),
            );
            painter.text(
                Pos2::new(bounds.center().x, bounds.min.y - 10.0),
                Align2::CENTER_CENTER,
                *label,
                FontId::monospace(9.0),
                with_alpha(color, frame.reveal),
            );
        }
    }

    /// Sub-step 3: the cleanliness ring gauge
    fn draw_hygiene(&self, ui: &Ui, frame: &SceneFrame) {
        let painter = ui.painter();
        let center = frame.rect.center();
        let radius = frame.rect.height().min(frame.rect.width()) * 0.18;

        painter.circle_stroke(center, radius, Stroke::new(6.0, with_alpha(Color32::WHITE, 0.08 * frame.reveal)));

        // 98% arc, drawn as a polyline
        let score = 0.98;
        let sweep = score * std::f32::consts::TAU * frame.reveal;
        let points: Vec<Pos2> = (0..=96)
            .map(|i| {
                let angle = -std::f32::consts::FRAC_PI_2 + sweep * (i as f32 / 96.0);
                center + Vec2::angled(angle) * radius
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(6.0, with_alpha(GREEN, frame.reveal))));

        painter.text(
            center,
            Align2::CENTER_CENTER,
            "98%",
            FontId::monospace(26.0),
            with_alpha(Color32::WHITE, frame.reveal),
        );
        painter.text(
            center + Vec2::new(0.0, radius + 26.0),
            Align2::CENTER_CENTER,
            "CLEANLINESS  //  NEXT SCAN 20m",
            FontId::monospace(11.0),
            with_alpha(GREEN, 0.8 * frame.reveal),
        );
    }

    /// Sub-step 4: alert rings racing to the staff badge
    fn draw_dispatch(&self, ui: &Ui, frame: &SceneFrame) {
        let painter = ui.painter();
        let origin = frame.rect.center() - Vec2::new(frame.rect.width() * 0.15, 0.0);
        let badge = frame.rect.center() + Vec2::new(frame.rect.width() * 0.2, 0.0);

        glow_circle(painter, origin, 8.0, RED, 0.9 * frame.reveal);
        for ring in 0..3 {
            let expand = ((frame.time * 0.8 + ring as f64 * 0.33) % 1.0) as f32;
            painter.circle_stroke(
                origin,
                12.0 + expand * 70.0,
                Stroke::new(2.0, with_alpha(RED, (1.0 - expand) * 0.6 * frame.reveal)),
            );
        }

        // Dispatch path
        let dash_phase = ((frame.time * 1.2) % 1.0) as f32;
        let delta = badge - origin;
        let segments = 9;
        for seg in 0..segments {
            let t0 = (seg as f32 + dash_phase * 0.5) / segments as f32;
            let t1 = t0 + 0.05;
            painter.line_segment(
                [origin + delta * t0.min(1.0), origin + delta * t1.min(1.0)],
                Stroke::new(2.0, with_alpha(ORANGE, 0.8 * frame.reveal)),
            );
        }

        let pill = Rect::from_center_size(badge, Vec2::new(120.0, 40.0));
        painter.rect_filled(pill, Rounding::same(10.0), with_alpha(Color32::BLACK, 0.7 * frame.reveal));
        painter.rect_stroke(pill, Rounding::same(10.0), Stroke::new(1.0, with_alpha(ORANGE, 0.7 * frame.reveal)));
        painter.text(
            badge,
            Align2::CENTER_CENTER,
            "STAFF PUSH",
            FontId::monospace(11.0),
            with_alpha(ORANGE, frame.reveal),
        );
    }
}

impl Scene for SecurityScene {
    fn name(&self) -> &str {
        "Security"
    }

    fn chapter(&self) -> Chapter {
        Chapter::Security
    }

    fn ui(&mut self, ui: &mut Ui, frame: &SceneFrame) {
        match frame.sub_step {
            0 => self.draw_monitor(ui, frame),
            1 => self.draw_scan(ui, frame),
            2 => self.draw_analysis(ui, frame),
            3 => self.draw_hygiene(ui, frame),
            _ => self.draw_dispatch(ui, frame),
        }
    }
}
