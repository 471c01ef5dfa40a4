//! Energy chapter: dark loads, the solar array, live yield

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};

use deck_core::Chapter;

use crate::fx::{glow_circle, pulse, with_alpha};
use crate::{Scene, SceneFrame};

const SLAB: Color32 = Color32::from_rgb(15, 23, 42);
const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
const PANEL_BLUE: Color32 = Color32::from_rgb(20, 60, 110);

pub struct EnergyScene;

impl EnergyScene {
    pub fn new() -> Self {
        Self
    }

    /// Sub-step 0: unoccupied rooms burning power
    fn draw_waste_rooms(&self, ui: &Ui, slab: Rect, frame: &SceneFrame) {
        let painter = ui.painter();
        let rows = 4;
        let cols = 6;
        let cell = Vec2::new(slab.width() / cols as f32, slab.height() / rows as f32);

        for row in 0..rows {
            for col in 0..cols {
                let room = Rect::from_min_size(
                    slab.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                    cell,
                )
                .shrink(6.0);

                // A third of the rooms flicker orange: lights on, nobody home
                let wasting = (row * cols + col) % 3 == 0;
                if wasting {
                    let flicker = pulse(frame.time + (row * cols + col) as f64 * 0.7, 1.3);
                    painter.rect_filled(
                        room,
                        Rounding::same(4.0),
                        with_alpha(ORANGE, (0.15 + 0.35 * flicker) * frame.reveal),
                    );
                } else {
                    painter.rect_filled(room, Rounding::same(4.0), with_alpha(SLAB, frame.reveal));
                }
                painter.rect_stroke(
                    room,
                    Rounding::same(4.0),
                    Stroke::new(1.0, with_alpha(Color32::WHITE, 0.08 * frame.reveal)),
                );
            }
        }
    }

    /// Sub-steps 1 and 2: the rooftop array, generating on step 2
    fn draw_solar_array(&self, ui: &Ui, slab: Rect, frame: &SceneFrame, generating: bool) {
        let painter = ui.painter();
        let rows = 3;
        let cols = 8;
        let cell = Vec2::new(slab.width() / cols as f32, slab.height() / rows as f32);

        for row in 0..rows {
            for col in 0..cols {
                let panel = Rect::from_min_size(
                    slab.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                    cell,
                )
                .shrink(5.0);

                let shimmer = if generating {
                    // Generation sweeps across the array column by column
                    pulse(frame.time * 2.0 - col as f64 * 0.35, 2.2)
                } else {
                    0.0
                };
                let fill = with_alpha(PANEL_BLUE, (0.7 + 0.3 * shimmer) * frame.reveal);
                painter.rect_filled(panel, Rounding::same(3.0), fill);
                painter.rect_stroke(
                    panel,
                    Rounding::same(3.0),
                    Stroke::new(1.0, with_alpha(CYAN, (0.25 + 0.5 * shimmer) * frame.reveal)),
                );
            }
        }

        // Sun above the array
        let sun = Pos2::new(slab.center().x, slab.min.y - slab.height() * 0.35);
        let intensity = if generating { 0.9 } else { 0.5 };
        glow_circle(ui.painter(), sun, 14.0, ORANGE, intensity * frame.reveal);

        if generating {
            self.draw_yield(ui, slab, frame);
        }
    }

    /// Feed lines down to the bus bar plus the live yield readout
    fn draw_yield(&self, ui: &Ui, slab: Rect, frame: &SceneFrame) {
        let painter = ui.painter();
        let bus_y = slab.max.y + slab.height() * 0.3;

        for lane in 0..4 {
            let x = slab.min.x + slab.width() * (0.125 + 0.25 * lane as f32);
            let flow = pulse(frame.time * 1.6 + lane as f64 * 0.4, 1.1);
            painter.line_segment(
                [Pos2::new(x, slab.max.y), Pos2::new(x, bus_y)],
                Stroke::new(2.0, with_alpha(CYAN, (0.2 + 0.6 * flow) * frame.reveal)),
            );
            // Energy packet travelling down the lane
            let packet_y = slab.max.y + (bus_y - slab.max.y) * flow;
            painter.circle_filled(Pos2::new(x, packet_y), 3.0, with_alpha(CYAN, frame.reveal));
        }

        painter.line_segment(
            [Pos2::new(slab.min.x, bus_y), Pos2::new(slab.max.x, bus_y)],
            Stroke::new(3.0, with_alpha(CYAN, 0.5 * frame.reveal)),
        );
        painter.text(
            Pos2::new(slab.center().x, bus_y + 24.0),
            Align2::CENTER_CENTER,
            "42.5 kW  //  STATUS: OPTIMAL",
            FontId::monospace(12.0),
            with_alpha(CYAN, (0.6 + 0.4 * pulse(frame.time, 1.8)) * frame.reveal),
        );
    }
}

impl Scene for EnergyScene {
    fn name(&self) -> &str {
        "Energy"
    }

    fn chapter(&self) -> Chapter {
        Chapter::Energy
    }

    fn ui(&mut self, ui: &mut Ui, frame: &SceneFrame) {
        let slab = Rect::from_center_size(
            frame.rect.center(),
            Vec2::new(frame.rect.width() * 0.7, frame.rect.height() * 0.45),
        );

        ui.painter().rect_stroke(
            slab.expand(14.0),
            Rounding::same(24.0),
            Stroke::new(2.0, with_alpha(Color32::WHITE, 0.25 * frame.reveal)),
        );

        match frame.sub_step {
            0 => self.draw_waste_rooms(ui, slab, frame),
            1 => self.draw_solar_array(ui, slab, frame, false),
            _ => self.draw_solar_array(ui, slab, frame, true),
        }
    }
}
