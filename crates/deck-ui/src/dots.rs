//! Dot rail: one clickable dot per section along the right edge

use std::sync::Arc;

use egui::{Pos2, Rect, Sense, Stroke, Ui, Vec2};

use deck_core::{Catalog, NavRequest, NavigationEngine};

use crate::theme::palette;

/// Vertical dot indicator, the deck's direct-selection input
pub struct DotRail {
    navigation: Arc<NavigationEngine>,
}

impl DotRail {
    pub fn new(navigation: Arc<NavigationEngine>) -> Self {
        Self { navigation }
    }

    pub fn ui(&self, ui: &mut Ui, catalog: &Catalog) {
        let nav = self.navigation.context();
        let full = ui.max_rect();
        let spacing = 26.0;
        let rail_height = spacing * (catalog.len() as f32 - 1.0);
        let x = full.max.x - 34.0;
        let top = full.center().y - rail_height / 2.0;
        let time = ui.input(|i| i.time);

        for (index, section) in catalog.sections().iter().enumerate() {
            let center = Pos2::new(x, top + spacing * index as f32);
            let hit = Rect::from_center_size(center, Vec2::splat(20.0));
            let response = ui.interact(hit, ui.id().with(("dot", index)), Sense::click());
            let active = index == nav.current_index;

            let painter = ui.painter();
            if active {
                // Ping ring around the active dot
                let ping = ((time * 0.9) % 1.0) as f32;
                painter.circle_stroke(
                    center,
                    5.0 + ping * 9.0,
                    Stroke::new(1.5, palette::CYAN.linear_multiply(1.0 - ping)),
                );
                painter.circle_filled(center, 6.0, palette::CYAN);
            } else if response.hovered() {
                painter.circle_stroke(center, 5.0, Stroke::new(2.0, palette::CYAN));
            } else {
                painter.circle_stroke(center, 4.5, Stroke::new(2.0, palette::LINE));
            }

            let response = response.on_hover_text(&section.title);
            if response.clicked() {
                tracing::trace!(index, "Dot selected");
                // Same entry point as every other input source
                self.navigation.navigate(NavRequest::GoTo(index));
            }
        }
    }
}
