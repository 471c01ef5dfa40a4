//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;

use deck_core::{Catalog, NavigationContext, NavigationEngine, NavigationSubscriber};
use deck_scenes::SceneStage;
use deck_ui::{ContentPanel, ControlBar, DotRail, StatusHud, Theme};

mod input;

/// Wakes the UI whenever the engine publishes a navigation change, so a
/// dot click registers even if the app happens to be idle
struct RepaintOnChange {
    ctx: Context,
}

impl NavigationSubscriber for RepaintOnChange {
    fn on_navigation_change(&self, _context: &NavigationContext) {
        self.ctx.request_repaint();
    }
}

/// Main application state
struct OrbitDeckApp {
    /// The immutable deck content
    catalog: Arc<Catalog>,

    /// The navigation state machine, shared with the clickable surfaces
    navigation: Arc<NavigationEngine>,

    /// Background scene stage
    stage: SceneStage,

    /// Overlay surfaces
    content: ContentPanel,
    dots: DotRail,
    hud: StatusHud,
    controls: ControlBar,

    /// Keeps the repaint subscriber registration alive
    _repaint: Arc<RepaintOnChange>,
}

impl OrbitDeckApp {
    fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        deck_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let catalog = Arc::new(catalog);
        let navigation = Arc::new(NavigationEngine::new(catalog.len()));

        let repaint = Arc::new(RepaintOnChange {
            ctx: cc.egui_ctx.clone(),
        });
        navigation.add_subscriber(repaint.clone());

        Self {
            dots: DotRail::new(navigation.clone()),
            controls: ControlBar::new(navigation.clone()),
            stage: SceneStage::new(),
            content: ContentPanel::new(),
            hud: StatusHud::new(),
            catalog,
            navigation,
            _repaint: repaint,
        }
    }
}

impl eframe::App for OrbitDeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Clear the transitioning flag once the cooldown window elapses
        self.navigation.tick();

        // Translate this frame's raw input into navigation requests.
        // Requests inside the cooldown window are dropped by the engine.
        let requests = ctx.input(input::frame_requests);
        for request in requests {
            self.navigation.navigate(request);
        }

        let nav = self.navigation.context();
        let reveal = self.navigation.transition_progress();
        let section = self
            .catalog
            .section(nav.current_index)
            .unwrap_or_else(|| &self.catalog.sections()[0]);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.stage.ui(ui, &nav, reveal, section.layout);
                self.content.ui(ui, section, &nav, reveal);
                self.dots.ui(ui, &self.catalog);
                self.hud.ui(ui, &nav);
                self.controls.ui(ui);
            });

        // Scenes animate continuously
        ctx.request_repaint();
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Orbit Deck");

    let catalog = Catalog::load()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("Orbit Deck"),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Orbit Deck",
        options,
        Box::new(|cc| Box::new(OrbitDeckApp::new(cc, catalog))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
